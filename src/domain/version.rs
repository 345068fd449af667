use crate::domain::VersionBump;
use crate::error::{LabellerError, Result};
use std::fmt;

/// Four-component build version (`major.minor.patch.revision`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub revision: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32, revision: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            revision,
        }
    }

    /// Parse a dotted build label (e.g., "2.3.5.1239" -> Version(2,3,5,1239))
    ///
    /// Accepts two to four components. Absent trailing components are 0.
    /// Each component must be a non-negative 32-bit integer; surrounding
    /// whitespace and a leading `+` are tolerated.
    pub fn parse(label: &str) -> Result<Self> {
        let parts: Vec<&str> = label.split('.').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(LabellerError::version(format!(
                "Invalid version format: '{}' - expected major.minor[.patch[.revision]]",
                label
            )));
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = match parts.get(2) {
            Some(part) => parse_component(part, "patch")?,
            None => 0,
        };
        let revision = match parts.get(3) {
            Some(part) => parse_component(part, "revision")?,
            None => 0,
        };

        Ok(Version {
            major,
            minor,
            patch,
            revision,
        })
    }

    /// Bump version according to bump level. The revision is carried over.
    pub fn bump(&self, bump: VersionBump) -> Self {
        match bump {
            VersionBump::Major => Version {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
                ..*self
            },
            VersionBump::Minor => Version {
                minor: self.minor.saturating_add(1),
                patch: 0,
                ..*self
            },
            VersionBump::Patch => Version {
                patch: self.patch.saturating_add(1),
                ..*self
            },
            VersionBump::None => *self,
        }
    }

    /// Replace the revision component
    pub fn with_revision(self, revision: u32) -> Self {
        Version { revision, ..self }
    }
}

fn parse_component(part: &str, name: &str) -> Result<u32> {
    let value = part
        .trim()
        .parse::<i32>()
        .map_err(|_| LabellerError::version(format!("Invalid {} component: '{}'", name, part)))?;

    u32::try_from(value).map_err(|_| {
        LabellerError::version(format!("Negative {} component: '{}'", name, part))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.revision
        )
    }
}
