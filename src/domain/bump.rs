use std::fmt;

// Stored upper-case; comments are compared after upper-casing each char.
const MAJOR_PREFIX: &str = "MAJOR:";
const MINOR_PREFIX: &str = "MINOR:";
const PATCH_PREFIX: &str = "PATCH:";

/// Strength of the version bump signalled by a batch of change comments.
///
/// Ordered `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionBump {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Classify a single comment by its case-insensitive prefix.
    ///
    /// Case folding is per character and Unicode-aware, so `"mınor:"` (dotless
    /// i) upper-cases to `"MINOR:"` and matches. Leading whitespace is
    /// significant: `"  major: x"` is not a match.
    pub fn from_comment(comment: &str) -> VersionBump {
        if has_prefix(comment, MAJOR_PREFIX) {
            VersionBump::Major
        } else if has_prefix(comment, MINOR_PREFIX) {
            VersionBump::Minor
        } else if has_prefix(comment, PATCH_PREFIX) {
            VersionBump::Patch
        } else {
            VersionBump::None
        }
    }

    /// Determine the bump level for a batch of comments, in the order given.
    ///
    /// - `major:` wins immediately and stops the scan
    /// - `minor:` always raises the level, later comments are still read
    /// - `patch:` only applies while nothing has been recorded yet
    ///
    /// Absent, empty and whitespace-only comments are skipped.
    pub fn from_comments<I, S>(comments: I) -> VersionBump
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut bump = VersionBump::None;

        for comment in comments.into_iter().flatten() {
            let comment = comment.as_ref();
            if comment.trim().is_empty() {
                continue;
            }

            match VersionBump::from_comment(comment) {
                VersionBump::Major => return VersionBump::Major,
                VersionBump::Minor => bump = VersionBump::Minor,
                VersionBump::Patch if bump == VersionBump::None => bump = VersionBump::Patch,
                _ => {}
            }
        }

        bump
    }
}

fn has_prefix(comment: &str, prefix: &str) -> bool {
    let mut chars = comment.chars();
    prefix
        .chars()
        .all(|expected| chars.next().map(simple_uppercase) == Some(expected))
}

/// Upper-case a char, keeping it unchanged when the mapping expands (`ß`).
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::None => "none",
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        };
        f.write_str(name)
    }
}
