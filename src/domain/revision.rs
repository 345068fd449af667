/// Modulus applied to the change number when none is configured
pub const DEFAULT_REVISION_MODULUS: i32 = 10000;

/// Raw last-change number as handed over by the change source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeNumber {
    Absent,
    Unparsable(String),
    Parsed(i32),
}

impl ChangeNumber {
    /// Parse a change number such as an svn revision ("1240").
    ///
    /// Empty input counts as absent; surrounding whitespace is tolerated.
    pub fn parse(raw: Option<&str>) -> ChangeNumber {
        match raw {
            None => ChangeNumber::Absent,
            Some(raw) if raw.is_empty() => ChangeNumber::Absent,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(value) => ChangeNumber::Parsed(value),
                Err(_) => ChangeNumber::Unparsable(raw.to_string()),
            },
        }
    }
}

/// Where the final revision component came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionSource {
    ChangeNumber,
    PreviousVersion,
}

/// Resolved revision component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub value: u32,
    pub source: RevisionSource,
}

/// Effective modulus: the configured one when positive, otherwise 10000
pub fn effective_modulus(configured: i32) -> i32 {
    if configured > 0 {
        configured
    } else {
        DEFAULT_REVISION_MODULUS
    }
}

/// Fold a change number into `[0, modulus)`; negative input stays negative.
pub fn fold(value: i32, configured_modulus: i32) -> i32 {
    value % effective_modulus(configured_modulus)
}

/// Resolve the revision component for a new label.
///
/// A folded value `<= 0` falls back to the previous revision. This also
/// applies when the modulus reduces a valid change number to exactly 0.
pub fn resolve(change: &ChangeNumber, configured_modulus: i32, previous: u32) -> Revision {
    let folded = match change {
        ChangeNumber::Parsed(value) => fold(*value, configured_modulus),
        ChangeNumber::Absent | ChangeNumber::Unparsable(_) => 0,
    };

    match u32::try_from(folded) {
        Ok(value) if value > 0 => Revision {
            value,
            source: RevisionSource::ChangeNumber,
        },
        _ => Revision {
            value: previous,
            source: RevisionSource::PreviousVersion,
        },
    }
}
