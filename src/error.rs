use thiserror::Error;

/// Unified error type for semver-labeller operations
#[derive(Error, Debug)]
pub enum LabellerError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-labeller
pub type Result<T> = std::result::Result<T, LabellerError>;

impl LabellerError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        LabellerError::Version(msg.into())
    }

    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        LabellerError::Format(msg.into())
    }
}
