use crate::format::Component;
use std::fmt;

/// Non-fatal conditions where an input was replaced by a fallback value.
/// The label is still produced; these explain how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackWarning {
    /// No previous label was supplied
    NoPreviousLabel { baseline: String },
    /// Previous label exists but cannot be parsed as a dotted version
    UnparsablePreviousLabel {
        label: String,
        reason: String,
        baseline: String,
    },
    /// Change number exists but is not an integer
    UnparsableChangeNumber { value: String },
    /// Revision was taken from the previous version
    RevisionFromPrevious { revision: u32 },
    /// A configured component format is invalid and plain decimal is used
    InvalidFormat {
        component: Component,
        format: String,
        reason: String,
    },
    /// Configuration could not be loaded and defaults are used
    ConfigUnavailable { reason: String },
}

impl fmt::Display for FallbackWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackWarning::NoPreviousLabel { baseline } => {
                write!(f, "No previous label, starting from {}", baseline)
            }
            FallbackWarning::UnparsablePreviousLabel {
                label,
                reason,
                baseline,
            } => write!(
                f,
                "Cannot parse previous label '{}': {} (using {})",
                label, reason, baseline
            ),
            FallbackWarning::UnparsableChangeNumber { value } => {
                write!(f, "Change number '{}' is not an integer", value)
            }
            FallbackWarning::RevisionFromPrevious { revision } => {
                write!(f, "Revision {} carried over from previous label", revision)
            }
            FallbackWarning::InvalidFormat {
                component,
                format,
                reason,
            } => write!(
                f,
                "Invalid {} format '{}': {} (using plain decimal)",
                component, format, reason
            ),
            FallbackWarning::ConfigUnavailable { reason } => {
                write!(f, "Configuration unavailable: {} (using defaults)", reason)
            }
        }
    }
}
