pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod format;
pub mod labeller;
pub mod ui;

pub use config::LabellerConfig;
pub use domain::{Version, VersionBump};
pub use error::{LabellerError, Result};
pub use labeller::{generate, LabelOutcome, VersionLabeller};
