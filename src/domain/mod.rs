//! Domain logic - pure version labelling rules, no I/O

pub mod bump;
pub mod revision;
pub mod version;

pub use bump::VersionBump;
pub use revision::{ChangeNumber, Revision, RevisionSource};
pub use version::Version;
