//! Main workflow orchestration logic
//!
//! Gathers the inputs for one label (configuration, comments, previous
//! label, change number) and runs the labeller. Decoupled from clap so it
//! can be driven programmatically and from tests.

use std::io::BufRead;

use crate::config::{self, LabellerConfig};
use crate::fallback::FallbackWarning;
use crate::labeller::{LabelOutcome, VersionLabeller};
use crate::ui;

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub revision: Option<u32>,
    pub revision_modulus: Option<i32>,
    pub major_label_format: Option<String>,
    pub minor_label_format: Option<String>,
    pub patch_label_format: Option<String>,
    pub revision_label_format: Option<String>,
}

impl ConfigOverrides {
    /// Apply the overrides onto a loaded configuration
    pub fn apply(self, mut config: LabellerConfig) -> LabellerConfig {
        if let Some(major) = self.major {
            config.major = major;
        }
        if let Some(minor) = self.minor {
            config.minor = minor;
        }
        if let Some(patch) = self.patch {
            config.patch = patch;
        }
        if let Some(revision) = self.revision {
            config.revision = revision;
        }
        if let Some(modulus) = self.revision_modulus {
            config.revision_modulus = modulus;
        }
        if self.major_label_format.is_some() {
            config.major_label_format = self.major_label_format;
        }
        if self.minor_label_format.is_some() {
            config.minor_label_format = self.minor_label_format;
        }
        if self.patch_label_format.is_some() {
            config.patch_label_format = self.patch_label_format;
        }
        if self.revision_label_format.is_some() {
            config.revision_label_format = self.revision_label_format;
        }
        config
    }
}

/// Arguments for the label workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Label of the previous build
    pub previous_label: Option<String>,

    /// Last change number from source control
    pub change_number: Option<String>,

    /// Comments given on the command line
    pub comments: Vec<String>,

    /// Append comments read from the input reader
    pub read_stdin: bool,

    pub overrides: ConfigOverrides,
}

/// Result of a label workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    /// Labeller outcome, including fallbacks raised while gathering input
    pub outcome: LabelOutcome,

    /// All comments that were classified, in order
    pub comments: Vec<String>,
}

/// Main label workflow
///
/// 1. Load configuration (defaults when unavailable)
/// 2. Apply command-line overrides
/// 3. Collect comments from arguments and, if requested, `input`
/// 4. Compute the label
///
/// Never fails: an unusable configuration is reported as
/// [`FallbackWarning::ConfigUnavailable`], unreadable stdin as a status
/// line, and the workflow continues.
pub fn run_label_workflow<R: BufRead>(args: LabelWorkflowArgs, input: R) -> WorkflowResult {
    let mut warnings = Vec::new();

    let loaded = match config::load_config(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let warning = FallbackWarning::ConfigUnavailable {
                reason: e.to_string(),
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            LabellerConfig::default()
        }
    };
    let config = args.overrides.apply(loaded);

    let mut comments = args.comments;
    if args.read_stdin {
        match ui::read_comments(input) {
            Ok(read) => comments.extend(read),
            Err(e) => {
                tracing::warn!(error = %e, "could not read comments from stdin");
                ui::display_status(&format!(
                    "Could not read comments from stdin: {}. Using command-line comments only.",
                    e
                ));
            }
        }
    }

    let labeller = VersionLabeller::new(config);
    let mut outcome = labeller.generate_detailed(
        args.previous_label.as_deref(),
        comments.iter().map(Some),
        args.change_number.as_deref(),
    );
    warnings.append(&mut outcome.warnings);
    outcome.warnings = warnings;

    WorkflowResult { outcome, comments }
}
