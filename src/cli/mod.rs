//! Command-line surface: argument parsing and the labelling workflow

pub mod orchestration;

use clap::Parser;

use orchestration::{ConfigOverrides, LabelWorkflowArgs};

#[derive(Parser, Debug)]
#[command(
    name = "semver-labeller",
    about = "Compute the next build label from change comments",
    after_help = "Comments starting with 'major:', 'minor:' or 'patch:' (any case) bump the version."
)]
pub struct Args {
    /// Change comments since the previous build
    #[arg(value_name = "COMMENT")]
    pub comments: Vec<String>,

    #[arg(short, long, value_name = "LABEL", help = "Label of the previous build")]
    pub previous: Option<String>,

    #[arg(
        short = 'n',
        long,
        value_name = "N",
        allow_hyphen_values = true,
        help = "Last change number reported by source control"
    )]
    pub change_number: Option<String>,

    #[arg(
        short = 'm',
        long = "comment",
        value_name = "TEXT",
        help = "Additional change comment (repeatable)"
    )]
    pub extra_comments: Vec<String>,

    #[arg(long, help = "Read additional comments from stdin, one per line")]
    pub stdin: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, help = "Seed major version used without a previous label")]
    pub major: Option<u32>,

    #[arg(long, help = "Seed minor version used without a previous label")]
    pub minor: Option<u32>,

    #[arg(long, help = "Seed patch version used without a previous label")]
    pub patch: Option<u32>,

    #[arg(long, help = "Seed revision used without a previous label")]
    pub revision: Option<u32>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Modulus applied to the change number (<= 0 means 10000)"
    )]
    pub revision_modulus: Option<i32>,

    #[arg(long, value_name = "FMT", help = "Format for the major component")]
    pub major_format: Option<String>,

    #[arg(long, value_name = "FMT", help = "Format for the minor component")]
    pub minor_format: Option<String>,

    #[arg(long, value_name = "FMT", help = "Format for the patch component")]
    pub patch_format: Option<String>,

    #[arg(long, value_name = "FMT", help = "Format for the revision component")]
    pub revision_format: Option<String>,

    #[arg(long, help = "Explain how the label was computed (stderr)")]
    pub explain: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    pub version: bool,
}

impl Args {
    /// Convert parsed arguments into workflow arguments
    pub fn into_workflow_args(self) -> LabelWorkflowArgs {
        let mut comments = self.comments;
        comments.extend(self.extra_comments);

        LabelWorkflowArgs {
            config_path: self.config,
            previous_label: self.previous,
            change_number: self.change_number,
            comments,
            read_stdin: self.stdin,
            overrides: ConfigOverrides {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                revision: self.revision,
                revision_modulus: self.revision_modulus,
                major_label_format: self.major_format,
                minor_label_format: self.minor_format,
                patch_label_format: self.patch_format,
                revision_label_format: self.revision_format,
            },
        }
    }
}
