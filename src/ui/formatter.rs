//! Pure formatting functions for UI output.
//!
//! Only the label itself goes to stdout so the tool can be used in scripts;
//! everything else is written to stderr.

use console::style;

use crate::fallback::FallbackWarning;
use crate::labeller::LabelOutcome;

/// Print the computed label on stdout.
pub fn display_label(label: &str) {
    println!("{}", label);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a fallback warning to the user.
pub fn display_fallback_warning(warning: &FallbackWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summarize how a label was computed.
///
/// Shows the previous version, the detected change level, up to 10 of the
/// comments that were considered and the resulting version.
///
/// # Arguments
/// * `outcome` - Result of the label computation
/// * `comments` - Comments the label was computed from
pub fn display_analysis(outcome: &LabelOutcome, comments: &[String]) {
    eprintln!("\n{}", style("Label analysis").bold());
    eprintln!("  Previous: {}", style(outcome.previous).red());
    eprintln!("  Change:   {}", outcome.bump);
    eprintln!("  New:      {}", style(&outcome.label).green());

    eprintln!(
        "{}",
        style(format!("{} comments:", comments.len())).underlined()
    );
    for (i, comment) in comments.iter().take(10).enumerate() {
        eprintln!("  {}. {}", i + 1, summary_line(comment));
    }
    if comments.len() > 10 {
        eprintln!("  ... and {} more comments", comments.len() - 10);
    }

    for warning in &outcome.warnings {
        display_fallback_warning(warning);
    }
}

/// First line of a comment, cut to 60 characters.
pub fn summary_line(comment: &str) -> String {
    let first = comment.lines().next().unwrap_or("");
    if first.chars().count() > 60 {
        let cut: String = first.chars().take(60).collect();
        format!("{}…", cut)
    } else {
        first.to_string()
    }
}
