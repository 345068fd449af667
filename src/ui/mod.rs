//! User interface module - input handling and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reading comments from the terminal or a pipe

use std::io::BufRead;

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_analysis, display_fallback_warning, display_label, display_status};

/// Reads change comments, one per line.
///
/// Trailing `\r` is stripped. Blank lines are kept; the labeller skips them.
/// Invalid UTF-8 is replaced with U+FFFD so one badly encoded message does
/// not lose the rest of the batch.
///
/// # Arguments
/// * `reader` - Source of comment lines (usually stdin)
///
/// # Returns
/// * `Ok(Vec<String>)` - The comments in input order
/// * `Err` - If reading from `reader` fails
pub fn read_comments<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut comments = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        comments.push(line.trim_end_matches('\n').trim_end_matches('\r').to_string());
    }
    Ok(comments)
}
