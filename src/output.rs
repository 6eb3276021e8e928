//! CLI output formatting for pad and classify runs.
//!
//! # Output Format
//!
//! ## Pad
//!
//! ```text
//! [I] tall.jpg rotated 90
//! [I] square.png padded, ratio: 3x3, from: 1000x1000, to: 1500x1000, keep width: false
//! [I] classic.jpg resized, ratio: 4x3, from: 4000x3000
//! [E] broken.jpg: cannot decode: ...
//! 5 processed, 1 failed (6 total)
//! ```
//!
//! Every line carries an `[I]`/`[E]` severity tag, so failures stand out
//! even when workers interleave their progress.
//!
//! ## Classify
//!
//! ```text
//! mv 'wide.jpg' 16x9/
//! [E] broken.jpg: cannot decode: ...
//! ```
//!
//! The `mv` lines are ready to paste into a shell; single quotes guard
//! filenames containing spaces.
//!
//! # Architecture
//!
//! Each mode has a `format_*` function (returns `String`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are
//! pure: no I/O, no side effects.

use crate::classify::ClassifyResult;
use crate::pipeline::{JobEvent, JobResult};

// ============================================================================
// Pad progress
// ============================================================================

/// Format one batch progress event as a display line.
pub fn format_job_event(event: &JobEvent) -> String {
    match event {
        JobEvent::Rotated { filename } => format!("[I] {filename} rotated 90"),
        JobEvent::Padded {
            filename,
            ratio,
            from,
            to,
            keep_width,
        } => format!(
            "[I] {filename} padded, ratio: {ratio}, from: {}x{}, to: {}x{}, keep width: {keep_width}",
            from.0, from.1, to.0, to.1
        ),
        JobEvent::Resized {
            filename,
            ratio,
            from,
        } => format!(
            "[I] {filename} resized, ratio: {ratio}, from: {}x{}",
            from.0, from.1
        ),
        JobEvent::Failed { filename, error } => format!("[E] {filename}: {error}"),
    }
}

/// Print a batch progress event to stdout.
pub fn print_job_event(event: &JobEvent) {
    println!("{}", format_job_event(event));
}

/// Format the end-of-batch summary line.
pub fn format_summary(results: &[JobResult]) -> String {
    let ok = results.iter().filter(|r| r.success).count();
    let failed = results.len() - ok;
    if failed == 0 {
        format!("{ok} processed")
    } else {
        format!("{ok} processed, {failed} failed ({} total)", results.len())
    }
}

/// Print the end-of-batch summary to stdout.
pub fn print_summary(results: &[JobResult]) {
    println!("{}", format_summary(results));
}

// ============================================================================
// Classify output
// ============================================================================

/// Format one classification as a shell `mv` suggestion, or an error line.
pub fn format_classify_result(result: &ClassifyResult) -> String {
    match &result.outcome {
        Ok(c) => format!("mv '{}' {}/", result.filename, c.ratio.name),
        Err(err) => format!("[E] {}: {}", result.filename, err),
    }
}

/// Print a classification line to stdout.
pub fn print_classify_result(result: &ClassifyResult) {
    println!("{}", format_classify_result(result));
}
