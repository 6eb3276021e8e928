//! Classification-only mode: report ratios without writing anything.
//!
//! Reads just the image headers (no full decode), so bucketing a large
//! shoot by ratio stays cheap. Each readable photo yields a shell `mv`
//! suggestion; the command is printed, never executed.

use std::path::Path;

use crate::imaging::{self, CodecError};
use crate::ratio::{self, StandardRatio};
use crate::scan::{self, ScanError};

/// A photo's dimensions and nearest standard ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub width: u32,
    pub height: u32,
    pub ratio: &'static StandardRatio,
}

/// Per-file classification outcome.
#[derive(Debug)]
pub struct ClassifyResult {
    pub filename: String,
    pub outcome: Result<Classification, CodecError>,
}

/// Classify every photo directly inside `dir`, in filename order.
///
/// Unreadable files become failed outcomes; only failing to list the
/// directory itself stops the run.
pub fn classify_directory(dir: &Path) -> Result<Vec<ClassifyResult>, ScanError> {
    let files = scan::list_photo_files(dir)?;
    Ok(files
        .into_iter()
        .map(|filename| {
            let outcome = classify_file(&dir.join(&filename));
            ClassifyResult { filename, outcome }
        })
        .collect())
}

fn classify_file(path: &Path) -> Result<Classification, CodecError> {
    let (width, height) = imaging::read_dimensions(path)?;
    Ok(Classification {
        width,
        height,
        ratio: ratio::classify(width, height),
    })
}
