//! Batch padding pipeline: classify, pad, and resize a directory of photos.
//!
//! Each photo moves through decode → orient → classify → pad (rule
//! permitting) → resize → encode, independently of its neighbors:
//!
//! ```text
//! shoot/
//! ├── wide.jpg          # 3840x2160 (16x9) → 3x2.wide.jpg    (black bars)
//! ├── square.png        # 1000x1000 (3x3)  → 3x2.square.png  (white bars)
//! ├── classic.jpg       # 4000x3000 (4x3)  → 4x3.classic.jpg (resize only)
//! └── broken.jpg        # decode fails     → reported, batch continues
//! ```
//!
//! ## Parallel Processing
//!
//! Photos fan out to a [rayon](https://docs.rs/rayon) worker per file; the
//! stages within one file stay sequential. [`run`] returns only after every
//! file has completed or failed, with results in filename order. Progress
//! events stream over an optional channel so printing stays off the workers.

use std::path::Path;
use std::sync::mpsc::Sender;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::PadConfig;
use crate::imaging::{self, CodecError};
use crate::ratio;
use crate::scan::{self, ScanError};

/// A progress event emitted while a batch runs.
#[derive(Debug, Clone)]
pub enum JobEvent {
    /// Portrait source was rotated to landscape.
    Rotated { filename: String },
    /// A padding rule fired; the canvas grew from `from` to `to`.
    Padded {
        filename: String,
        ratio: &'static str,
        from: (u32, u32),
        to: (u32, u32),
        keep_width: bool,
    },
    /// No rule for this ratio; straight to the delivery resize.
    Resized {
        filename: String,
        ratio: &'static str,
        from: (u32, u32),
    },
    /// The file failed; the batch continues without it.
    Failed { filename: String, error: String },
}

/// Outcome of one file, success or failure.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub filename: String,
    pub success: bool,
    /// Classified source ratio, when the file decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<&'static str>,
    /// Name of the written delivery copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the padding batch over every photo directly inside `dir`.
///
/// Enumeration happens once, up front, so the batch's own outputs are
/// never re-processed within the run. Per-file failures become failed
/// [`JobResult`]s rather than stopping the batch.
pub fn run(
    dir: &Path,
    config: &PadConfig,
    events: Option<Sender<JobEvent>>,
) -> Result<Vec<JobResult>, ScanError> {
    let files = scan::list_photo_files(dir)?;
    if files.is_empty() {
        return Ok(Vec::new());
    }

    Ok(files
        .par_iter()
        .map_with(events, |tx, filename| {
            process_photo(dir, filename, config, tx.as_ref())
        })
        .collect())
}

/// One photo, end to end. Every failure mode is caught here.
fn process_photo(
    dir: &Path,
    filename: &str,
    config: &PadConfig,
    events: Option<&Sender<JobEvent>>,
) -> JobResult {
    match pad_photo(dir, filename, config, events) {
        Ok(delivery) => JobResult {
            filename: filename.to_string(),
            success: true,
            ratio: Some(delivery.ratio),
            output: Some(delivery.output),
            error: None,
        },
        Err(err) => {
            emit(
                events,
                JobEvent::Failed {
                    filename: filename.to_string(),
                    error: err.to_string(),
                },
            );
            JobResult {
                filename: filename.to_string(),
                success: false,
                ratio: None,
                output: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// The written delivery copy for one photo.
struct Delivery {
    ratio: &'static str,
    output: String,
}

fn pad_photo(
    dir: &Path,
    filename: &str,
    config: &PadConfig,
    events: Option<&Sender<JobEvent>>,
) -> Result<Delivery, CodecError> {
    let img = imaging::load_photo(&dir.join(filename))?;

    let (img, rotated) = imaging::normalize_orientation(img);
    if rotated {
        emit(
            events,
            JobEvent::Rotated {
                filename: filename.to_string(),
            },
        );
    }

    let (width, height) = (img.width(), img.height());
    let classified = ratio::classify(width, height);

    // The output prefix names the delivery ratio: the rule's target when
    // padding happened, the classified ratio otherwise.
    let (delivery_img, prefix) = match config.rule_for(classified.name) {
        Some(rule) => {
            let plan = imaging::plan_padding(width, height, rule.target.value, rule.placement);
            emit(
                events,
                JobEvent::Padded {
                    filename: filename.to_string(),
                    ratio: classified.name,
                    from: (width, height),
                    to: (plan.canvas_width, plan.canvas_height),
                    keep_width: plan.keep_width,
                },
            );
            let canvas = imaging::composite(&img, &plan, rule.fill);
            (imaging::resize_to_output(&canvas), rule.target.name)
        }
        None => {
            emit(
                events,
                JobEvent::Resized {
                    filename: filename.to_string(),
                    ratio: classified.name,
                    from: (width, height),
                },
            );
            (imaging::resize_to_output(&img), classified.name)
        }
    };

    let output = format!("{}.{}", prefix, filename);
    imaging::save_photo(&delivery_img, &dir.join(&output))?;

    Ok(Delivery {
        ratio: classified.name,
        output,
    })
}

fn emit(events: Option<&Sender<JobEvent>>, event: JobEvent) {
    if let Some(tx) = events {
        // A dropped receiver just means nobody is listening
        let _ = tx.send(event);
    }
}
