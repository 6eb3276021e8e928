//! Directory scanning: find the photos a batch will process.
//!
//! Scanning is flat and happens once, before any worker starts, so
//! outputs written during a batch never feed back into the same run.
//! A second run over the same directory will pick them up.
//!
//! ```text
//! shoot/
//! ├── dawn.jpg          # listed
//! ├── square.PNG        # listed (extension check is case-insensitive)
//! ├── notes.txt         # skipped (not a photo extension)
//! └── rejects/          # skipped (subdirectories are never entered)
//! ```
//!
//! Filenames that are not valid UTF-8 are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::imaging;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the photo filenames directly inside `dir`, sorted by name.
///
/// Sorting makes enumeration (and therefore result and report order)
/// deterministic regardless of filesystem iteration order.
pub fn list_photo_files(dir: &Path) -> Result<Vec<String>, ScanError> {
    let list_err = |source| ScanError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        if path.is_dir() || !imaging::is_photo_file(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();
    Ok(files)
}
