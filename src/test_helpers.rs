//! Shared test fixtures for the ratiopad test suite.
//!
//! Synthetic photos are generated in-process with `image` encoders, so
//! tests never depend on binary fixture files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_test_jpeg(&tmp.path().join("wide.jpg"), 1920, 1080);
//! create_corrupt_photo(&tmp.path().join("broken.jpg"));
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

/// Deterministic gradient, unique per position and never pure white
/// (blue stays at 128), so bar pixels are distinguishable from content.
fn test_pattern(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a small valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = test_pattern(width, height);
    let file = File::create(path).unwrap();
    let writer = BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a small valid PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = test_pattern(width, height);
    let file = File::create(path).unwrap();
    let writer = BufWriter::new(file);
    PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a file whose extension claims photo but whose bytes don't decode.
pub fn create_corrupt_photo(path: &Path) {
    std::fs::write(path, b"not an image at all").unwrap();
}
