//! Photo decode and encode for the delivery formats.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image` crate pure Rust decoders |
//! | Header-only dimensions | `ImageReader::into_dimensions` |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` (quality 100) |
//! | Encode → PNG | `PngEncoder` (lossless) |

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::config::JPEG_QUALITY;

/// Extensions accepted as input photos, lowercase.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("cannot open: {0}")]
    Open(std::io::Error),
    #[error("cannot decode: {0}")]
    Decode(image::ImageError),
    #[error("zero-area image ({0}x{1})")]
    ZeroArea(u32, u32),
    #[error("cannot create output: {0}")]
    Create(std::io::Error),
    #[error("cannot encode: {0}")]
    Encode(image::ImageError),
    #[error("unsupported output extension: {0:?}")]
    UnsupportedExtension(String),
}

/// Whether a path names a photo we can process, by extension.
pub fn is_photo_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PHOTO_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
}

/// Load and decode a photo from disk.
pub fn load_photo(path: &Path) -> Result<DynamicImage, CodecError> {
    let img = ImageReader::open(path)
        .map_err(CodecError::Open)?
        .decode()
        .map_err(CodecError::Decode)?;
    ensure_nonzero(img.width(), img.height())?;
    Ok(img)
}

/// Read a photo's dimensions from its header without a full decode.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32), CodecError> {
    let (width, height) = ImageReader::open(path)
        .map_err(CodecError::Open)?
        .into_dimensions()
        .map_err(CodecError::Decode)?;
    ensure_nonzero(width, height)?;
    Ok((width, height))
}

/// Save a photo to the given path, format inferred from the extension.
///
/// The extension is checked before the output file is created, so an
/// unsupported path leaves nothing behind on disk.
pub fn save_photo(img: &DynamicImage, path: &Path) -> Result<(), CodecError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => {
            let writer = create_writer(path)?;
            let mut encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
            // JPEG has no alpha channel
            encoder
                .encode_image(&img.to_rgb8())
                .map_err(CodecError::Encode)
        }
        "png" => {
            let writer = create_writer(path)?;
            let encoder = PngEncoder::new(writer);
            img.write_with_encoder(encoder).map_err(CodecError::Encode)
        }
        other => Err(CodecError::UnsupportedExtension(other.to_string())),
    }
}

fn create_writer(path: &Path) -> Result<BufWriter<File>, CodecError> {
    let file = File::create(path).map_err(CodecError::Create)?;
    Ok(BufWriter::new(file))
}

fn ensure_nonzero(width: u32, height: u32) -> Result<(), CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::ZeroArea(width, height));
    }
    Ok(())
}
