//! Raster transforms: orientation, bar compositing, delivery resize.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::config::{Fill, OUTPUT_HEIGHT, OUTPUT_WIDTH};
use crate::imaging::geometry::{PadPlan, needs_rotation};

/// Rotate a portrait frame to landscape; landscape and square pass through.
///
/// Returns the (possibly rotated) image and whether a rotation happened.
/// Running an already-normalized image through again is a no-op.
pub fn normalize_orientation(img: DynamicImage) -> (DynamicImage, bool) {
    if needs_rotation(img.width(), img.height()) {
        (img.rotate90(), true)
    } else {
        (img, false)
    }
}

/// Draw the source onto a freshly filled canvas according to the plan.
///
/// Source pixels are copied unscaled, so cropping the plan's source
/// region back out of the canvas reproduces the input exactly.
pub fn composite(img: &DynamicImage, plan: &PadPlan, fill: Fill) -> DynamicImage {
    let mut canvas = RgbaImage::from_pixel(plan.canvas_width, plan.canvas_height, fill.pixel());
    imageops::replace(
        &mut canvas,
        &img.to_rgba8(),
        plan.offset_x as i64,
        plan.offset_y as i64,
    );
    DynamicImage::ImageRgba8(canvas)
}

/// Resize to the fixed delivery dimensions.
///
/// `resize_exact` does not preserve aspect ratio: photos reach this step
/// either padded to 3:2 or close to it, and anything still off-ratio
/// (4x3 has no padding rule) is distorted to fit rather than cropped.
pub fn resize_to_output(img: &DynamicImage) -> DynamicImage {
    img.resize_exact(OUTPUT_WIDTH, OUTPUT_HEIGHT, FilterType::Lanczos3)
}
