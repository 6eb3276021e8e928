//! Image processing — pure Rust, no external tools.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode / encode** | `image` (JPEG via `new_with_quality`, PNG lossless) |
//! | **Orientation** | `DynamicImage::rotate90` |
//! | **Bar compositing** | `RgbaImage::from_pixel` + `imageops::replace` |
//! | **Delivery resize** | `resize_exact` with Lanczos3 |
//!
//! The module is split into:
//! - **Geometry**: Pure functions for canvas math (unit testable)
//! - **Transform**: Raster operations on decoded images
//! - **Codec**: Disk I/O and format handling

pub mod codec;
mod geometry;
pub mod transform;

pub use codec::{CodecError, is_photo_file, load_photo, read_dimensions, save_photo};
pub use geometry::{PadPlan, Placement, needs_rotation, plan_padding};
pub use transform::{composite, normalize_orientation, resize_to_output};
