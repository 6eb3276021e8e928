//! Pure padding geometry: canvas sizing and source placement.
//!
//! All functions here are pure and testable without any I/O or images.

/// Where the source photo sits inside the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Source centered, bars split evenly (extra pixel trails on odd growth).
    Centered,
    /// Source anchored to the top-left, all padding on the trailing edges.
    EdgeAnchored,
}

/// A fully resolved padding plan for one photo.
///
/// Exactly one axis is kept at its source size; the other grows to reach
/// the target ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadPlan {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// True when the width axis was kept and the height grew.
    pub keep_width: bool,
    /// Horizontal position of the source's left edge on the canvas.
    pub offset_x: u32,
    /// Vertical position of the source's top edge on the canvas.
    pub offset_y: u32,
}

/// Whether a frame needs a 90-degree rotation to become landscape.
///
/// Squares count as landscape and are never rotated.
pub fn needs_rotation(width: u32, height: u32) -> bool {
    height > width
}

/// Plan the padded canvas for already-landscape dimensions.
///
/// The kept axis is chosen by comparing ratios: when the target is
/// narrower than the source (`target < width / height`) the width stays
/// and the height grows; otherwise the height stays and the width grows.
/// The grown axis is rounded up, so the canvas never falls short of the
/// target ratio's padding.
///
/// # Arguments
/// * `width`, `height` - Source dimensions, normalized so width >= height
/// * `target` - Target aspect ratio as long edge / short edge
/// * `placement` - Bar distribution strategy
///
/// # Examples
/// ```
/// # use ratiopad::imaging::{plan_padding, Placement};
/// // Square to 3:2 gains side bars, centered
/// let plan = plan_padding(1000, 1000, 1.5, Placement::Centered);
/// assert_eq!((plan.canvas_width, plan.canvas_height), (1500, 1000));
/// assert_eq!((plan.offset_x, plan.offset_y), (250, 0));
/// ```
pub fn plan_padding(width: u32, height: u32, target: f64, placement: Placement) -> PadPlan {
    let ratio = width as f64 / height as f64;
    let keep_width = target < ratio;

    let (canvas_width, canvas_height) = if keep_width {
        (width, (width as f64 / target).ceil() as u32)
    } else {
        ((height as f64 * target).ceil() as u32, height)
    };

    let (offset_x, offset_y) = match placement {
        Placement::EdgeAnchored => (0, 0),
        // Integer halving floors, so odd growth leaves the extra pixel on
        // the trailing edge.
        Placement::Centered => ((canvas_width - width) / 2, (canvas_height - height) / 2),
    };

    PadPlan {
        canvas_width,
        canvas_height,
        keep_width,
        offset_x,
        offset_y,
    }
}
