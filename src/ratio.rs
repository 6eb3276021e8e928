//! Aspect ratio classification against the standard delivery ratios.
//!
//! All functions here are pure and testable without any I/O or images.

/// A named aspect ratio from the standard table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardRatio {
    /// Display name, also used as the output filename prefix (e.g. "16x9").
    pub name: &'static str,
    /// Ratio value as long edge / short edge, always >= 1.
    pub value: f64,
}

/// The standard ratios, in tie-break priority order.
///
/// When a photo's ratio is exactly halfway between two entries, the one
/// listed first wins. Keep this list ordered widest to squarest.
pub const STANDARD_RATIOS: &[StandardRatio] = &[
    StandardRatio { name: "16x9", value: 16.0 / 9.0 },
    StandardRatio { name: "3x2", value: 3.0 / 2.0 },
    StandardRatio { name: "4x3", value: 4.0 / 3.0 },
    StandardRatio { name: "5x4", value: 5.0 / 4.0 },
    StandardRatio { name: "3x3", value: 1.0 },
];

/// Orientation-independent aspect value: long edge over short edge.
///
/// Callers guarantee nonzero dimensions; the codec rejects zero-area
/// images before classification happens.
pub fn aspect_value(width: u32, height: u32) -> f64 {
    let long = width.max(height) as f64;
    let short = width.min(height) as f64;
    long / short
}

/// Classify dimensions to the nearest standard ratio.
///
/// Nearest means smallest absolute distance between the photo's aspect
/// value and the table entry's value. Portrait and landscape versions of
/// the same frame classify identically.
///
/// # Examples
/// ```
/// # use ratiopad::ratio::classify;
/// assert_eq!(classify(1920, 1080).name, "16x9");
/// assert_eq!(classify(1080, 1920).name, "16x9");
/// assert_eq!(classify(1000, 1000).name, "3x3");
/// ```
pub fn classify(width: u32, height: u32) -> &'static StandardRatio {
    let value = aspect_value(width, height);

    let mut best = &STANDARD_RATIOS[0];
    let mut best_distance = (value - best.value).abs();
    for candidate in &STANDARD_RATIOS[1..] {
        let distance = (value - candidate.value).abs();
        // Strict comparison: ties keep the earlier (higher priority) entry.
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Look up a standard ratio by name.
pub fn lookup(name: &str) -> Option<&'static StandardRatio> {
    STANDARD_RATIOS.iter().find(|r| r.name == name)
}
