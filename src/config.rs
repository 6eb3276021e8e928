//! Built-in delivery configuration: padding rules, output size, encoding.
//!
//! The rule table is compiled in rather than loaded from disk. Rules are
//! keyed by classified ratio name and resolved against the standard ratio
//! table at startup, so a bad table entry fails fast instead of surfacing
//! mid-batch.

use std::collections::HashMap;

use image::Rgba;
use thiserror::Error;

use crate::imaging::Placement;
use crate::ratio::{self, StandardRatio};

/// Delivery width in pixels.
pub const OUTPUT_WIDTH: u32 = 1800;
/// Delivery height in pixels.
pub const OUTPUT_HEIGHT: u32 = 1200;
/// JPEG encode quality for delivery copies.
pub const JPEG_QUALITY: u8 = 100;

/// Bar color for a padding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Black,
    White,
}

impl Fill {
    /// The opaque canvas pixel for this fill.
    pub fn pixel(self) -> Rgba<u8> {
        match self {
            Fill::Black => Rgba([0, 0, 0, 255]),
            Fill::White => Rgba([255, 255, 255, 255]),
        }
    }
}

/// One row of the built-in rule table, ratios by name.
struct RuleSpec {
    classified: &'static str,
    target: &'static str,
    fill: Fill,
}

/// Which classified ratios get padded, and toward what.
///
/// Ratios without a row (3x2 itself, 4x3) skip padding and go straight
/// to the delivery resize.
const PAD_RULES: &[RuleSpec] = &[
    RuleSpec { classified: "16x9", target: "3x2", fill: Fill::Black },
    RuleSpec { classified: "5x4", target: "3x2", fill: Fill::Black },
    RuleSpec { classified: "3x3", target: "3x2", fill: Fill::White },
];

/// A resolved padding rule: target ratio looked up, placement applied.
#[derive(Debug, Clone, Copy)]
pub struct PadRule {
    pub target: &'static StandardRatio,
    pub fill: Fill,
    pub placement: Placement,
}

/// Resolved batch configuration handed to the pipeline.
#[derive(Debug, Clone)]
pub struct PadConfig {
    rules: HashMap<&'static str, PadRule>,
    /// Worker count override; `None` means one per logical CPU.
    pub threads: Option<usize>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("padding rule for {rule}: unknown target ratio {target}")]
    UnknownTarget {
        rule: &'static str,
        target: &'static str,
    },
    #[error("duplicate padding rule for ratio {0}")]
    DuplicateRule(&'static str),
}

impl PadConfig {
    /// Resolve the built-in rules with centered placement.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_placement(Placement::Centered)
    }

    /// Resolve the built-in rules with an explicit placement for all bars.
    pub fn with_placement(placement: Placement) -> Result<Self, ConfigError> {
        let rules = resolve_rules(PAD_RULES, placement)?;
        Ok(Self {
            rules,
            threads: None,
        })
    }

    /// The padding rule for a classified ratio, if one exists.
    pub fn rule_for(&self, ratio_name: &str) -> Option<&PadRule> {
        self.rules.get(ratio_name)
    }
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &PadConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.threads.map(|n| n.min(cores)).unwrap_or(cores)
}

fn resolve_rules(
    specs: &[RuleSpec],
    placement: Placement,
) -> Result<HashMap<&'static str, PadRule>, ConfigError> {
    let mut rules = HashMap::with_capacity(specs.len());
    for spec in specs {
        let target = ratio::lookup(spec.target).ok_or(ConfigError::UnknownTarget {
            rule: spec.classified,
            target: spec.target,
        })?;
        let rule = PadRule {
            target,
            fill: spec.fill,
            placement,
        };
        if rules.insert(spec.classified, rule).is_some() {
            return Err(ConfigError::DuplicateRule(spec.classified));
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // rule table resolution
    // =========================================================================

    #[test]
    fn default_rules_resolve() {
        let config = PadConfig::new().unwrap();

        let wide = config.rule_for("16x9").unwrap();
        assert_eq!(wide.target.name, "3x2");
        assert_eq!(wide.fill, Fill::Black);
        assert_eq!(wide.placement, Placement::Centered);

        let tall = config.rule_for("5x4").unwrap();
        assert_eq!(tall.fill, Fill::Black);

        let square = config.rule_for("3x3").unwrap();
        assert_eq!(square.target.name, "3x2");
        assert_eq!(square.fill, Fill::White);
    }

    #[test]
    fn unruled_ratios_pass_through() {
        let config = PadConfig::new().unwrap();
        assert!(config.rule_for("3x2").is_none());
        assert!(config.rule_for("4x3").is_none());
        assert!(config.rule_for("21x9").is_none());
    }

    #[test]
    fn placement_override_applies_to_all_rules() {
        let config = PadConfig::with_placement(Placement::EdgeAnchored).unwrap();
        for name in ["16x9", "5x4", "3x3"] {
            assert_eq!(
                config.rule_for(name).unwrap().placement,
                Placement::EdgeAnchored
            );
        }
    }

    #[test]
    fn unknown_target_is_rejected() {
        let specs = [RuleSpec {
            classified: "16x9",
            target: "99x1",
            fill: Fill::Black,
        }];
        let err = resolve_rules(&specs, Placement::Centered).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownTarget { target: "99x1", .. }
        ));
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let specs = [
            RuleSpec { classified: "3x3", target: "3x2", fill: Fill::White },
            RuleSpec { classified: "3x3", target: "3x2", fill: Fill::Black },
        ];
        let err = resolve_rules(&specs, Placement::Centered).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRule("3x3")));
    }

    // =========================================================================
    // thread resolution
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let config = PadConfig::new().unwrap();
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let mut config = PadConfig::new().unwrap();
        config.threads = Some(99999);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let mut config = PadConfig::new().unwrap();
        config.threads = Some(1);
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // constants and fills
    // =========================================================================

    #[test]
    fn delivery_size_is_three_by_two() {
        assert_eq!(OUTPUT_WIDTH * 2, OUTPUT_HEIGHT * 3);
    }

    #[test]
    fn fill_pixels_are_opaque() {
        assert_eq!(Fill::Black.pixel(), Rgba([0, 0, 0, 255]));
        assert_eq!(Fill::White.pixel(), Rgba([255, 255, 255, 255]));
    }
}
