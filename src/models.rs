use serde::{Deserialize, Serialize};

use crate::curves::Curve;
use crate::error::ScrollworkError;
use crate::styles::StyleName;

/// Padded axis-aligned bounds of the outline; also the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// One generated ornament unit: a spiral plus its surrounding leaves.
/// Immutable once produced by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub spiral: Curve,
    pub leaves: Vec<Curve>,
}

/// Generation parameters, assembled from CLI flags or a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_style")]
    pub style: StyleName,
    #[serde(default = "default_intricacy")]
    pub intricacy: u32,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    #[serde(default)]
    pub invert: bool,
}

fn default_style() -> StyleName {
    StyleName::Acanthus
}

fn default_intricacy() -> u32 {
    60
}

fn default_seed() -> i32 {
    12345
}

fn default_thickness() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            intricacy: default_intricacy(),
            seed: default_seed(),
            thickness: default_thickness(),
            invert: false,
        }
    }
}

impl Config {
    /// Reject out-of-range parameters. The floor/clamp formulas documented
    /// on the layout engine are part of the contract, not error recovery,
    /// so anything outside these ranges is refused rather than clamped.
    pub fn validate(&self) -> Result<(), ScrollworkError> {
        if !(10..=120).contains(&self.intricacy) {
            return Err(ScrollworkError::InvalidConfiguration(format!(
                "intricacy must be in 10..=120, got {}",
                self.intricacy
            )));
        }
        if !self.thickness.is_finite() || !(0.5..=2.0).contains(&self.thickness) {
            return Err(ScrollworkError::InvalidConfiguration(format!(
                "thickness must be in 0.5..=2.0, got {}",
                self.thickness
            )));
        }
        Ok(())
    }
}
