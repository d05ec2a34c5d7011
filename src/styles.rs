use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stroke and geometry constants for one named scrollwork style.
///
/// `layout` only ever sees a `&StyleProfile`, so callers are free to define
/// presets of their own beyond the built-in table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub stroke_color: &'static str,
    pub stroke_width: f64,
    pub leaf_scale: f64,
    pub leaf_frequency: f64,
    /// Uniform draw range for spiral turns.
    pub spiral_turns: (f64, f64),
    /// Uniform draw range for the spiral's initial radius.
    pub initial_radius: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Acanthus,
    Victorian,
    Western,
    Minimal,
}

pub const ACANTHUS: StyleProfile = StyleProfile {
    stroke_color: "#000",
    stroke_width: 1.6,
    leaf_scale: 1.0,
    leaf_frequency: 0.35,
    spiral_turns: (0.8, 1.2),
    initial_radius: (4.0, 9.0),
};

pub const VICTORIAN: StyleProfile = StyleProfile {
    stroke_color: "#000",
    stroke_width: 1.2,
    leaf_scale: 0.8,
    leaf_frequency: 0.2,
    spiral_turns: (1.0, 1.6),
    initial_radius: (3.0, 7.0),
};

pub const WESTERN: StyleProfile = StyleProfile {
    stroke_color: "#000",
    stroke_width: 2.0,
    leaf_scale: 1.2,
    leaf_frequency: 0.28,
    spiral_turns: (0.7, 1.0),
    initial_radius: (5.0, 10.0),
};

pub const MINIMAL: StyleProfile = StyleProfile {
    stroke_color: "#000",
    stroke_width: 1.4,
    leaf_scale: 0.4,
    leaf_frequency: 0.08,
    spiral_turns: (0.6, 0.9),
    initial_radius: (6.0, 12.0),
};

impl StyleName {
    pub const fn profile(self) -> &'static StyleProfile {
        match self {
            StyleName::Acanthus => &ACANTHUS,
            StyleName::Victorian => &VICTORIAN,
            StyleName::Western => &WESTERN,
            StyleName::Minimal => &MINIMAL,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StyleName::Acanthus => "Acanthus",
            StyleName::Victorian => "Victorian",
            StyleName::Western => "Western",
            StyleName::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
