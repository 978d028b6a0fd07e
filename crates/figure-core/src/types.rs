// File: crates/figure-core/src/types.rs
// Summary: Shared types and constants (dimensions, axis kinds, data ranges).

use serde::Serialize;

/// Default intrinsic plot width in pixels.
pub const WIDTH: u32 = 480;
/// Default intrinsic plot height in pixels.
pub const HEIGHT: u32 = 520;
/// Default padding applied when axis limits are computed from data.
pub const PADDING_FACTOR: f64 = 0.07;
/// Minimum border injected when no extra style parameters are given.
pub const MIN_BORDER: i64 = 4;

/// Resolved scale kind for an axis, decided by the first layer that
/// supplies data of that shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Numeric,
    Categorical,
    Datetime,
}

/// Where an axis is drawn, or `Off` to suppress it entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Above,
    Below,
    Left,
    Right,
    Off,
}

impl AxisPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisPosition::Above => "above",
            AxisPosition::Below => "below",
            AxisPosition::Left => "left",
            AxisPosition::Right => "right",
            AxisPosition::Off => "off",
        }
    }
}

/// Inclusive numeric extent accumulated from layer data.
/// Contract: min <= max.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(&self, other: &DataRange) -> DataRange {
        DataRange { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Pad both ends by `factor` of the span. A degenerate span pads by
    /// `factor` of the magnitude so single-point layers still get room.
    pub fn expand(&self, factor: f64) -> DataRange {
        let span = self.max - self.min;
        let pad = if span > 0.0 { span * factor } else { self.min.abs().max(1.0) * factor };
        DataRange { min: self.min - pad, max: self.max + pad }
    }
}
