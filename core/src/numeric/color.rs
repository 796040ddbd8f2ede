use serde::{Deserialize, Serialize};

/// Marker fill color on the parking-cost ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// CSS form consumed by the map layer, e.g. `rgb(255,100,0)`.
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Ramp start, used for the cheapest lots and for a degenerate range.
const RAMP_LOW: RgbColor = RgbColor {
    r: 255,
    g: 255,
    b: 128,
};

/// Linear ramp from `rgb(255,255,128)` at `min` to `rgb(255,100,0)` at `max`.
///
/// A single-value dataset (`min == max`) returns the ramp-start color
/// instead of dividing by zero.
pub fn color_scale(value: f64, min: f64, max: f64) -> RgbColor {
    if max == min {
        return RAMP_LOW;
    }
    let ratio = (value - min) / (max - min);
    RgbColor {
        r: 255,
        g: (255.0 - 155.0 * ratio).round() as u8,
        b: (128.0 - 128.0 * ratio).round() as u8,
    }
}

/// Min/max normalization range over a cost-like field.
///
/// Returns `None` for an empty dataset; callers skip rendering entirely in
/// that case rather than inventing a range.
pub fn value_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for value in values {
        range = Some(match range {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    range
}
