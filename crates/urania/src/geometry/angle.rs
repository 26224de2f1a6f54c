//! Longitude arithmetic and the wheel's plotting convention.
//!
//! The wheel puts longitude 0 at the 9 o'clock position and lets longitude
//! grow counter-clockwise. Plot coordinates are centred on the origin with
//! the y axis pointing up; screen-space flipping belongs to the renderer.

use serde::{Deserialize, Serialize};

/// Full circle in degrees
pub const FULL_CIRCLE: f64 = 360.0;

/// Offset between zodiac longitude 0 and the math-angle zero (3 o'clock)
const WHEEL_ZERO_OFFSET_DEG: f64 = 180.0;

/// Point in the wheel's plot frame (origin at centre, y up)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Normalize a longitude into [0, 360)
pub fn normalize(lon: f64) -> f64 {
    ((lon % FULL_CIRCLE) + FULL_CIRCLE) % FULL_CIRCLE
}

/// Re-express `lon` so that `reference` becomes 0
pub fn rotate_relative(lon: f64, reference: f64) -> f64 {
    normalize(lon - reference)
}

/// Convert a wheel-relative longitude to a plot angle in radians.
///
/// The result is measured counter-clockwise from the positive x axis and lies
/// in [0, 2π). Longitude 0 maps to π (9 o'clock), longitude 90 to 3π/2
/// (6 o'clock), longitude 180 to 0 (3 o'clock).
pub fn to_plot_angle(lon: f64) -> f64 {
    normalize(lon + WHEEL_ZERO_OFFSET_DEG).to_radians()
}

/// Cartesian position of a wheel-relative longitude on a circle of `radius`
pub fn to_plot_xy(lon: f64, radius: f64) -> Point {
    let theta = to_plot_angle(lon);
    Point {
        x: radius * theta.cos(),
        y: radius * theta.sin(),
    }
}
