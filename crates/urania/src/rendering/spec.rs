use crate::rendering::primitives::{Color, ScreenPoint, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: Option<String>,
    /// Absolute longitude placed at 9 o'clock
    pub reference_lon: f64,
    pub house_system: Option<String>,
    pub planet_count: usize,
    pub aspect_count: usize,
}

/// Chart specification - declarative description of chart to render.
///
/// Shapes are already rotated so the ascendant sits at 9 o'clock; the
/// reference longitude in [`ChartMetadata`] is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: ScreenPoint,
    /// Pixels per unit of wheel radius
    pub scale: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
