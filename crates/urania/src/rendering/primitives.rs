use serde::{Deserialize, Serialize};

/// Canvas position in pixels, origin top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with opacity `alpha` in [0, 1]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Dash pattern of an aspect line; separating aspects are dashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One drawable element of a chart, in canvas pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: ScreenPoint,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        stroke: Stroke,
    },
    /// Filled polygon, e.g. an angle marker's pointer
    Polygon {
        points: Vec<ScreenPoint>,
        fill: Color,
    },
    /// Centred label, optionally on a backdrop so lines behind it stay legible
    Text {
        position: ScreenPoint,
        content: String,
        size: f32,
        color: Color,
        background: Option<Color>,
    },
    PlanetGlyph {
        center: ScreenPoint,
        label: String,
        glyph: String,
        size: f32,
        color: Color,
        retrograde: bool,
    },
    AspectLine {
        from: ScreenPoint,
        to: ScreenPoint,
        /// Lowercase aspect name, e.g. "trine"
        aspect: String,
        color: Color,
        width: f32,
        style: LineStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_rounds_and_clamps() {
        assert_eq!(Color::BLACK.with_alpha(0.5).a, 128);
        assert_eq!(Color::BLACK.with_alpha(2.0).a, 255);
        assert_eq!(Color::BLACK.with_alpha(-1.0).a, 0);
    }

    #[test]
    fn test_shape_tagged_by_variant() {
        let shape = Shape::Polygon {
            points: vec![ScreenPoint { x: 1.0, y: 2.0 }],
            fill: Color::BLACK,
        };
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["points"][0]["y"], 2.0);
    }
}
