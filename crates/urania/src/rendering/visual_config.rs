use crate::rendering::primitives::Color;
use std::collections::HashMap;

/// Visual styling configuration for chart elements
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub ring_color: Color,
    pub cusp_color: Color,
    pub marker_color: Color,
    pub planet_color: Color,
    pub retrograde_color: Color,
    pub label_background: Color,
    pub aspect_colors: HashMap<String, Color>,
    pub default_aspect_color: Color,
    pub ring_stroke_width: f32,
    pub boundary_stroke_width: f32,
    pub cusp_stroke_width: f32,
    pub marker_stroke_width: f32,
    pub planet_stroke_width: f32,
    pub aspect_stroke_width: f32,
    pub sign_font_size: f32,
    pub planet_font_size: f32,
    pub marker_font_size: f32,
    pub cusp_font_size: f32,
    pub aspect_font_size: f32,
    /// Outer margin in pixels
    pub padding: f32,
}

impl VisualConfig {
    pub fn aspect_color(&self, name: &str) -> Color {
        self.aspect_colors
            .get(&name.to_lowercase())
            .copied()
            .unwrap_or(self.default_aspect_color)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        let mut aspect_colors = HashMap::new();
        aspect_colors.insert("conjunction".to_string(), Color::rgb(0xDC, 0x14, 0x3C));
        aspect_colors.insert("opposition".to_string(), Color::rgb(0x41, 0x69, 0xE1));
        aspect_colors.insert("trine".to_string(), Color::rgb(0x22, 0x8B, 0x22));
        aspect_colors.insert("square".to_string(), Color::rgb(0xFF, 0x00, 0x00));
        aspect_colors.insert("sextile".to_string(), Color::rgb(0xFF, 0xA5, 0x00));

        Self {
            background_color: Color::WHITE,
            ring_color: Color::BLACK,
            cusp_color: Color::BLACK,
            marker_color: Color::rgb(0xDC, 0x14, 0x3C),
            planet_color: Color::BLACK,
            retrograde_color: Color::rgb(0xFF, 0x00, 0x00),
            label_background: Color::WHITE.with_alpha(0.85),
            aspect_colors,
            default_aspect_color: Color::rgb(0x80, 0x80, 0x80),
            ring_stroke_width: 2.0,
            boundary_stroke_width: 1.2,
            cusp_stroke_width: 0.9,
            marker_stroke_width: 2.5,
            planet_stroke_width: 1.0,
            aspect_stroke_width: 1.0,
            sign_font_size: 22.0,
            planet_font_size: 16.0,
            marker_font_size: 10.0,
            cusp_font_size: 9.0,
            aspect_font_size: 10.0,
            padding: 20.0,
        }
    }
}
