use crate::chart::AspectPhase;
use crate::geometry::Point;
use crate::layout::{AssembledWheel, Spoke};
use crate::rendering::primitives::{LineStyle, ScreenPoint, Shape, Stroke};
use crate::rendering::spec::{ChartMetadata, ChartSpec};
use crate::rendering::visual_config::VisualConfig;

/// Maps unit-radius plot coordinates (y up) onto the canvas (y down)
#[derive(Debug, Clone, Copy)]
struct ScreenFrame {
    center: ScreenPoint,
    scale: f32,
}

impl ScreenFrame {
    fn project(&self, p: Point) -> ScreenPoint {
        ScreenPoint {
            x: self.center.x + p.x as f32 * self.scale,
            y: self.center.y - p.y as f32 * self.scale,
        }
    }
}

/// ChartSpec generator - converts assembled wheel to ChartSpec
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Generate ChartSpec from assembled wheel
    pub fn generate(&self, wheel: &AssembledWheel, width: f32, height: f32) -> ChartSpec {
        let center = ScreenPoint {
            x: width / 2.0,
            y: height / 2.0,
        };
        let available = (width.min(height) / 2.0 - self.visual_config.padding).max(1.0);
        let extent = wheel.extent.max(wheel.radii.outer).max(f64::EPSILON) as f32;
        let frame = ScreenFrame {
            center,
            scale: available / extent,
        };

        let mut shapes = Vec::new();
        self.ring_shapes(wheel, frame, &mut shapes);
        self.cusp_shapes(wheel, frame, &mut shapes);
        self.aspect_shapes(wheel, frame, &mut shapes);
        self.marker_shapes(wheel, frame, &mut shapes);
        self.planet_shapes(wheel, frame, &mut shapes);

        ChartSpec {
            width,
            height,
            center,
            scale: frame.scale,
            background_color: self.visual_config.background_color,
            shapes,
            metadata: ChartMetadata {
                title: None,
                reference_lon: wheel.reference_lon,
                house_system: None,
                planet_count: wheel.planets.len(),
                aspect_count: wheel.aspects.len(),
            },
        }
    }

    fn ring_shapes(&self, wheel: &AssembledWheel, frame: ScreenFrame, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for (radius, width) in [
            (wheel.radii.outer, vc.ring_stroke_width),
            (wheel.radii.inner, vc.boundary_stroke_width),
        ] {
            shapes.push(Shape::Circle {
                center: frame.center,
                radius: radius as f32 * frame.scale,
                fill: None,
                stroke: Some(Stroke::solid(vc.ring_color, width)),
            });
        }

        for sign in &wheel.signs {
            let stroke = Stroke::solid(vc.ring_color, vc.boundary_stroke_width);
            shapes.push(self.line(frame, &sign.boundary, stroke));
            shapes.push(Shape::Text {
                position: frame.project(sign.glyph_pos),
                content: sign.glyph.to_string(),
                size: vc.sign_font_size,
                color: vc.ring_color,
                background: None,
            });
        }
    }

    fn cusp_shapes(&self, wheel: &AssembledWheel, frame: ScreenFrame, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for cusp in &wheel.cusps {
            let stroke = Stroke::solid(vc.cusp_color, vc.cusp_stroke_width);
            shapes.push(self.line(frame, &cusp.spoke, stroke));
            if let Some(pos) = cusp.label_pos {
                shapes.push(Shape::Text {
                    position: frame.project(pos),
                    content: cusp.label.clone(),
                    size: vc.cusp_font_size,
                    color: vc.cusp_color,
                    background: Some(vc.label_background),
                });
            }
        }
    }

    fn aspect_shapes(&self, wheel: &AssembledWheel, frame: ScreenFrame, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for aspect in &wheel.aspects {
            let color = vc.aspect_color(&aspect.name);
            let style = match aspect.phase {
                AspectPhase::Separ => LineStyle::Dashed,
                _ => LineStyle::Solid,
            };
            shapes.push(Shape::AspectLine {
                from: frame.project(aspect.chord.from),
                to: frame.project(aspect.chord.to),
                aspect: aspect.name.to_lowercase(),
                color,
                width: vc.aspect_stroke_width,
                style,
            });
            if !aspect.symbol.is_empty() {
                shapes.push(Shape::Text {
                    position: frame.project(aspect.chord.mid),
                    content: aspect.symbol.clone(),
                    size: vc.aspect_font_size,
                    color,
                    background: Some(vc.label_background),
                });
            }
        }
    }

    fn marker_shapes(&self, wheel: &AssembledWheel, frame: ScreenFrame, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for marker in &wheel.markers {
            let stroke = Stroke::solid(vc.marker_color, vc.marker_stroke_width);
            shapes.push(self.line(frame, &marker.spoke, stroke));
            shapes.push(Shape::Polygon {
                points: marker.pointer.iter().map(|p| frame.project(*p)).collect(),
                fill: vc.marker_color.with_alpha(0.9),
            });
            shapes.push(Shape::Text {
                position: frame.project(marker.label_pos),
                content: marker.text.clone(),
                size: vc.marker_font_size,
                color: vc.marker_color,
                background: Some(vc.label_background),
            });
        }
    }

    fn planet_shapes(&self, wheel: &AssembledWheel, frame: ScreenFrame, shapes: &mut Vec<Shape>) {
        let vc = &self.visual_config;
        for planet in &wheel.planets {
            let color = if planet.retrograde {
                vc.retrograde_color
            } else {
                vc.planet_color
            };
            let stroke = Stroke::solid(color, vc.planet_stroke_width);
            shapes.push(self.line(frame, &planet.leader, stroke));
            shapes.push(Shape::PlanetGlyph {
                center: frame.project(planet.glyph_pos),
                label: planet.label.clone(),
                glyph: planet.glyph.clone(),
                size: vc.planet_font_size,
                color,
                retrograde: planet.retrograde,
            });
        }
    }

    fn line(&self, frame: ScreenFrame, spoke: &Spoke, stroke: Stroke) -> Shape {
        Shape::Line {
            from: frame.project(spoke.from),
            to: frame.project(spoke.to),
            stroke,
        }
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
