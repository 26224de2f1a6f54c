use approx::assert_abs_diff_eq;
use urania::rendering::primitives::{LineStyle, Shape};
use urania::rendering::{ChartSpec, ChartSpecGenerator, VisualConfig};
use urania::{load_chart_from_json, render_chart_spec, WheelAssembler, WheelConfig};

const GDYNIA: &str = include_str!("fixtures/gdynia.json");

fn fixture_spec() -> ChartSpec {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    render_chart_spec(&chart, &WheelConfig::default(), 800.0, 800.0).unwrap()
}

#[test]
fn test_fixture_shape_counts() {
    let spec = fixture_spec();

    let count = |pred: fn(&Shape) -> bool| spec.shapes.iter().filter(|s| pred(s)).count();
    assert_eq!(count(|s| matches!(s, Shape::Circle { .. })), 2);
    assert_eq!(count(|s| matches!(s, Shape::PlanetGlyph { .. })), 12);
    assert_eq!(count(|s| matches!(s, Shape::AspectLine { .. })), 5);
    assert_eq!(count(|s| matches!(s, Shape::Polygon { .. })), 2);

    assert_eq!(spec.metadata.planet_count, 12);
    assert_eq!(spec.metadata.aspect_count, 5);
    assert_eq!(spec.metadata.house_system.as_deref(), Some("Regiomontanus"));
    assert_abs_diff_eq!(spec.metadata.reference_lon, 3.902833, epsilon = 1e-12);
}

#[test]
fn test_fanned_wheel_fits_canvas() {
    let spec = fixture_spec();
    // 380 px of radius over an extent of 1.30
    assert_abs_diff_eq!(spec.scale, 380.0 / 1.30, epsilon = 1e-3);

    for shape in &spec.shapes {
        if let Shape::PlanetGlyph { center, .. } = shape {
            assert!(center.x >= 0.0 && center.x <= spec.width);
            assert!(center.y >= 0.0 && center.y <= spec.height);
        }
    }
}

#[test]
fn test_ascendant_label_left_of_centre() {
    let spec = fixture_spec();
    let label = spec
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Text {
                position, content, ..
            } if content.starts_with("ASC") => Some(*position),
            _ => None,
        })
        .unwrap();

    assert!(label.x < spec.center.x);
    assert_abs_diff_eq!(label.y, spec.center.y, epsilon = 1e-3);
}

#[test]
fn test_screen_y_is_flipped() {
    // longitude 90 sits at 6 o'clock, below the centre on screen
    let chart = load_chart_from_json(GDYNIA).unwrap();
    let wheel = WheelAssembler::build(&chart, &WheelConfig::default()).unwrap();
    let spec = ChartSpecGenerator::new().generate(&wheel, 600.0, 600.0);

    let fourth = wheel.cusps.iter().find(|c| c.label == "4").unwrap();
    assert!(fourth.lon > 80.0 && fourth.lon < 100.0);
    let end = spec
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Line { from, to, .. } if *from == spec.center => Some(*to),
            _ => None,
        })
        .nth(3)
        .unwrap();
    assert!(end.y > spec.center.y);
}

#[test]
fn test_retrograde_planets_use_retrograde_color() {
    let visual = VisualConfig::default();
    let spec = fixture_spec();

    let color_of = |id: &str| {
        spec.shapes.iter().find_map(|s| match s {
            Shape::PlanetGlyph {
                label, color, ..
            } if label == id => Some(*color),
            _ => None,
        })
    };
    assert_eq!(color_of("Jupiter"), Some(visual.retrograde_color));
    assert_eq!(color_of("Sun"), Some(visual.planet_color));
}

#[test]
fn test_spec_json_is_tagged() {
    let json = fixture_spec().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let shapes = value["shapes"].as_array().unwrap();
    assert!(shapes.iter().any(|s| s["type"] == "PlanetGlyph"));
    assert!(shapes.iter().any(|s| s["type"] == "AspectLine"));
}

#[test]
fn test_separating_aspects_are_dashed() {
    let spec = fixture_spec();
    let styles: Vec<(String, LineStyle)> = spec
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::AspectLine { aspect, style, .. } => Some((aspect.clone(), *style)),
            _ => None,
        })
        .collect();

    let dashed = styles.iter().filter(|(_, s)| *s == LineStyle::Dashed).count();
    assert_eq!(dashed, 3);
    assert!(styles.contains(&("opposition".to_string(), LineStyle::Dashed)));
    assert!(styles.contains(&("conjunction".to_string(), LineStyle::Solid)));
}

#[test]
fn test_spec_shapes_are_pre_rotated() {
    let json = fixture_spec().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // the only rotation on record is the informational reference longitude
    assert!(value.get("rotation_offset").is_none());
    assert_abs_diff_eq!(
        value["metadata"]["reference_lon"].as_f64().unwrap(),
        3.902833,
        epsilon = 1e-12
    );
}
