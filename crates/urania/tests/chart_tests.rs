use approx::assert_abs_diff_eq;
use urania::chart::{Body, Chart, HouseSystem, Motion};
use urania::error::WheelError;
use urania::{load_chart_from_file, load_chart_from_json, normalize, rotate_chart_to_reference};

const GDYNIA: &str = include_str!("fixtures/gdynia.json");

#[test]
fn test_load_fixture_chart() {
    let chart = load_chart_from_json(GDYNIA).unwrap();

    let meta = chart.meta.as_ref().unwrap();
    assert_eq!(meta.hsys, HouseSystem::Regiomontanus);
    assert_abs_diff_eq!(meta.geo.lat, 54.5189, epsilon = 1e-9);

    assert_eq!(chart.planets.bodies.len(), 14);
    assert_eq!(chart.houses.cusps.len(), 12);
    assert_eq!(chart.aspects.len(), 7);
    assert_abs_diff_eq!(chart.ascendant().unwrap().lon, 3.902833, epsilon = 1e-9);
    assert_abs_diff_eq!(chart.midheaven().unwrap().lon, 279.783333, epsilon = 1e-9);
}

#[test]
fn test_planets_follow_conventional_order() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    let labels: Vec<&str> = chart.planets.bodies.iter().map(|p| p.label()).collect();
    assert_eq!(&labels[..4], &["Sun", "Moon", "Mercury", "Venus"]);
    assert_eq!(labels.last(), Some(&"Mean S.Node"));
}

#[test]
fn test_cusps_are_in_house_order() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    let labels: Vec<&str> = chart.houses.cusps.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
    );
}

#[test]
fn test_motion_parsed() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    assert_eq!(chart.planet("Jupiter").unwrap().motion, Motion::Retro);
    assert_eq!(chart.planet("Neptune").unwrap().motion, Motion::Station);
    assert!(chart.planet("Jupiter").unwrap().is_retrograde());
    assert!(!chart.planet("Sun").unwrap().is_retrograde());
}

#[test]
fn test_resolve_angles_and_case() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    assert_eq!(chart.resolve("ASC").map(|b| b.label.as_str()), Some("ASC"));
    assert_eq!(chart.resolve("Ascendant").map(|b| b.label.as_str()), Some("ASC"));
    assert_eq!(chart.resolve("mc").map(|b| b.label.as_str()), Some("MC"));
    assert_eq!(chart.resolve("sun").map(|b| b.label.as_str()), Some("Sun"));
    assert!(chart.resolve("Chiron").is_none());
}

#[test]
fn test_rotated_fixture_puts_ascendant_at_zero() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    let rotated = rotate_chart_to_reference(&chart).unwrap();

    assert_eq!(rotated.ascendant().unwrap().lon, 0.0);
    assert_abs_diff_eq!(rotated.houses.cusps[0].lon, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rotated.midheaven().unwrap().lon, 275.8805, epsilon = 1e-6);
    assert_abs_diff_eq!(
        rotated.planet("Sun").unwrap().lon(),
        276.720139 - 3.902833,
        epsilon = 1e-9
    );

    // sign and position stay absolute
    let sun = &rotated.planet("Sun").unwrap().body;
    assert_eq!(sun.sign.as_deref(), Some("Capricorn"));
    assert_eq!(sun.pos.as_ref().map(|p| p.deg), Some(6));
}

fn all_bodies(chart: &Chart) -> Vec<&Body> {
    chart
        .ascendant()
        .into_iter()
        .chain(chart.midheaven())
        .chain(&chart.houses.cusps)
        .chain(chart.planets.bodies.iter().map(|p| &p.body))
        .collect()
}

/// Distance between two angles on the circle, in [0, 180]
fn circular_gap(a: f64, b: f64) -> f64 {
    let d = normalize(a - b);
    d.min(360.0 - d)
}

#[test]
fn test_rotation_preserves_pairwise_separation() {
    let chart = load_chart_from_json(GDYNIA).unwrap();
    let rotated = rotate_chart_to_reference(&chart).unwrap();

    let before = all_bodies(&chart);
    let after = all_bodies(&rotated);
    assert_eq!(before.len(), 28);
    assert_eq!(before.len(), after.len());

    let mut straddling = 0;
    for i in 0..before.len() {
        for j in 0..before.len() {
            let (a, b) = (before[i], before[j]);
            let (ra, rb) = (after[i], after[j]);
            assert_eq!(a.label, ra.label);
            assert!(
                circular_gap(normalize(a.lon - b.lon), normalize(ra.lon - rb.lon)) < 1e-9,
                "{} - {} changed under rotation",
                a.label,
                b.label
            );
            // the short arc between them crosses 0°
            if (ra.lon - rb.lon).abs() > 180.0 {
                straddling += 1;
            }
        }
    }
    // Saturn at 351.8° and Uranus at 54.3° among others
    assert!(straddling > 0);
}

#[test]
fn test_chart_without_houses_cannot_rotate() {
    let json = r#"{ "planets": { "bodies": { "Sun": { "lon": 120.0 } } } }"#;
    let chart = load_chart_from_json(json).unwrap();
    assert!(matches!(
        rotate_chart_to_reference(&chart),
        Err(WheelError::MissingReferenceBody)
    ));
}

#[test]
fn test_invalid_json_reported() {
    let result = load_chart_from_json("{ not json");
    assert!(matches!(result, Err(WheelError::InvalidJson(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.json");
    std::fs::write(&path, GDYNIA).unwrap();

    let chart = load_chart_from_file(&path).unwrap();
    assert_eq!(chart.planets.bodies.len(), 14);

    let missing = load_chart_from_file(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(WheelError::Io(_))));
}
