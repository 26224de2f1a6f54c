use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use urania::geometry::{
    chord_endpoints, midpoint, normalize, rotate_relative, to_plot_angle, to_plot_xy,
};

#[test]
fn test_normalize_stays_in_range() {
    for lon in [-1080.5, -360.0, -0.25, 0.0, 12.5, 359.999, 360.0, 721.0] {
        let n = normalize(lon);
        assert!((0.0..360.0).contains(&n), "{} normalized to {}", lon, n);
    }
}

#[test]
fn test_rotate_relative_round_trip() {
    let reference = 128.5;
    for lon in [0.0, 90.0, 128.5, 200.25, 359.5] {
        let rel = rotate_relative(lon, reference);
        assert_abs_diff_eq!(normalize(rel + reference), lon, epsilon = 1e-9);
    }
}

#[test]
fn test_plot_angles_of_cardinal_longitudes() {
    assert_abs_diff_eq!(to_plot_angle(0.0), PI, epsilon = 1e-12);
    assert_abs_diff_eq!(to_plot_angle(90.0), PI + FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(to_plot_angle(180.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(to_plot_angle(270.0), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_plot_xy_lies_on_circle() {
    for lon in (0..360).step_by(15) {
        let p = to_plot_xy(lon as f64, 2.5);
        assert_abs_diff_eq!(p.x.hypot(p.y), 2.5, epsilon = 1e-12);
    }
}

#[test]
fn test_chord_midpoint_of_quarter_arc() {
    let (a, b) = chord_endpoints(0.0, 90.0, 1.0);
    let mid = midpoint(a, b);
    assert_abs_diff_eq!(mid.x, -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(mid.y, -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(a.distance_to(&b), 2f64.sqrt(), epsilon = 1e-12);
}
