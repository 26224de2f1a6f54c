use crate::geometry::angle::{to_plot_xy, Point};

/// Endpoints of the straight chord joining two longitudes on a circle.
///
/// Both ends go through [`to_plot_xy`], so chords line up with every other
/// element placed on the wheel.
pub fn chord_endpoints(lon1: f64, lon2: f64, radius: f64) -> (Point, Point) {
    (to_plot_xy(lon1, radius), to_plot_xy(lon2, radius))
}

/// Arithmetic mean of two points
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

/// Chord between two longitudes with its label anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub from: Point,
    pub to: Point,
    pub mid: Point,
}

impl Chord {
    pub fn between(lon1: f64, lon2: f64, radius: f64) -> Self {
        let (from, to) = chord_endpoints(lon1, lon2, radius);
        Self {
            from,
            to,
            mid: midpoint(from, to),
        }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}
