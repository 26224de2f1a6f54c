pub mod angle;
pub mod chord;

pub use angle::{normalize, rotate_relative, to_plot_angle, to_plot_xy, Point};
pub use chord::{chord_endpoints, midpoint, Chord};
