//! Chart geometry and layout engine for astrological wheel diagrams.
//!
//! A computed [`Chart`](chart::Chart) is rotated so its ascendant sits at
//! 9 o'clock, bodies that would overlap are clustered and fanned out, and
//! aspects become straight chords. The result is plot-ready geometry that
//! [`rendering`] turns into a declarative shape list.

pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod rendering;
pub mod source;
pub mod tables;

pub use chart::{load_chart_from_file, load_chart_from_json, rotate_chart_to_reference, Chart};
pub use config::WheelConfig;
pub use error::{Result, WheelError};
pub use geometry::{
    chord_endpoints, midpoint, normalize, rotate_relative, to_plot_angle, to_plot_xy,
};
pub use layout::{cluster_by_proximity, index_within_cluster, AssembledWheel, WheelAssembler};
pub use rendering::{ChartSpec, ChartSpecGenerator};

/// Lay out `chart` and generate its chart spec
pub fn render_chart_spec(
    chart: &Chart,
    config: &WheelConfig,
    width: f32,
    height: f32,
) -> Result<ChartSpec> {
    let wheel = WheelAssembler::build(chart, config)?;
    let mut spec = ChartSpecGenerator::new().generate(&wheel, width, height);
    spec.metadata.house_system = chart
        .meta
        .as_ref()
        .map(|m| m.hsys.display_name().to_string());
    Ok(spec)
}
