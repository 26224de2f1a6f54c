pub mod generator;
pub mod glyphs;
pub mod primitives;
pub mod spec;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use spec::ChartSpec;
pub use visual_config::VisualConfig;
