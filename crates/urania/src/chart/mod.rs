pub mod loader;
pub mod rotation;
pub mod types;

pub use loader::{load_chart_from_file, load_chart_from_json};
pub use rotation::{reference_longitude, rotate_chart_by, rotate_chart_to_reference};
pub use types::{
    Aspect, AspectDefinition, AspectPhase, Body, Chart, Dms, GeoCoordinates, HouseSystem, Houses,
    MetaData, Motion, PlanetaryBody, Planets, TzInfo, ASCENDANT_LABEL, MIDHEAVEN_LABEL,
    PLANET_ORDER,
};
