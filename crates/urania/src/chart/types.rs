use serde::{Deserialize, Serialize};

/// Label given to the ascendant when it is treated as a body
pub const ASCENDANT_LABEL: &str = "ASC";
/// Label given to the midheaven when it is treated as a body
pub const MIDHEAVEN_LABEL: &str = "MC";

/// Conventional listing order for planetary bodies
pub const PLANET_ORDER: &[&str] = &[
    "Sun",
    "Moon",
    "Mercury",
    "Venus",
    "Mars",
    "Jupiter",
    "Saturn",
    "Uranus",
    "Neptune",
    "Pluto",
    "True N.Node",
    "True S.Node",
    "Mean N.Node",
    "Mean S.Node",
];

/// Geographic coordinates of the chart location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// House system code as passed to the ephemeris
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    #[serde(rename = "P")]
    Placidus,
    #[serde(rename = "R")]
    Regiomontanus,
    #[serde(rename = "E")]
    EqualHouses,
    #[serde(rename = "W")]
    WholeSign,
    #[serde(rename = "T")]
    Topocentric,
    #[serde(rename = "M")]
    Morinus,
}

impl HouseSystem {
    /// Single-letter code understood by the ephemeris binary
    pub fn code(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "P",
            HouseSystem::Regiomontanus => "R",
            HouseSystem::EqualHouses => "E",
            HouseSystem::WholeSign => "W",
            HouseSystem::Topocentric => "T",
            HouseSystem::Morinus => "M",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "P" => Some(HouseSystem::Placidus),
            "R" => Some(HouseSystem::Regiomontanus),
            "E" => Some(HouseSystem::EqualHouses),
            "W" => Some(HouseSystem::WholeSign),
            "T" => Some(HouseSystem::Topocentric),
            "M" => Some(HouseSystem::Morinus),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Regiomontanus => "Regiomontanus",
            HouseSystem::EqualHouses => "Equal Houses",
            HouseSystem::WholeSign => "Whole Sign",
            HouseSystem::Topocentric => "Topocentric",
            HouseSystem::Morinus => "Morinus",
        }
    }
}

/// Timezone resolution used for the chart time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TzInfo {
    /// "tzid", "offset" or "local"
    pub mode: String,
    #[serde(default)]
    pub tzid: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Chart request metadata echoed by the ephemeris
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub local: String,
    pub ut: String,
    pub jd_ut: f64,
    pub geo: GeoCoordinates,
    pub hsys: HouseSystem,
    pub tz: TzInfo,
}

/// Degrees, minutes and seconds within a sign
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dms {
    pub deg: i32,
    pub min: i32,
    pub sec: f64,
}

/// A labelled point on the zodiac circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub label: String,
    /// Longitude in degrees, [0, 360)
    pub lon: f64,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub pos: Option<Dms>,
}

impl Body {
    pub fn new(label: impl Into<String>, lon: f64) -> Self {
        Self {
            label: label.into(),
            lon,
            sign: None,
            pos: None,
        }
    }

    /// Copy of this body placed at another longitude
    pub fn with_lon(&self, lon: f64) -> Self {
        Self {
            lon,
            ..self.clone()
        }
    }
}

/// Apparent motion of a planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Motion {
    Direct,
    Retro,
    Station,
    Other(String),
}

impl From<String> for Motion {
    fn from(s: String) -> Self {
        match s.as_str() {
            "DIRECT" => Motion::Direct,
            "RETRO" => Motion::Retro,
            "STATION" => Motion::Station,
            _ => Motion::Other(s),
        }
    }
}

impl From<Motion> for String {
    fn from(m: Motion) -> Self {
        match m {
            Motion::Direct => "DIRECT".to_string(),
            Motion::Retro => "RETRO".to_string(),
            Motion::Station => "STATION".to_string(),
            Motion::Other(s) => s,
        }
    }
}

/// Planet (or node) position with motion data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryBody {
    pub body: Body,
    pub lat: f64,
    pub dist_au: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
    pub motion: Motion,
    pub house: u8,
}

impl PlanetaryBody {
    pub fn label(&self) -> &str {
        &self.body.label
    }

    pub fn lon(&self) -> f64 {
        self.body.lon
    }

    pub fn is_retrograde(&self) -> bool {
        self.motion == Motion::Retro
    }
}

/// Planetary bodies in conventional order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Planets {
    pub station_threshold_speed: f64,
    pub bodies: Vec<PlanetaryBody>,
}

/// Angles and house cusps
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Houses {
    pub ascendant: Option<Body>,
    pub midheaven: Option<Body>,
    /// Cusps labelled "1".."12", in house order
    pub cusps: Vec<Body>,
}

/// Aspect kind as reported by the ephemeris
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub name: String,
    pub symbol: String,
    pub angle: f64,
}

/// Applying or separating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectPhase {
    Apply,
    Separ,
    Other(String),
}

impl From<String> for AspectPhase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "APPLY" => AspectPhase::Apply,
            "SEPAR" => AspectPhase::Separ,
            _ => AspectPhase::Other(s),
        }
    }
}

impl From<AspectPhase> for String {
    fn from(p: AspectPhase) -> Self {
        match p {
            AspectPhase::Apply => "APPLY".to_string(),
            AspectPhase::Separ => "SEPAR".to_string(),
            AspectPhase::Other(s) => s,
        }
    }
}

/// A named relation between two bodies, referenced by label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body1: String,
    pub body2: String,
    pub aspect: AspectDefinition,
    pub orb: f64,
    pub phase: AspectPhase,
}

/// Fully computed chart snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chart {
    pub meta: Option<MetaData>,
    pub planets: Planets,
    pub houses: Houses,
    pub aspects: Vec<Aspect>,
}

impl Chart {
    pub fn ascendant(&self) -> Option<&Body> {
        self.houses.ascendant.as_ref()
    }

    pub fn midheaven(&self) -> Option<&Body> {
        self.houses.midheaven.as_ref()
    }

    pub fn planet(&self, label: &str) -> Option<&PlanetaryBody> {
        self.planets.bodies.iter().find(|p| p.label() == label)
    }

    /// Resolve a label to a planet or angle.
    ///
    /// Planets match exactly first, then case-insensitively. The angles answer
    /// to their common abbreviations.
    pub fn resolve(&self, label: &str) -> Option<&Body> {
        if let Some(planet) = self.planet(label) {
            return Some(&planet.body);
        }
        match label.to_ascii_lowercase().as_str() {
            "asc" | "ac" | "ascendant" => return self.ascendant(),
            "mc" | "midheaven" => return self.midheaven(),
            _ => {}
        }
        self.planets
            .bodies
            .iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
            .map(|p| &p.body)
    }
}

/// Sort key putting conventional planets first, in order
pub fn planet_order_key(label: &str) -> (usize, String) {
    let rank = PLANET_ORDER
        .iter()
        .position(|p| *p == label)
        .unwrap_or(PLANET_ORDER.len());
    (rank, label.to_string())
}
