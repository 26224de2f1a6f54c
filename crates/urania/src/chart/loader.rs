use crate::chart::types::{
    planet_order_key, Aspect, Body, Chart, Dms, Houses, MetaData, Motion, PlanetaryBody, Planets,
    ASCENDANT_LABEL, MIDHEAVEN_LABEL,
};
use crate::error::{Result, WheelError};
use crate::geometry::normalize;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct BodyRecord {
    #[serde(default)]
    sign: Option<String>,
    #[serde(default)]
    pos: Option<Dms>,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PlanetRecord {
    #[serde(default)]
    sign: Option<String>,
    #[serde(default)]
    pos: Option<Dms>,
    lon: f64,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    dist_au: f64,
    #[serde(default)]
    speed_lon_deg_per_day: f64,
    #[serde(default = "default_motion")]
    motion: Motion,
    #[serde(default)]
    house: u8,
}

fn default_motion() -> Motion {
    Motion::Direct
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PlanetsRecord {
    #[serde(default)]
    station_threshold_speed_lon_deg_per_day: f64,
    #[serde(default)]
    bodies: HashMap<String, PlanetRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HousesRecord {
    #[serde(default)]
    asc: Option<BodyRecord>,
    #[serde(default)]
    mc: Option<BodyRecord>,
    #[serde(default)]
    cusps: HashMap<String, BodyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartRecord {
    #[serde(default)]
    meta: Option<MetaData>,
    #[serde(default)]
    planets: PlanetsRecord,
    #[serde(default)]
    houses: HousesRecord,
    #[serde(default)]
    aspects: Vec<Aspect>,
}

/// Load a chart from the ephemeris JSON output
pub fn load_chart_from_json(json: &str) -> Result<Chart> {
    let record: ChartRecord =
        serde_json::from_str(json).map_err(|e| WheelError::InvalidJson(e.to_string()))?;
    chart_from_record(record)
}

/// Read a chart JSON file from disk
pub fn load_chart_from_file<P: AsRef<Path>>(path: P) -> Result<Chart> {
    let content = fs::read_to_string(path)?;
    load_chart_from_json(&content)
}

fn chart_from_record(record: ChartRecord) -> Result<Chart> {
    let mut bodies = Vec::with_capacity(record.planets.bodies.len());
    for (name, planet) in record.planets.bodies {
        let lon = checked_lon(&name, planet.lon)?;
        bodies.push(PlanetaryBody {
            body: Body {
                label: name,
                lon,
                sign: planet.sign,
                pos: planet.pos,
            },
            lat: planet.lat,
            dist_au: planet.dist_au,
            speed_lon: planet.speed_lon_deg_per_day,
            motion: planet.motion,
            house: planet.house,
        });
    }
    bodies.sort_by_cached_key(|p| planet_order_key(p.label()));

    let ascendant = record
        .houses
        .asc
        .map(|b| body_from_record(ASCENDANT_LABEL, b))
        .transpose()?;
    let midheaven = record
        .houses
        .mc
        .map(|b| body_from_record(MIDHEAVEN_LABEL, b))
        .transpose()?;

    let mut cusps = Vec::with_capacity(record.houses.cusps.len());
    for (key, cusp) in record.houses.cusps {
        let house_num = key
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .ok_or_else(|| {
                WheelError::InvalidChart(format!(
                    "house cusp key must be a number between 1 and 12, got: {}",
                    key
                ))
            })?;
        cusps.push((house_num, body_from_record(&house_num.to_string(), cusp)?));
    }
    cusps.sort_by_key(|(n, _)| *n);

    for aspect in &record.aspects {
        if !aspect.orb.is_finite() || !aspect.aspect.angle.is_finite() {
            return Err(WheelError::InvalidChart(format!(
                "aspect {} {} {} has a non-finite orb or angle",
                aspect.body1, aspect.aspect.name, aspect.body2
            )));
        }
    }

    log::debug!(
        "Loaded chart: {} planets, {} cusps, {} aspects, ascendant {}",
        bodies.len(),
        cusps.len(),
        record.aspects.len(),
        if ascendant.is_some() { "present" } else { "missing" }
    );

    Ok(Chart {
        meta: record.meta,
        planets: Planets {
            station_threshold_speed: record.planets.station_threshold_speed_lon_deg_per_day,
            bodies,
        },
        houses: Houses {
            ascendant,
            midheaven,
            cusps: cusps.into_iter().map(|(_, body)| body).collect(),
        },
        aspects: record.aspects,
    })
}

fn body_from_record(label: &str, record: BodyRecord) -> Result<Body> {
    Ok(Body {
        label: label.to_string(),
        lon: checked_lon(label, record.lon)?,
        sign: record.sign,
        pos: record.pos,
    })
}

fn checked_lon(label: &str, lon: f64) -> Result<f64> {
    if !lon.is_finite() {
        return Err(WheelError::InvalidChart(format!(
            "{} has a non-finite longitude",
            label
        )));
    }
    Ok(normalize(lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_chart_defaults() {
        let chart = load_chart_from_json("{}").unwrap();
        assert!(chart.ascendant().is_none());
        assert!(chart.planets.bodies.is_empty());
        assert!(chart.houses.cusps.is_empty());
    }

    #[test]
    fn test_cusps_sorted_numerically() {
        let json = r#"{
            "houses": {
                "asc": { "lon": 10.0 },
                "cusps": {
                    "10": { "lon": 280.0 },
                    "2": { "lon": 40.0 },
                    "1": { "lon": 10.0 }
                }
            }
        }"#;
        let chart = load_chart_from_json(json).unwrap();
        let labels: Vec<&str> = chart.houses.cusps.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_bad_cusp_key_rejected() {
        let json = r#"{ "houses": { "cusps": { "13": { "lon": 1.0 } } } }"#;
        assert!(matches!(
            load_chart_from_json(json),
            Err(WheelError::InvalidChart(_))
        ));
    }

    #[test]
    fn test_longitudes_normalized_on_load() {
        let json = r#"{ "houses": { "asc": { "lon": -30.0 }, "mc": { "lon": 725.0 } } }"#;
        let chart = load_chart_from_json(json).unwrap();
        assert_eq!(chart.ascendant().unwrap().lon, 330.0);
        assert_eq!(chart.midheaven().unwrap().lon, 5.0);
    }
}
