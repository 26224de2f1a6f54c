use crate::chart::types::{Body, Chart, Houses, PlanetaryBody, Planets};
use crate::error::{Result, WheelError};
use crate::geometry::rotate_relative;

/// Return a copy of `chart` with every longitude measured from the ascendant.
///
/// The input is left untouched. Fails with
/// [`WheelError::MissingReferenceBody`] when the chart has no ascendant.
pub fn rotate_chart_to_reference(chart: &Chart) -> Result<Chart> {
    Ok(rotate_chart_by(chart, reference_longitude(chart)?))
}

/// Absolute longitude of the ascendant, which the wheel is rotated against
pub fn reference_longitude(chart: &Chart) -> Result<f64> {
    chart
        .ascendant()
        .map(|asc| asc.lon)
        .ok_or(WheelError::MissingReferenceBody)
}

/// Rotate every body of `chart` so that `reference` becomes longitude 0
pub fn rotate_chart_by(chart: &Chart, reference: f64) -> Chart {
    let rotate = |body: &Body| body.with_lon(rotate_relative(body.lon, reference));

    Chart {
        meta: chart.meta.clone(),
        planets: Planets {
            station_threshold_speed: chart.planets.station_threshold_speed,
            bodies: chart
                .planets
                .bodies
                .iter()
                .map(|p| PlanetaryBody {
                    body: rotate(&p.body),
                    ..p.clone()
                })
                .collect(),
        },
        houses: Houses {
            ascendant: chart.houses.ascendant.as_ref().map(rotate),
            midheaven: chart.houses.midheaven.as_ref().map(rotate),
            cusps: chart.houses.cusps.iter().map(rotate).collect(),
        },
        aspects: chart.aspects.clone(),
    }
}
