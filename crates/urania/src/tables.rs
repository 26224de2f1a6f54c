//! Tabular summaries of a chart for text output.

use crate::chart::types::{Body, Chart, Dms};
use serde::Serialize;
use std::fmt;

/// Format a sign position as `DD°MM'SS.ss"`
pub fn format_dms(pos: &Dms) -> String {
    format!("{:02}°{:02}'{:05.2}\"", pos.deg, pos.min, pos.sec)
}

fn dms_or_blank(pos: &Option<Dms>) -> String {
    pos.as_ref().map(format_dms).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetRow {
    pub body: String,
    pub sign: String,
    pub dms: String,
    pub lon: f64,
    pub house: u8,
    pub motion: String,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRow {
    pub house: String,
    pub sign: String,
    pub dms: String,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRow {
    pub body1: String,
    pub aspect: String,
    pub body2: String,
    pub orb: f64,
    pub phase: String,
}

pub fn planets_table(chart: &Chart) -> Vec<PlanetRow> {
    chart
        .planets
        .bodies
        .iter()
        .map(|p| PlanetRow {
            body: p.label().to_string(),
            sign: p.body.sign.clone().unwrap_or_default(),
            dms: dms_or_blank(&p.body.pos),
            lon: p.lon(),
            house: p.house,
            motion: String::from(p.motion.clone()),
            speed: p.speed_lon,
        })
        .collect()
}

/// Angles first (AC, MC), then the cusps in house order
pub fn houses_table(chart: &Chart) -> Vec<HouseRow> {
    let row = |label: &str, body: &Body| HouseRow {
        house: label.to_string(),
        sign: body.sign.clone().unwrap_or_default(),
        dms: dms_or_blank(&body.pos),
        lon: body.lon,
    };

    let mut rows = Vec::with_capacity(chart.houses.cusps.len() + 2);
    if let Some(asc) = chart.ascendant() {
        rows.push(row("AC", asc));
    }
    if let Some(mc) = chart.midheaven() {
        rows.push(row("MC", mc));
    }
    rows.extend(chart.houses.cusps.iter().map(|c| row(&c.label, c)));
    rows
}

pub fn aspects_table(chart: &Chart) -> Vec<AspectRow> {
    chart
        .aspects
        .iter()
        .map(|a| AspectRow {
            body1: a.body1.clone(),
            aspect: format!("{} ({})", a.aspect.symbol, a.aspect.name),
            body2: a.body2.clone(),
            orb: a.orb,
            phase: String::from(a.phase.clone()),
        })
        .collect()
}

impl fmt::Display for PlanetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<12} {:<14} {:>10.6} {:>3} {:<8} {:>10.6}",
            self.body, self.sign, self.dms, self.lon, self.house, self.motion, self.speed
        )
    }
}

impl fmt::Display for HouseRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<12} {:<14} {:>10.6}",
            self.house, self.sign, self.dms, self.lon
        )
    }
}

impl fmt::Display for AspectRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<18} {:<12} {:>6.2} {}",
            self.body1, self.aspect, self.body2, self.orb, self.phase
        )
    }
}
