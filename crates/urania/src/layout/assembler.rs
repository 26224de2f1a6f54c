use crate::chart::rotation::{reference_longitude, rotate_chart_by};
use crate::chart::types::{AspectPhase, Body, Chart, ASCENDANT_LABEL, MIDHEAVEN_LABEL};
use crate::config::{RingRadii, WheelConfig};
use crate::error::{Result, WheelError};
use crate::geometry::{rotate_relative, to_plot_xy, Chord, Point};
use crate::layout::cluster::{cluster_by_proximity, ClusterIndex};
use crate::rendering::glyphs::{aspect_glyph, planet_glyph, sign_glyph, sign_name, SIGNS};

/// Straight radial segment at one longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

impl Spoke {
    fn radial(lon: f64, r_from: f64, r_to: f64) -> Self {
        Self {
            from: to_plot_xy(lon, r_from),
            to: to_plot_xy(lon, r_to),
        }
    }
}

/// One 30° sector of the sign ring
#[derive(Debug, Clone, PartialEq)]
pub struct SignSector {
    pub index: u8,
    pub name: &'static str,
    pub glyph: &'static str,
    /// Wheel-relative longitude of the sector's first degree
    pub start_lon: f64,
    pub boundary: Spoke,
    pub glyph_pos: Point,
}

/// ASC or MC marker
#[derive(Debug, Clone, PartialEq)]
pub struct AngleMarker {
    pub label: String,
    pub text: String,
    pub lon: f64,
    pub spoke: Spoke,
    /// Tip, then the two base corners
    pub pointer: [Point; 3],
    pub label_pos: Point,
}

/// House cusp line from the centre to the inner ring
#[derive(Debug, Clone, PartialEq)]
pub struct CuspSpoke {
    pub label: String,
    pub lon: f64,
    pub spoke: Spoke,
    pub label_pos: Option<Point>,
}

/// Planet glyph with its leader line, fanned out of its cluster
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPlacement {
    pub label: String,
    pub glyph: String,
    pub lon: f64,
    pub cluster: usize,
    pub cluster_index: usize,
    pub cluster_len: usize,
    pub leader: Spoke,
    pub glyph_pos: Point,
    pub retrograde: bool,
}

/// Aspect line between two placed bodies
#[derive(Debug, Clone, PartialEq)]
pub struct AspectChord {
    pub body1: String,
    pub body2: String,
    pub name: String,
    pub symbol: String,
    pub phase: AspectPhase,
    pub lon1: f64,
    pub lon2: f64,
    pub chord: Chord,
}

/// Every position needed to draw one chart, in unit-radius plot space
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledWheel {
    /// Absolute ascendant longitude the wheel was rotated by
    pub reference_lon: f64,
    pub signs: Vec<SignSector>,
    pub markers: Vec<AngleMarker>,
    pub cusps: Vec<CuspSpoke>,
    pub planets: Vec<PlanetPlacement>,
    pub aspects: Vec<AspectChord>,
    pub skipped_aspects: usize,
    /// Largest radius reached by any element
    pub extent: f64,
    pub radii: RingRadii,
}

impl AssembledWheel {
    pub fn planet(&self, label: &str) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| p.label == label)
    }
}

/// Wheel assembler
pub struct WheelAssembler;

impl WheelAssembler {
    /// Rotate `chart` to its ascendant and lay out every element
    pub fn build(chart: &Chart, config: &WheelConfig) -> Result<AssembledWheel> {
        config.validate()?;

        let reference_lon = reference_longitude(chart)?;
        let rotated = rotate_chart_by(chart, reference_lon);

        let signs = Self::build_signs(reference_lon, config);
        let markers = Self::build_markers(&rotated, config);
        let cusps = Self::build_cusps(&rotated, config);
        let planets = Self::build_planets(&rotated, config)?;
        let (aspects, skipped_aspects) = if config.show_aspects {
            Self::build_aspects(&rotated, config)
        } else {
            (Vec::new(), 0)
        };

        let max_cluster_len = planets.iter().map(|p| p.cluster_len).max().unwrap_or(1);

        log::debug!(
            "Assembled wheel: reference {:.4}°, {} planets, {} cusps, {} aspects ({} skipped)",
            reference_lon,
            planets.len(),
            cusps.len(),
            aspects.len(),
            skipped_aspects
        );

        Ok(AssembledWheel {
            reference_lon,
            signs,
            markers,
            cusps,
            planets,
            aspects,
            skipped_aspects,
            extent: config.extent(max_cluster_len),
            radii: config.radii,
        })
    }

    fn build_signs(reference_lon: f64, config: &WheelConfig) -> Vec<SignSector> {
        let r = &config.radii;
        (0..SIGNS.len())
            .map(|i| {
                let start_lon = rotate_relative(i as f64 * 30.0, reference_lon);
                let mid_lon = rotate_relative(i as f64 * 30.0 + 15.0, reference_lon);
                SignSector {
                    index: i as u8,
                    name: sign_name(i),
                    glyph: sign_glyph(i),
                    start_lon,
                    boundary: Spoke::radial(start_lon, r.inner, r.outer),
                    glyph_pos: to_plot_xy(mid_lon, r.sign_label),
                }
            })
            .collect()
    }

    fn build_markers(rotated: &Chart, config: &WheelConfig) -> Vec<AngleMarker> {
        let r = &config.radii;
        let spread = config.marker_spread_deg;
        [
            (ASCENDANT_LABEL, rotated.ascendant()),
            (MIDHEAVEN_LABEL, rotated.midheaven()),
        ]
        .into_iter()
        .filter_map(|(label, body)| body.map(|b| (label, b)))
        .map(|(label, body)| AngleMarker {
            label: label.to_string(),
            text: marker_text(label, body),
            lon: body.lon,
            spoke: Spoke::radial(body.lon, r.inner, r.outer),
            pointer: [
                to_plot_xy(body.lon, r.marker_tip),
                to_plot_xy(body.lon - spread, r.marker_base),
                to_plot_xy(body.lon + spread, r.marker_base),
            ],
            label_pos: to_plot_xy(body.lon, r.marker_label),
        })
        .collect()
    }

    fn build_cusps(rotated: &Chart, config: &WheelConfig) -> Vec<CuspSpoke> {
        let r = &config.radii;
        rotated
            .houses
            .cusps
            .iter()
            .map(|cusp| CuspSpoke {
                label: cusp.label.clone(),
                lon: cusp.lon,
                spoke: Spoke::radial(cusp.lon, 0.0, r.inner),
                label_pos: config
                    .show_cusp_labels
                    .then(|| to_plot_xy(cusp.lon, r.cusp_label)),
            })
            .collect()
    }

    fn build_planets(rotated: &Chart, config: &WheelConfig) -> Result<Vec<PlanetPlacement>> {
        let r = &config.radii;
        let placed: Vec<_> = rotated
            .planets
            .bodies
            .iter()
            .filter(|p| !config.is_excluded(p.label()))
            .collect();

        let bodies: Vec<Body> = placed.iter().map(|p| p.body.clone()).collect();
        let clusters = cluster_by_proximity(&bodies, config.cluster_threshold_deg);
        let index = ClusterIndex::new(&clusters);

        let mut placements = Vec::with_capacity(placed.len());
        for planet in placed {
            let label = planet.label();
            let slot = index
                .slot(label)
                .ok_or_else(|| WheelError::UnknownLabel(label.to_string()))?;
            let offset = slot.index as f64 * config.fan_step;
            let lon = planet.lon();

            placements.push(PlanetPlacement {
                label: label.to_string(),
                glyph: planet_glyph(label),
                lon,
                cluster: slot.cluster,
                cluster_index: slot.index,
                cluster_len: slot.cluster_len,
                leader: Spoke::radial(lon, r.planet_line_start, r.planet_line_end + offset),
                glyph_pos: to_plot_xy(lon, r.planet_glyph + offset),
                retrograde: planet.is_retrograde(),
            });
        }
        Ok(placements)
    }

    fn build_aspects(rotated: &Chart, config: &WheelConfig) -> (Vec<AspectChord>, usize) {
        let mut chords = Vec::new();
        let mut skipped = 0;

        for aspect in &rotated.aspects {
            let ends = (
                Self::placed_body(rotated, config, &aspect.body1),
                Self::placed_body(rotated, config, &aspect.body2),
            );
            let (Some(b1), Some(b2)) = ends else {
                log::warn!(
                    "Skipping aspect {} {} {}: body not on the wheel",
                    aspect.body1,
                    aspect.aspect.name,
                    aspect.body2
                );
                skipped += 1;
                continue;
            };

            chords.push(AspectChord {
                body1: aspect.body1.clone(),
                body2: aspect.body2.clone(),
                name: aspect.aspect.name.clone(),
                symbol: aspect_symbol(&aspect.aspect.name, &aspect.aspect.symbol),
                phase: aspect.phase.clone(),
                lon1: b1.lon,
                lon2: b2.lon,
                chord: Chord::between(b1.lon, b2.lon, config.radii.aspect),
            });
        }

        (chords, skipped)
    }

    fn placed_body<'a>(rotated: &'a Chart, config: &WheelConfig, label: &str) -> Option<&'a Body> {
        rotated
            .resolve(label)
            .filter(|body| !config.is_excluded(&body.label))
    }
}

fn aspect_symbol(name: &str, reported: &str) -> String {
    if reported.is_empty() {
        aspect_glyph(name).unwrap_or_default().to_string()
    } else {
        reported.to_string()
    }
}

fn marker_text(label: &str, body: &Body) -> String {
    match (&body.sign, &body.pos) {
        (Some(sign), Some(pos)) => format!("{} {} {}°{}'", label, sign, pos.deg, pos.min),
        (Some(sign), None) => format!("{} {}", label, sign),
        _ => label.to_string(),
    }
}
