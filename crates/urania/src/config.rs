use crate::error::{Result, WheelError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Ring radii, as fractions of the outer sign ring
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RingRadii {
    pub outer: f64,
    pub inner: f64,
    pub sign_label: f64,
    pub marker_label: f64,
    pub marker_tip: f64,
    pub marker_base: f64,
    pub cusp_label: f64,
    pub planet_line_start: f64,
    pub planet_line_end: f64,
    pub planet_glyph: f64,
    pub aspect: f64,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            outer: 1.0,
            inner: 0.72,
            sign_label: 0.86,
            marker_label: 0.68,
            marker_tip: 1.1,
            marker_base: 0.95,
            cusp_label: 0.42,
            planet_line_start: 1.0,
            planet_line_end: 1.12,
            planet_glyph: 1.18,
            aspect: 0.62,
        }
    }
}

/// Layout settings for one wheel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub radii: RingRadii,
    /// Bodies closer than this many degrees are fanned out
    pub cluster_threshold_deg: f64,
    /// Radial push per position inside a cluster
    pub fan_step: f64,
    /// Half-width of the marker pointer, in degrees
    pub marker_spread_deg: f64,
    /// Bodies that are never placed on the wheel
    pub excluded_bodies: Vec<String>,
    pub show_cusp_labels: bool,
    pub show_aspects: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radii: RingRadii::default(),
            cluster_threshold_deg: 6.0,
            fan_step: 0.06,
            marker_spread_deg: 1.2,
            excluded_bodies: vec!["Mean N.Node".to_string(), "Mean S.Node".to_string()],
            show_cusp_labels: true,
            show_aspects: true,
        }
    }
}

impl WheelConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WheelConfig =
            toml::from_str(content).map_err(|e| WheelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.cluster_threshold_deg.is_finite() || self.cluster_threshold_deg < 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "cluster_threshold_deg must be a non-negative number, got: {}",
                self.cluster_threshold_deg
            )));
        }
        if !self.fan_step.is_finite() || self.fan_step < 0.0 {
            return Err(WheelError::InvalidConfig(format!(
                "fan_step must be a non-negative number, got: {}",
                self.fan_step
            )));
        }

        let r = &self.radii;
        let named = [
            ("outer", r.outer),
            ("inner", r.inner),
            ("sign_label", r.sign_label),
            ("marker_label", r.marker_label),
            ("marker_tip", r.marker_tip),
            ("marker_base", r.marker_base),
            ("cusp_label", r.cusp_label),
            ("planet_line_start", r.planet_line_start),
            ("planet_line_end", r.planet_line_end),
            ("planet_glyph", r.planet_glyph),
            ("aspect", r.aspect),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(WheelError::InvalidConfig(format!(
                    "radii.{} must be a non-negative number, got: {}",
                    name, value
                )));
            }
        }
        if r.inner >= r.outer {
            return Err(WheelError::InvalidConfig(
                "radii.inner must be less than radii.outer".to_string(),
            ));
        }
        if r.planet_line_start > r.planet_line_end {
            return Err(WheelError::InvalidConfig(
                "radii.planet_line_start must not exceed radii.planet_line_end".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_excluded(&self, label: &str) -> bool {
        self.excluded_bodies.iter().any(|b| b == label)
    }

    /// Largest radius any element can reach, fan-out included
    pub fn extent(&self, max_cluster_len: usize) -> f64 {
        let fan = self.fan_step * max_cluster_len.saturating_sub(1) as f64;
        let r = &self.radii;
        [r.outer, r.marker_tip, r.planet_glyph + fan, r.planet_line_end + fan]
            .into_iter()
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = WheelConfig::from_toml_str("").unwrap();
        assert_eq!(config, WheelConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WheelConfig::from_toml_str(
            r#"
            cluster_threshold_deg = 4.5
            excluded_bodies = []

            [radii]
            aspect = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.cluster_threshold_deg, 4.5);
        assert!(config.excluded_bodies.is_empty());
        assert_eq!(config.radii.aspect, 0.5);
        assert_eq!(config.radii.outer, 1.0);
    }

    #[test]
    fn test_inverted_rings_rejected() {
        let err = WheelConfig::from_toml_str("[radii]\ninner = 1.5\n").unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = WheelConfig::from_toml_str("cluster_threshold_deg = -1.0").unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn test_extent_includes_fan() {
        let config = WheelConfig::default();
        assert!((config.extent(1) - 1.18).abs() < 1e-12);
        assert!((config.extent(3) - 1.30).abs() < 1e-12);
    }
}
