use crate::chart::loader::load_chart_from_json;
use crate::chart::types::{Chart, HouseSystem};
use crate::error::{Result, WheelError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Invocation of the external ephemeris binary that writes chart JSON
#[derive(Debug, Clone)]
pub struct EphemerisCommand {
    pub binary: PathBuf,
    /// Local date, YYYY-MM-DD
    pub date: String,
    /// Local time, HH:MM
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_system: HouseSystem,
    /// IANA timezone id, e.g. "Europe/Warsaw"
    pub tzid: String,
}

impl EphemerisCommand {
    /// Command-line arguments, with the JSON output path last
    pub fn args(&self, json_out: &Path) -> Vec<String> {
        vec![
            "--date".to_string(),
            self.date.clone(),
            "--time".to_string(),
            self.time.clone(),
            "--lat".to_string(),
            self.latitude.to_string(),
            "--lon".to_string(),
            self.longitude.to_string(),
            "--hsys".to_string(),
            self.house_system.code().to_string(),
            "--tzid".to_string(),
            self.tzid.clone(),
            "--json".to_string(),
            json_out.display().to_string(),
        ]
    }

    /// Run the binary and return the JSON it wrote
    pub fn run_raw(&self) -> Result<String> {
        let out = tempfile::Builder::new()
            .prefix("urania-chart-")
            .suffix(".json")
            .tempfile()?;
        let args = self.args(out.path());

        log::info!("Running: {} {}", self.binary.display(), args.join(" "));
        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| {
                WheelError::Ephemeris(format!("failed to start {}: {}", self.binary.display(), e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            log::debug!("ephemeris stdout: {}", stdout.trim());
        }
        if !stderr.trim().is_empty() {
            log::warn!("ephemeris stderr: {}", stderr.trim());
        }

        if !output.status.success() {
            return Err(WheelError::Ephemeris(format!(
                "{} exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        let json = fs::read_to_string(out.path())?;
        if json.trim().is_empty() {
            return Err(WheelError::Ephemeris(
                "JSON output file is empty".to_string(),
            ));
        }
        Ok(json)
    }

    /// Run the binary and load the chart it produced
    pub fn run(&self) -> Result<Chart> {
        load_chart_from_json(&self.run_raw()?)
    }
}
