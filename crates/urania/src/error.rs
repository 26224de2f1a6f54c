use thiserror::Error;

/// Errors produced by chart loading, rotation, layout and configuration
#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Chart has no ascendant to rotate against")]
    MissingReferenceBody,
    #[error("Unknown body label: {0}")]
    UnknownLabel(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid chart: {0}")]
    InvalidChart(String),
    #[error("Invalid wheel config: {0}")]
    InvalidConfig(String),
    #[error("Ephemeris command failed: {0}")]
    Ephemeris(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WheelError>;
