use std::path::PathBuf;

/// Errors that stop the controller from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{0}': {1}")]
    Io(PathBuf, String),

    #[error("failed to parse '{0}': {1}")]
    Parse(PathBuf, String),

    #[error("unsupported config format '{0}' (expected .ron or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("schema version {found} is not supported (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("curve '{0}' has no keys")]
    EmptyCurve(&'static str),

    #[error("curve '{curve}' key {index} does not come after the previous key")]
    UnorderedCurve { curve: &'static str, index: usize },

    #[error("'{field}' must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("'{field}' must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("'{field}' must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("'{field}' is not a finite number")]
    NotFinite { field: &'static str },

    #[error("rope length bounds are inverted: min {min} > max {max}")]
    InvertedRopeBounds { min: f32, max: f32 },
}
