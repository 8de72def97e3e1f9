//! Loader for the controller configuration file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;
use super::error::ConfigError;
use super::validation::validate_config;

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a configuration from RON text without validating it.
pub fn parse_ron(path: &Path, contents: &str) -> Result<ControllerConfig, ConfigError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
}

/// Parse a configuration from JSON text without validating it.
pub fn parse_json(path: &Path, contents: &str) -> Result<ControllerConfig, ConfigError> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
}

/// Load and validate the configuration at `path`.
/// The format is chosen by extension (`.ron` or `.json`). Returns every
/// problem found; the controller must not start when this fails.
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, Vec<ConfigError>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| vec![ConfigError::Io(path.to_path_buf(), e.to_string())])?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => parse_ron(path, &contents),
        Some("json") => parse_json(path, &contents),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
    .map_err(|e| vec![e])?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(errors);
    }

    info!("Loaded controller config from {}", path.display());
    Ok(config)
}
