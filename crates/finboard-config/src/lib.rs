//! Finboard configuration system.
//!
//! TOML-based configuration for the panel canvas, logging and the panels
//! placed at startup. All sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use finboard_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FinboardConfig, LogLevel, PanelPreset, CONFIG_SCHEMA_VERSION};

use finboard_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it strictly.
pub fn load_config() -> Result<FinboardConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from `path` and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<FinboardConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FinboardConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
