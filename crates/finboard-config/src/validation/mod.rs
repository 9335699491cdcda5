//! Full configuration validation.
//!
//! Validates numeric ranges and panel presets, collecting every problem
//! into a single `ConfigError`.

mod helpers;
mod layout;
mod panels;


use crate::schema::FinboardConfig;
use finboard_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FinboardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    panels::validate_panels(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
