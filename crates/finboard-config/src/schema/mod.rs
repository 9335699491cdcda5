//! Configuration schema types for Finboard.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;
mod panels;

pub use layout::*;
pub use logging::*;
pub use panels::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Finboard.
///
/// Only override what you want to change. Omitting `[[panels]]` entirely
/// keeps the stock dashboard panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinboardConfig {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
    pub panels: Vec<PanelPreset>,
}

impl Default for FinboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
            panels: default_presets(),
        }
    }
}

impl FinboardConfig {
    /// Minimum size of a preset, falling back to the layout defaults.
    pub fn min_size_of(&self, preset: &PanelPreset) -> (f64, f64) {
        (
            preset.min_width.unwrap_or(self.layout.default_min_width),
            preset.min_height.unwrap_or(self.layout.default_min_height),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
