//! Canvas layout configuration types.

use serde::{Deserialize, Serialize};

/// Canvas-wide panel layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width in pixels used for the right-hand drag bound (valid range: 320-16384).
    pub viewport_width: f64,
    /// Pixels of a panel kept on-canvas horizontally (valid range: 0-1000).
    pub fixed_margin: f64,
    /// Snap distance in pixels (valid range: 0-100).
    pub snap_threshold: f64,
    /// Snap to alignment guides while dragging.
    pub show_alignment_guides: bool,
    /// Drag-handle strip height in pixels (valid range: 8-200).
    pub header_height: f64,
    /// Resize handle thickness in pixels (valid range: 2-64).
    pub handle_size: f64,
    /// Minimum width for presets that don't set one (valid range: 10-4000).
    pub default_min_width: f64,
    /// Minimum height for presets that don't set one (valid range: 10-4000).
    pub default_min_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1920.0,
            fixed_margin: 100.0,
            snap_threshold: 10.0,
            show_alignment_guides: true,
            header_height: 32.0,
            handle_size: 8.0,
            default_min_width: 300.0,
            default_min_height: 200.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
