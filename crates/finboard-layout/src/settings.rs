//! Canvas-wide layout settings.

use serde::{Deserialize, Serialize};

/// Configuration shared by every panel on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Width of the visible canvas, used for the right-hand drag bound.
    pub viewport_width: f64,
    /// Pixels of a panel that must stay on the canvas horizontally.
    pub fixed_margin: f64,
    /// Maximum distance in pixels at which an edge snaps to a guide.
    pub snap_threshold: f64,
    /// Enables snapping to alignment guides while dragging.
    pub show_alignment_guides: bool,
    /// Height of the drag-handle strip along each panel's top edge.
    pub header_height: f64,
    /// Thickness of the right/bottom resize handles.
    pub handle_size: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1920.0,
            fixed_margin: 100.0,
            snap_threshold: 10.0,
            show_alignment_guides: true,
            header_height: 32.0,
            handle_size: 8.0,
        }
    }
}
