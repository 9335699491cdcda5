//! Effective paint order.

use finboard_common::types::PanelId;

use crate::capture::PointerCapture;
use crate::focus::ACTIVE_Z_INDEX;

use super::PanelLayoutManager;

impl<P: PointerCapture> PanelLayoutManager<P> {
    /// Z-index to paint `panel` at: the active panel is lifted above every
    /// assigned value, everything else uses `assigned`.
    pub fn effective_z(&self, panel: &PanelId, assigned: u32) -> u32 {
        if self.active_panel() == Some(panel) {
            ACTIVE_Z_INDEX
        } else {
            assigned
        }
    }
}
