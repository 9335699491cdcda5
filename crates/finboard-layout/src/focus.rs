//! Canvas-wide stacking order.
//!
//! Every focus event assigns the focused panel a z-index one above the
//! current maximum, so the most recently focused panel is always strictly
//! on top and two panels never share a focused z-index.

use std::collections::HashMap;

use finboard_common::types::PanelId;
use tracing::debug;

/// Z-index of a panel that has never been focused.
pub const BASE_Z_INDEX: u32 = 1;

/// Paint z-index of the panel being dragged or resized. Focus assignments
/// stay strictly below it.
pub const ACTIVE_Z_INDEX: u32 = u32::MAX;

#[derive(Debug, Clone, Default)]
pub struct FocusOrder {
    z: HashMap<PanelId, u32>,
}

impl FocusOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `panel` above every other panel and return its new z-index.
    pub fn focus(&mut self, panel: &PanelId) -> u32 {
        let top = self.max_z().max(BASE_Z_INDEX);
        let new_z = top.saturating_add(1).min(ACTIVE_Z_INDEX - 1);
        self.z.insert(panel.clone(), new_z);
        debug!(%panel, z = new_z, "panel focused");
        new_z
    }

    /// Assigned z-index, or [`BASE_Z_INDEX`] if never focused.
    pub fn z_index(&self, panel: &PanelId) -> u32 {
        self.z.get(panel).copied().unwrap_or(BASE_Z_INDEX)
    }

    /// The most recently focused panel, if any.
    pub fn top(&self) -> Option<&PanelId> {
        self.z.iter().max_by_key(|(_, z)| **z).map(|(id, _)| id)
    }

    pub fn remove(&mut self, panel: &PanelId) {
        self.z.remove(panel);
    }

    fn max_z(&self) -> u32 {
        self.z.values().copied().max().unwrap_or(BASE_Z_INDEX)
    }
}
