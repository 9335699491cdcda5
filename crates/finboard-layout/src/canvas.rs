//! Caller-owned panel store.
//!
//! The canvas holds the authoritative geometry for every registered panel
//! and the shared focus counter. It is updated only through its
//! [`LayoutCallbacks`] implementation, i.e. by the layout manager's
//! committed changes.

use std::collections::HashMap;

use finboard_common::types::{PanelId, Point, Rect, Size};
use tracing::{debug, warn};

use crate::callbacks::LayoutCallbacks;
use crate::focus::FocusOrder;
use crate::panel::{Panel, PanelGeometry};

pub struct Canvas<C = ()> {
    /// Registry of all panels by id.
    panels: HashMap<PanelId, Panel<C>>,
    /// Registration order, for deterministic iteration.
    order: Vec<PanelId>,
    /// Shared stacking order.
    focus: FocusOrder,
}

impl<C> Canvas<C> {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
            order: Vec::new(),
            focus: FocusOrder::new(),
        }
    }

    /// Register a panel. Re-registering an existing id replaces the old
    /// panel (last registration wins) and keeps its slot and z-index.
    pub fn register(&mut self, panel: Panel<C>) -> bool {
        let id = panel.id.clone();
        let is_new = self.panels.insert(id.clone(), panel).is_none();
        if is_new {
            debug!(panel = %id, "panel registered");
            self.order.push(id);
        } else {
            warn!(panel = %id, "duplicate panel id, replacing previous registration");
        }
        is_new
    }

    pub fn remove(&mut self, id: &PanelId) -> Option<Panel<C>> {
        let removed = self.panels.remove(id)?;
        self.order.retain(|existing| existing != id);
        self.focus.remove(id);
        debug!(panel = %id, "panel removed");
        Some(removed)
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.panels.contains_key(id)
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel<C>> {
        self.panels.get(id)
    }

    pub fn geometry(&self, id: &PanelId) -> Option<PanelGeometry> {
        self.panels.get(id).map(Panel::geometry)
    }

    /// Panels in registration order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel<C>> {
        self.order.iter().filter_map(|id| self.panels.get(id))
    }

    /// Ids in registration order.
    pub fn ids(&self) -> &[PanelId] {
        &self.order
    }

    /// Assigned z-index (ignores any active interaction).
    pub fn z_index(&self, id: &PanelId) -> u32 {
        self.focus.z_index(id)
    }

    pub fn focus_order(&self) -> &FocusOrder {
        &self.focus
    }

    /// Rects of every panel except `exclude`, in registration order.
    pub fn other_rects(&self, exclude: &PanelId) -> Vec<Rect> {
        self.panels()
            .filter(|p| &p.id != exclude)
            .map(Panel::rect)
            .collect()
    }
}

impl<C> Default for Canvas<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LayoutCallbacks for Canvas<C> {
    fn on_position_change(&mut self, panel: &PanelId, position: Point) {
        if let Some(p) = self.panels.get_mut(panel) {
            p.position = position;
        }
    }

    fn on_size_change(&mut self, panel: &PanelId, size: Size) {
        if let Some(p) = self.panels.get_mut(panel) {
            p.size = size;
        }
    }

    fn on_focus(&mut self, panel: &PanelId) {
        if self.panels.contains_key(panel) {
            self.focus.focus(panel);
        }
    }
}
