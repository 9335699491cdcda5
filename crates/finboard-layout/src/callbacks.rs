//! Outbound notifications from the layout manager to its caller.

use finboard_common::events::PanelEvent;
use finboard_common::types::{PanelId, Point, Size};

/// Receives every committed change, synchronously, in event order.
///
/// The caller persists these into its panel store and feeds the updated
/// geometry back on the next interaction.
pub trait LayoutCallbacks {
    fn on_position_change(&mut self, panel: &PanelId, position: Point);
    fn on_size_change(&mut self, panel: &PanelId, size: Size);
    fn on_focus(&mut self, panel: &PanelId);
}

/// Records callbacks as [`PanelEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PanelEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PanelEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl LayoutCallbacks for EventLog {
    fn on_position_change(&mut self, panel: &PanelId, position: Point) {
        self.events.push(PanelEvent::PositionChanged {
            panel: panel.clone(),
            position,
        });
    }

    fn on_size_change(&mut self, panel: &PanelId, size: Size) {
        self.events.push(PanelEvent::SizeChanged {
            panel: panel.clone(),
            size,
        });
    }

    fn on_focus(&mut self, panel: &PanelId) {
        self.events.push(PanelEvent::Focused(panel.clone()));
    }
}
