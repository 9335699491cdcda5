//! Records of the outbound layout callbacks.
//!
//! The layout manager reports every committed change through callbacks;
//! `PanelEvent` is the serializable form of one such callback, used by
//! recorders and the replay tool.

use serde::{Deserialize, Serialize};

use crate::types::{PanelId, Point, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelEvent {
    PositionChanged { panel: PanelId, position: Point },
    SizeChanged { panel: PanelId, size: Size },
    Focused(PanelId),
    #[serde(other)]
    Unknown,
}

impl PanelEvent {
    /// The panel this event refers to, if any.
    pub fn panel(&self) -> Option<&PanelId> {
        match self {
            PanelEvent::PositionChanged { panel, .. } | PanelEvent::SizeChanged { panel, .. } => {
                Some(panel)
            }
            PanelEvent::Focused(panel) => Some(panel),
            PanelEvent::Unknown => None,
        }
    }
}
