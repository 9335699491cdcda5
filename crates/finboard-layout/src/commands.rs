use finboard_common::types::{PanelId, Point};
use serde::{Deserialize, Serialize};

use crate::hit::HitTarget;

/// A raw pointer event delivered by the host, in delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer-down at a canvas point; the target is found by hit testing.
    Down { at: Point },
    /// Pointer-down already resolved to a panel and handle by the host.
    DownOn {
        panel: PanelId,
        target: HitTarget,
        at: Point,
    },
    Move { at: Point },
    Up,
    CaptureLost,
}
