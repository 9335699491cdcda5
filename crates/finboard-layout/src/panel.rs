use finboard_common::types::{PanelId, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::geometry::clamp_size;

/// A registered panel: geometry owned by the canvas plus the caller's
/// opaque content payload.
#[derive(Debug, Clone)]
pub struct Panel<C = ()> {
    pub id: PanelId,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub content: C,
}

impl<C> Panel<C> {
    /// Build a panel from caller-supplied geometry. Non-finite values are
    /// zeroed and the size is clamped to `min_size`.
    pub fn new(
        id: impl Into<PanelId>,
        position: Point,
        size: Size,
        min_size: Size,
        content: C,
    ) -> Self {
        let min_size = min_size.sanitized();
        Self {
            id: id.into(),
            position: position.sanitized(),
            size: clamp_size(size, min_size),
            min_size,
            content,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Snapshot of the geometry handed to the layout manager.
    pub fn geometry(&self) -> PanelGeometry {
        PanelGeometry {
            id: self.id.clone(),
            position: self.position,
            size: self.size,
            min_size: self.min_size,
        }
    }
}

/// Geometry of one panel passed by value into the layout manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub id: PanelId,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
}
