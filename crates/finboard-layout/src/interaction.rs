//! Per-panel interaction state and the anchor recorded on pointer-down.

use finboard_common::types::{PanelId, Point, Size};
use serde::{Deserialize, Serialize};

use crate::geometry::{clamp_position, clamp_size};
use crate::guides::{snap, AlignmentGuide, Snap};
use crate::panel::PanelGeometry;
use crate::settings::LayoutSettings;

/// The affordance a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    /// The header strip; starts a drag.
    Drag,
    /// The right edge; resizes width only.
    ResizeRight,
    /// The bottom edge; resizes height only.
    ResizeBottom,
    /// The bottom-right corner; resizes both dimensions.
    ResizeCorner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    ResizingHorizontal,
    ResizingVertical,
    ResizingCorner,
}

impl InteractionState {
    pub fn is_idle(self) -> bool {
        self == InteractionState::Idle
    }

    pub fn is_resizing(self) -> bool {
        matches!(
            self,
            InteractionState::ResizingHorizontal
                | InteractionState::ResizingVertical
                | InteractionState::ResizingCorner
        )
    }
}

impl From<Handle> for InteractionState {
    fn from(handle: Handle) -> Self {
        match handle {
            Handle::Drag => InteractionState::Dragging,
            Handle::ResizeRight => InteractionState::ResizingHorizontal,
            Handle::ResizeBottom => InteractionState::ResizingVertical,
            Handle::ResizeCorner => InteractionState::ResizingCorner,
        }
    }
}

/// Anchor for one drag or resize, alive from pointer-down to pointer-up.
///
/// Every move is computed from the anchor plus the total pointer delta,
/// never incrementally, so clamping on one move cannot drift later ones.
#[derive(Debug, Clone)]
pub struct Interaction {
    panel: PanelId,
    handle: Handle,
    pointer_start: Point,
    origin: Point,
    size: Size,
    min_size: Size,
    guides: Vec<AlignmentGuide>,
    /// Last position committed during this interaction.
    position: Point,
}

impl Interaction {
    pub fn begin(
        panel: &PanelGeometry,
        handle: Handle,
        at: Point,
        guides: Vec<AlignmentGuide>,
    ) -> Self {
        let guides = if handle == Handle::Drag {
            guides
        } else {
            Vec::new()
        };
        Self {
            panel: panel.id.clone(),
            handle,
            pointer_start: at.sanitized(),
            origin: panel.position,
            size: panel.size,
            min_size: panel.min_size,
            guides,
            position: panel.position,
        }
    }

    pub fn panel(&self) -> &PanelId {
        &self.panel
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn state(&self) -> InteractionState {
        self.handle.into()
    }

    pub fn guides(&self) -> &[AlignmentGuide] {
        &self.guides
    }

    /// Position at the anchor, used when a resize has to re-clamp it.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Last committed position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Dragged position for the pointer at `at`: anchor + delta, snapped,
    /// then clamped. A guide stays reported only if the clamp left its
    /// axis where the snap put it.
    pub fn drag(&self, at: Point, settings: &LayoutSettings) -> Snap {
        let (dx, dy) = at.sanitized().delta_from(self.pointer_start);
        let candidate = self.origin.offset(dx, dy);
        let mut snapped = if settings.show_alignment_guides && !self.guides.is_empty() {
            snap(candidate, self.size, &self.guides, settings.snap_threshold)
        } else {
            Snap::unsnapped(candidate)
        };
        let position = clamp_position(snapped.position, self.size, settings);
        if position.x != snapped.position.x {
            snapped.vertical = None;
        }
        if position.y != snapped.position.y {
            snapped.horizontal = None;
        }
        snapped.position = position;
        snapped
    }

    /// Resized size for the pointer at `at`. Only the handle's axes change.
    pub fn resized(&self, at: Point) -> Size {
        let (dx, dy) = at.sanitized().delta_from(self.pointer_start);
        let mut size = self.size;
        match self.handle {
            Handle::ResizeRight => size.width += dx,
            Handle::ResizeBottom => size.height += dy,
            Handle::ResizeCorner => {
                size.width += dx;
                size.height += dy;
            }
            Handle::Drag => {}
        }
        clamp_size(size, self.min_size)
    }
}
