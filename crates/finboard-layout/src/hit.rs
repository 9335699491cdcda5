//! Pointer hit testing against panel handle regions.
//!
//! Each panel has a header strip (drag handle), a right edge strip, a
//! bottom edge strip and a bottom-right corner square. Everything else
//! inside the panel is body: a pointer-down there only raises focus.

use finboard_common::types::{PanelId, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::interaction::Handle;
use crate::settings::LayoutSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTarget {
    Handle(Handle),
    Body,
}

/// Classify `at` against one panel's rect. `None` when outside it.
///
/// The corner takes precedence over the edges, and the edges over the
/// header, so a short panel can still be resized.
pub fn hit_target(rect: &Rect, at: Point, settings: &LayoutSettings) -> Option<HitTarget> {
    if !rect.contains(at) {
        return None;
    }
    let on_right = at.x >= rect.right() - settings.handle_size;
    let on_bottom = at.y >= rect.bottom() - settings.handle_size;
    let target = match (on_right, on_bottom) {
        (true, true) => HitTarget::Handle(Handle::ResizeCorner),
        (true, false) => HitTarget::Handle(Handle::ResizeRight),
        (false, true) => HitTarget::Handle(Handle::ResizeBottom),
        (false, false) if at.y < rect.y + settings.header_height => HitTarget::Handle(Handle::Drag),
        (false, false) => HitTarget::Body,
    };
    Some(target)
}

/// Find the topmost panel under `at`. `panels` yields `(id, rect, z)`;
/// on equal z the later entry is considered on top.
pub fn hit_test<'a>(
    panels: impl IntoIterator<Item = (&'a PanelId, Rect, u32)>,
    at: Point,
    settings: &LayoutSettings,
) -> Option<(PanelId, HitTarget)> {
    let mut best: Option<(&PanelId, HitTarget, u32)> = None;
    for (id, rect, z) in panels {
        if let Some(target) = hit_target(&rect, at, settings) {
            if best.map_or(true, |(_, _, best_z)| z >= best_z) {
                best = Some((id, target, z));
            }
        }
    }
    best.map(|(id, target, _)| (id.clone(), target))
}
