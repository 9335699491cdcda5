//! Pointer-down, move and up transitions.

use finboard_common::types::{PanelId, Point};
use tracing::{debug, trace, warn};

use crate::callbacks::LayoutCallbacks;
use crate::capture::PointerCapture;
use crate::geometry::clamp_position;
use crate::guides::AlignmentGuide;
use crate::hit::HitTarget;
use crate::interaction::{Handle, Interaction};
use crate::panel::PanelGeometry;

use super::PanelLayoutManager;

impl<P: PointerCapture> PanelLayoutManager<P> {
    /// Pointer-down on `panel`. Always raises focus; on a handle it also
    /// starts a drag or resize anchored at `at`.
    ///
    /// `guides` are only kept for drags. A pointer-down while another
    /// interaction is live ends that one first.
    pub fn pointer_down(
        &mut self,
        panel: &PanelGeometry,
        target: HitTarget,
        at: Point,
        guides: Vec<AlignmentGuide>,
        callbacks: &mut impl LayoutCallbacks,
    ) -> bool {
        if self.active.is_some() {
            warn!(panel = %panel.id, "pointer-down during a live interaction, ending it first");
            self.end_interaction("superseded");
        }

        callbacks.on_focus(&panel.id);

        let HitTarget::Handle(handle) = target else {
            return true;
        };

        let interaction = Interaction::begin(panel, handle, at, guides);
        debug!(panel = %panel.id, state = ?interaction.state(), "interaction started");
        self.capture.capture();
        self.active = Some(interaction);
        true
    }

    /// Pointer-move. Commits a new position (drag) or size (resize) for the
    /// active panel. Returns `false` when nothing is active.
    pub fn pointer_move(&mut self, at: Point, callbacks: &mut impl LayoutCallbacks) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if active.handle() == Handle::Drag {
            let snapped = active.drag(at, &self.settings);
            let position = snapped.position;
            self.snapped.clear();
            self.snapped.extend(snapped.guides());
            active.set_position(position);
            trace!(panel = %active.panel(), x = position.x, y = position.y, "drag move");
            callbacks.on_position_change(active.panel(), position);
        } else {
            let size = active.resized(at);
            trace!(panel = %active.panel(), width = size.width, height = size.height, "resize move");
            callbacks.on_size_change(active.panel(), size);

            // A narrower panel has a tighter left bound; keep x inside it.
            let position = clamp_position(active.origin(), size, &self.settings);
            if position != active.position() {
                active.set_position(position);
                callbacks.on_position_change(active.panel(), position);
            }
        }
        true
    }

    /// Pointer-up. Ends the active interaction; an orphaned pointer-up is
    /// ignored. Returns whether an interaction ended.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.end_interaction("pointer up");
        if !ended {
            trace!("pointer-up without an active interaction");
        }
        ended
    }

    /// The host lost pointer capture. Resolves to idle like a pointer-up.
    pub fn capture_lost(&mut self) -> bool {
        self.end_interaction("capture lost")
    }

    /// End the interaction if it belongs to `panel` (e.g. on removal).
    pub fn cancel_for(&mut self, panel: &PanelId) -> bool {
        if self.active_panel() == Some(panel) {
            self.end_interaction("panel removed")
        } else {
            false
        }
    }

    pub(super) fn end_interaction(&mut self, reason: &str) -> bool {
        match self.active.take() {
            Some(interaction) => {
                self.capture.release();
                self.snapped.clear();
                debug!(panel = %interaction.panel(), reason, "interaction ended");
                true
            }
            None => false,
        }
    }
}
