//! A canvas paired with its layout manager.
//!
//! `Workspace` is the host-facing entry point: it hit-tests raw pointer
//! events, derives alignment guides for drags, routes everything through
//! the manager and commits the results into the canvas.

use finboard_common::events::PanelEvent;
use finboard_common::types::{PanelId, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::callbacks::{EventLog, LayoutCallbacks};
use crate::canvas::Canvas;
use crate::capture::{NoopCapture, PointerCapture};
use crate::commands::PointerEvent;
use crate::geometry::{clamp_position, is_within_bounds};
use crate::guides::{derive_guides, AlignmentGuide};
use crate::hit::{hit_test, HitTarget};
use crate::interaction::{Handle, InteractionState};
use crate::manager::PanelLayoutManager;
use crate::panel::Panel;
use crate::settings::LayoutSettings;

// =============================================================================
// TYPES
// =============================================================================

/// Where and how to paint one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub id: PanelId,
    pub rect: Rect,
    pub z_index: u32,
    pub state: InteractionState,
}

pub struct Workspace<C = (), P: PointerCapture = NoopCapture> {
    canvas: Canvas<C>,
    manager: PanelLayoutManager<P>,
    /// Caller-supplied guides; derived from the canvas when `None`.
    guides: Option<Vec<AlignmentGuide>>,
    log: Option<EventLog>,
}

impl<C> Workspace<C, NoopCapture> {
    pub fn new(settings: LayoutSettings) -> Self {
        Self::with_capture(settings, NoopCapture)
    }
}

impl<C, P: PointerCapture> Workspace<C, P> {
    pub fn with_capture(settings: LayoutSettings, capture: P) -> Self {
        Self {
            canvas: Canvas::new(),
            manager: PanelLayoutManager::with_capture(settings, capture),
            guides: None,
            log: None,
        }
    }

    /// Also record every callback as a [`PanelEvent`].
    pub fn record_events(mut self) -> Self {
        self.log = Some(EventLog::new());
        self
    }

    pub fn events(&self) -> &[PanelEvent] {
        self.log.as_ref().map(EventLog::events).unwrap_or(&[])
    }

    pub fn take_events(&mut self) -> Vec<PanelEvent> {
        self.log.as_mut().map(EventLog::take).unwrap_or_default()
    }

    /// Use fixed guides for drags instead of deriving them from panel edges.
    pub fn set_alignment_guides(&mut self, guides: Option<Vec<AlignmentGuide>>) {
        self.guides = guides;
    }

    pub fn canvas(&self) -> &Canvas<C> {
        &self.canvas
    }

    pub fn manager(&self) -> &PanelLayoutManager<P> {
        &self.manager
    }

    /// Replace the settings and pull every panel back inside the new
    /// horizontal bounds.
    pub fn set_settings(&mut self, settings: LayoutSettings) {
        self.manager.set_settings(settings);
        let moved: Vec<(PanelId, Point)> = self
            .canvas
            .panels()
            .filter(|p| !is_within_bounds(p.position, p.size, &settings))
            .map(|p| (p.id.clone(), clamp_position(p.position, p.size, &settings)))
            .collect();
        let mut commit = Commit {
            canvas: &mut self.canvas,
            log: self.log.as_mut(),
        };
        for (id, position) in moved {
            commit.on_position_change(&id, position);
        }
    }

    // -- Panels --

    /// Register a panel. Its position is clamped into bounds first.
    pub fn register(&mut self, mut panel: Panel<C>) -> bool {
        let settings = self.manager.settings();
        if !is_within_bounds(panel.position, panel.size, settings) {
            let clamped = clamp_position(panel.position, panel.size, settings);
            debug!(
                panel = %panel.id,
                x = panel.position.x,
                y = panel.position.y,
                "registered out of bounds, clamping"
            );
            panel.position = clamped;
        }
        self.canvas.register(panel)
    }

    /// Remove a panel, ending its interaction if it has one.
    pub fn remove(&mut self, id: &PanelId) -> Option<Panel<C>> {
        self.manager.cancel_for(id);
        self.canvas.remove(id)
    }

    pub fn state_of(&self, id: &PanelId) -> InteractionState {
        self.manager.state_of(id)
    }

    pub fn effective_z(&self, id: &PanelId) -> u32 {
        self.manager.effective_z(id, self.canvas.z_index(id))
    }

    // -- Pointer events --

    /// Dispatch a pointer event. Returns `true` if it was handled.
    pub fn execute(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { at } => self.pointer_down(at),
            PointerEvent::DownOn { panel, target, at } => self.pointer_down_on(&panel, target, at),
            PointerEvent::Move { at } => self.pointer_move(at),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::CaptureLost => self.capture_lost(),
        }
    }

    /// Pointer-down at a canvas point, routed to the topmost panel under it.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        let hit = hit_test(
            self.canvas
                .panels()
                .map(|p| (&p.id, p.rect(), self.effective_z(&p.id))),
            at,
            self.manager.settings(),
        );
        match hit {
            Some((id, target)) => self.pointer_down_on(&id, target, at),
            None => {
                debug!(x = at.x, y = at.y, "pointer-down on empty canvas");
                false
            }
        }
    }

    pub fn pointer_down_on(&mut self, id: &PanelId, target: HitTarget, at: Point) -> bool {
        let Some(geometry) = self.canvas.geometry(id) else {
            debug!(panel = %id, "pointer-down on unregistered panel");
            return false;
        };
        let guides = match target {
            HitTarget::Handle(Handle::Drag) => self.drag_guides(id),
            _ => Vec::new(),
        };
        let mut commit = Commit {
            canvas: &mut self.canvas,
            log: self.log.as_mut(),
        };
        self.manager.pointer_down(&geometry, target, at, guides, &mut commit)
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        let mut commit = Commit {
            canvas: &mut self.canvas,
            log: self.log.as_mut(),
        };
        self.manager.pointer_move(at, &mut commit)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.manager.pointer_up()
    }

    pub fn capture_lost(&mut self) -> bool {
        self.manager.capture_lost()
    }

    // -- Output --

    /// Guides to draw for the current drag.
    pub fn active_guides(&self) -> &[AlignmentGuide] {
        self.manager.active_guides()
    }

    /// Panels bottom to top. Equal z keeps registration order.
    pub fn paint_order(&self) -> Vec<PanelLayout> {
        let mut layout: Vec<PanelLayout> = self
            .canvas
            .panels()
            .map(|p| PanelLayout {
                id: p.id.clone(),
                rect: p.rect(),
                z_index: self.effective_z(&p.id),
                state: self.manager.state_of(&p.id),
            })
            .collect();
        layout.sort_by_key(|entry| entry.z_index);
        layout
    }

    fn drag_guides(&self, id: &PanelId) -> Vec<AlignmentGuide> {
        let settings = self.manager.settings();
        if !settings.show_alignment_guides {
            return Vec::new();
        }
        match &self.guides {
            Some(guides) => guides.clone(),
            None => derive_guides(self.canvas.other_rects(id), settings.viewport_width),
        }
    }
}

// =============================================================================
// COMMIT
// =============================================================================

/// Commits callbacks into the canvas and, when recording, the event log.
struct Commit<'a, C> {
    canvas: &'a mut Canvas<C>,
    log: Option<&'a mut EventLog>,
}

impl<C> LayoutCallbacks for Commit<'_, C> {
    fn on_position_change(&mut self, panel: &PanelId, position: Point) {
        self.canvas.on_position_change(panel, position);
        if let Some(log) = self.log.as_mut() {
            log.on_position_change(panel, position);
        }
    }

    fn on_size_change(&mut self, panel: &PanelId, size: Size) {
        self.canvas.on_size_change(panel, size);
        if let Some(log) = self.log.as_mut() {
            log.on_size_change(panel, size);
        }
    }

    fn on_focus(&mut self, panel: &PanelId) {
        self.canvas.on_focus(panel);
        if let Some(log) = self.log.as_mut() {
            log.on_focus(panel);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
