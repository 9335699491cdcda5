//! Core types and constructors for PanelLayoutManager.

use finboard_common::types::PanelId;

use crate::capture::{NoopCapture, PointerCapture};
use crate::guides::AlignmentGuide;
use crate::interaction::{Interaction, InteractionState};
use crate::settings::LayoutSettings;

/// Translates pointer events into panel geometry and focus changes.
///
/// Holds no panel state between interactions: geometry comes in by value
/// on pointer-down and goes out through callbacks. The only long-lived
/// field is the active interaction's anchor, created on pointer-down and
/// dropped on pointer-up. With a single anchor slot, at most one panel is
/// ever dragging or resizing.
pub struct PanelLayoutManager<P: PointerCapture = NoopCapture> {
    /// Canvas-wide settings.
    pub(super) settings: LayoutSettings,
    /// The live drag or resize, if any.
    pub(super) active: Option<Interaction>,
    /// Host move-subscription hook.
    pub(super) capture: P,
    /// Guides that decided the active drag's last committed position.
    pub(super) snapped: Vec<AlignmentGuide>,
}

impl PanelLayoutManager<NoopCapture> {
    pub fn new(settings: LayoutSettings) -> Self {
        Self::with_capture(settings, NoopCapture)
    }
}

impl<P: PointerCapture> PanelLayoutManager<P> {
    pub fn with_capture(settings: LayoutSettings, capture: P) -> Self {
        Self {
            settings,
            active: None,
            capture,
            snapped: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Update settings (called when config changes). Applies from the
    /// next move on.
    pub fn set_settings(&mut self, settings: LayoutSettings) {
        self.settings = settings;
    }

    pub fn capture(&self) -> &P {
        &self.capture
    }

    pub fn active_panel(&self) -> Option<&PanelId> {
        self.active.as_ref().map(Interaction::panel)
    }

    /// Interaction state of `panel`; `Idle` unless it owns the live
    /// interaction.
    pub fn state_of(&self, panel: &PanelId) -> InteractionState {
        match &self.active {
            Some(active) if active.panel() == panel => active.state(),
            _ => InteractionState::Idle,
        }
    }

    /// Whether pointer moves are currently subscribed.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Guides the dragged panel currently lies on. Empty when idle,
    /// resizing, or when guides are disabled.
    pub fn active_guides(&self) -> &[AlignmentGuide] {
        &self.snapped
    }
}

impl Default for PanelLayoutManager<NoopCapture> {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

impl<P: PointerCapture> Drop for PanelLayoutManager<P> {
    fn drop(&mut self) {
        if self.active.is_some() {
            self.end_interaction("manager dropped");
        }
    }
}
