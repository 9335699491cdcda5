//! Drag/resize/focus layout engine for the dashboard's floating panels.
//!
//! Panel geometry is owned by the caller (see [`Canvas`]); the
//! [`PanelLayoutManager`] only translates pointer events into committed
//! position, size and focus changes, reported through [`LayoutCallbacks`].

pub mod callbacks;
pub mod canvas;
pub mod capture;
pub mod commands;
pub mod focus;
pub mod geometry;
pub mod guides;
pub mod hit;
pub mod interaction;
pub mod manager;
pub mod panel;
pub mod settings;
pub mod workspace;

pub use callbacks::{EventLog, LayoutCallbacks};
pub use canvas::Canvas;
pub use capture::{NoopCapture, PointerCapture, RecordingCapture};
pub use commands::PointerEvent;
pub use guides::{AlignmentGuide, GuideKind};
pub use hit::HitTarget;
pub use interaction::{Handle, InteractionState};
pub use manager::PanelLayoutManager;
pub use panel::{Panel, PanelGeometry};
pub use settings::LayoutSettings;
pub use workspace::{PanelLayout, Workspace};
