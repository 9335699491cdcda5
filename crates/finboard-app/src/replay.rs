//! Seeds a workspace from config and replays pointer scripts against it.

use std::path::Path;

use finboard_common::events::PanelEvent;
use finboard_common::types::{Point, Size};
use finboard_common::{FinboardError, Result};
use finboard_config::schema::{FinboardConfig, LayoutConfig};
use finboard_layout::{LayoutSettings, Panel, PointerEvent, Workspace};
use serde::Serialize;

/// Panels carry their display title as content.
pub type DashboardWorkspace = Workspace<String>;

/// One panel in the printed layout, bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z: u32,
}

/// Everything the binary prints after a replay.
#[derive(Debug, Serialize)]
pub struct Report {
    pub layout: Vec<LayoutEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<PanelEvent>>,
}

pub fn settings_from_config(layout: &LayoutConfig) -> LayoutSettings {
    LayoutSettings {
        viewport_width: layout.viewport_width,
        fixed_margin: layout.fixed_margin,
        snap_threshold: layout.snap_threshold,
        show_alignment_guides: layout.show_alignment_guides,
        header_height: layout.header_height,
        handle_size: layout.handle_size,
    }
}

/// Build a recording workspace with every configured preset registered in
/// config order.
pub fn seed_workspace(config: &FinboardConfig) -> DashboardWorkspace {
    let mut workspace =
        Workspace::new(settings_from_config(&config.layout)).record_events();
    for preset in &config.panels {
        let (min_width, min_height) = config.min_size_of(preset);
        let title = if preset.title.is_empty() {
            preset.id.clone()
        } else {
            preset.title.clone()
        };
        workspace.register(Panel::new(
            preset.id.as_str(),
            Point::new(preset.x, preset.y),
            Size::new(preset.width, preset.height),
            Size::new(min_width, min_height),
            title,
        ));
    }
    tracing::debug!(panels = config.panels.len(), "workspace seeded");
    workspace
}

pub fn parse_script(json: &str) -> Result<Vec<PointerEvent>> {
    serde_json::from_str(json).map_err(|e| FinboardError::Script(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}

/// Feed `script` through the workspace in order. Returns how many events
/// were handled.
pub fn replay(workspace: &mut DashboardWorkspace, script: Vec<PointerEvent>) -> usize {
    let total = script.len();
    let handled = script
        .into_iter()
        .map(|event| workspace.execute(event))
        .filter(|handled| *handled)
        .count();
    tracing::info!("Replayed {total} pointer events ({handled} handled)");
    handled
}

pub fn report(workspace: &mut DashboardWorkspace, with_events: bool) -> Report {
    let layout = workspace
        .paint_order()
        .into_iter()
        .map(|entry| LayoutEntry {
            id: entry.id.as_str().to_owned(),
            x: entry.rect.x,
            y: entry.rect.y,
            width: entry.rect.width,
            height: entry.rect.height,
            z: entry.z_index,
        })
        .collect();
    let events = with_events.then(|| workspace.take_events());
    Report { layout, events }
}
