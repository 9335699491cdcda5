//! Initial panel presets.

use serde::{Deserialize, Serialize};

/// One panel placed on the canvas at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelPreset {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Falls back to `layout.default_min_width` when absent.
    #[serde(default)]
    pub min_width: Option<f64>,
    /// Falls back to `layout.default_min_height` when absent.
    #[serde(default)]
    pub min_height: Option<f64>,
}

impl PanelPreset {
    fn new(id: &str, title: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            x,
            y,
            width,
            height,
            min_width: None,
            min_height: None,
        }
    }

    fn with_min(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }
}

/// The dashboard's stock panels: price chart, statements, macro data and
/// model output.
pub fn default_presets() -> Vec<PanelPreset> {
    vec![
        PanelPreset::new("price-chart", "Price Chart", 20.0, 20.0, 800.0, 450.0).with_min(400.0, 300.0),
        PanelPreset::new("financials", "Financial Statements", 840.0, 20.0, 600.0, 450.0),
        PanelPreset::new("economic-indicators", "Economic Indicators", 20.0, 490.0, 700.0, 400.0),
        PanelPreset::new("ai-forecast", "AI Forecast", 740.0, 490.0, 700.0, 400.0).with_min(350.0, 250.0),
    ]
}
