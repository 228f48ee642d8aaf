//! Viewport configuration
//!
//! Thresholds are fixed at build time for shipped compositions, but hosts
//! embedding the engine may load them from JSON alongside their own
//! settings.

use layout_tokens::{breakpoints, Breakpoints, Result};
use serde::{Deserialize, Serialize};

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportConfig {
    /// First width of the tablet tier
    #[serde(default = "default_tablet_min")]
    pub tablet_min: f32,

    /// First width of the desktop tier
    #[serde(default = "default_desktop_min")]
    pub desktop_min: f32,

    /// Width known before the first measurement, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_width: Option<f32>,

    /// Buffered tier-change events per broadcast subscriber
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_tablet_min() -> f32 {
    breakpoints::TABLET
}

fn default_desktop_min() -> f32 {
    breakpoints::DESKTOP
}

fn default_event_capacity() -> usize {
    16
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            tablet_min: default_tablet_min(),
            desktop_min: default_desktop_min(),
            initial_width: None,
            event_capacity: default_event_capacity(),
        }
    }
}

impl ViewportConfig {
    /// Parse a configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ViewportConfig = serde_json::from_str(json)?;
        config.breakpoints()?;
        Ok(config)
    }

    /// Validated thresholds
    pub fn breakpoints(&self) -> Result<Breakpoints> {
        Breakpoints::new(self.tablet_min, self.desktop_min)
    }
}
