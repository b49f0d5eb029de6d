//! Game settings
//!
//! Read once at startup from JSON: an inline `<script id="runner-settings">`
//! element on the web, a file path natively. Never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::is_touch_device;
use crate::tuning::{Tuning, TuningError};

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(#[from] TuningError),
}

/// When to show the on-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TouchControls {
    /// Decide from the user agent
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; None picks one from the clock
    pub seed: Option<u64>,
    /// Gameplay balance overrides
    pub tuning: Tuning,
    pub touch_controls: TouchControls,
    /// Start with the autopilot playing
    pub idle_mode: bool,
}

impl Settings {
    /// Element id of the inline settings block (web)
    pub const ELEMENT_ID: &'static str = "runner-settings";

    /// Parse and validate a settings document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Whether the touch buttons should be visible for this browser
    pub fn show_touch_controls(&self, user_agent: &str) -> bool {
        match self.touch_controls {
            TouchControls::Auto => is_touch_device(user_agent),
            TouchControls::Always => true,
            TouchControls::Never => false,
        }
    }

    /// Configured seed, or `fallback` when none is set
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
