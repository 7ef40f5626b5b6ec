/// application settings for ImageLift
/// these can be modified at runtime through the settings UI
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EnhanceError, EnhanceResult};

pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// base URL of the enhancement service (endpoints are appended)
    pub server_url: String,
    /// per-request timeout in seconds, 0 = wait forever
    pub request_timeout_secs: u64,
    /// grab width of the compare divider handle, in points
    pub divider_handle_width: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_owned(),
            request_timeout_secs: 300,
            divider_handle_width: 8.0,
        }
    }
}

impl AppSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// save settings to JSON file
    pub fn save(&self, path: &Path) -> EnhanceResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EnhanceError::Settings(e.to_string()))?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// load settings from JSON file, or return defaults if it is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to parse settings: {e}. using defaults");
                    Self::default()
                }
            },
            // file doesn't exist or can't be read
            Err(_) => Self::default(),
        }
    }
}
