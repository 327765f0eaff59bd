//! Application configuration

use std::path::Path;

use application::error::ApplicationError;
use domain::SpeechParams;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech synthesis parameters
    #[serde(default)]
    pub speech: SpeechParams,

    /// External link handling
    #[serde(default)]
    pub links: LinksConfig,

    /// Transcript display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// External link handling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Log URLs instead of opening them
    #[serde(default)]
    pub dry_run: bool,
}

/// Transcript display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many turns the transcript view shows (storage is unaffected)
    #[serde(default = "default_recent_turns")]
    pub recent_turns: usize,
}

fn default_recent_turns() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_turns: default_recent_turns(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ApplicationError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ApplicationError::Configuration(format!("{}: {e}", path.display())))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| ApplicationError::Configuration(format!("{}: {e}", path.display())))?;
        config.speech.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ApplicationError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
