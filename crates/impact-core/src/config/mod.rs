use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{defaults, endpoints, personas};
use crate::error::ImpactError;
use crate::llm::PromptRelay;

/// Everything the relay needs to reach the endpoint. Built once at startup
/// and passed explicitly; nothing in the call path reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub relay: RelaySettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub studio: StudioSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaySettings {
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub greeting: String,
    pub system_context: String,
    /// Send prior turns along with each query.
    pub include_transcript: bool,
    /// Most recent messages included when `include_transcript` is set.
    pub max_transcript_messages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    pub system_context: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            greeting: personas::ASSISTANT_GREETING.to_string(),
            system_context: personas::ASSISTANT_CONTEXT.to_string(),
            include_transcript: false,
            max_transcript_messages: defaults::TRANSCRIPT_MESSAGES,
        }
    }
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            system_context: personas::COPYWRITER_CONTEXT.to_string(),
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: endpoints::GEMINI_GENERATE_URL.to_string(),
            api_key_env: endpoints::GEMINI_API_KEY_ENV.to_string(),
            timeout_ms: defaults::TIMEOUT_MS,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay: RelaySettings::default(),
            assistant: AssistantSettings::default(),
            studio: StudioSettings::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::CONFIG_DIR)
            .join(defaults::CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(settings) => return settings,
                Err(e) => tracing::warn!("Ignoring {}: {e}", config_path.display()),
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ImpactError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ImpactError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ImpactError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ImpactError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable named in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.relay.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Resolve the explicit relay configuration.
    pub fn relay_config(&self) -> Result<RelayConfig, ImpactError> {
        let api_key = self.api_key().ok_or_else(|| {
            ImpactError::Config(format!(
                "API key not found; set the {} environment variable",
                self.relay.api_key_env
            ))
        })?;
        Ok(RelayConfig {
            endpoint: self.relay.endpoint.clone(),
            api_key,
            timeout_ms: self.relay.timeout_ms,
        })
    }

    /// Build a relay backed by the configured endpoint.
    pub fn build_relay(&self) -> Result<PromptRelay, ImpactError> {
        PromptRelay::from_config(&self.relay_config()?)
    }
}
