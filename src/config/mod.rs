use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::state::rotator::DEFAULT_ROTATE_INTERVAL;

/// Release-signing credentials, the analog of the mobile build's
/// `key.properties` file. Presence of this table is what allows a
/// release bundle export to proceed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    pub store_file: PathBuf,
    pub store_password: String,
    pub key_alias: String,
    pub key_password: String,
}

impl SigningConfig {
    /// A credential with any blank field is treated as absent rather
    /// than half-configured.
    pub fn is_complete(&self) -> bool {
        !self.store_file.as_os_str().is_empty()
            && !self.store_password.is_empty()
            && !self.key_alias.is_empty()
            && !self.key_password.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Auto-rotation interval for the hero screens, in milliseconds.
    #[serde(default = "default_rotate_interval_ms")]
    pub rotate_interval_ms: u64,

    /// Fraction of a block that must be on screen before it reveals.
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    /// Disable reveal animations and auto-rotation entirely.
    #[serde(default)]
    pub reduce_motion: bool,

    /// Start the hero rotator automatically when the deck opens.
    #[serde(default = "default_true")]
    pub auto_rotate: bool,

    /// Release signing credentials for `--export-bundle`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing: Option<SigningConfig>,
}

fn default_rotate_interval_ms() -> u64 {
    DEFAULT_ROTATE_INTERVAL.as_millis() as u64
}

fn default_reveal_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rotate_interval_ms: default_rotate_interval_ms(),
            reveal_threshold: default_reveal_threshold(),
            reduce_motion: false,
            auto_rotate: true,
            signing: None,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("sportdeck");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        let mut clean_config = self.clone();

        // A zero interval would make the rotator spin every frame.
        if clean_config.rotate_interval_ms == 0 {
            clean_config.rotate_interval_ms = default_rotate_interval_ms();
        }
        clean_config.reveal_threshold = clean_config.reveal_threshold.clamp(0.0, 1.0);

        // Drop half-filled signing tables instead of persisting them.
        if let Some(ref signing) = clean_config.signing {
            if !signing.is_complete() {
                clean_config.signing = None;
            }
        }

        let content = toml::to_string_pretty(&clean_config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            rotate_interval_ms: 3000,
            reveal_threshold: 0.25,
            reduce_motion: true,
            auto_rotate: false,
            signing: Some(SigningConfig {
                store_file: PathBuf::from("/keys/upload.jks"),
                store_password: "secret".to_string(),
                key_alias: "sportpass".to_string(),
                key_password: "secret".to_string(),
            }),
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.rotate_interval_ms, deserialized.rotate_interval_ms);
        assert_eq!(
            deserialized.signing.as_ref().unwrap().key_alias,
            "sportpass"
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.rotate_interval_ms, 4200);
        assert!(config.auto_rotate);
        assert!(!config.reduce_motion);
        assert!(config.signing.is_none());
    }

    #[test]
    fn blank_signing_fields_count_as_absent() {
        let signing = SigningConfig {
            store_file: PathBuf::from("/keys/upload.jks"),
            store_password: String::new(),
            key_alias: "sportpass".to_string(),
            key_password: "secret".to_string(),
        };
        assert!(!signing.is_complete());
    }
}
