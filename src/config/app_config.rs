//! Deployment configuration — server, model artifact, speech and audio
//! settings as operator-tunable TOML values
//!
//! Each struct implements `Default` with the built-in constants, ensuring
//! zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration for a deployment.
///
/// Load with `AppConfig::load()` which searches:
/// 1. `$SOILSENSE_CONFIG` env var
/// 2. `./soilsense.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Classifier model artifact settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Transient audio artifact settings
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8080"
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    pub path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: defaults::MODEL_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Text-to-speech endpoint base URL
    pub endpoint: String,
    /// Default language code for synthesis
    pub language: String,
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::SPEECH_ENDPOINT.to_string(),
            language: defaults::SPEECH_LANGUAGE.to_string(),
            timeout_secs: defaults::SPEECH_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Directory for transient audio artifacts
    pub dir: String,
    /// Maximum artifact age before startup pruning (hours)
    pub max_age_hours: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            dir: defaults::AUDIO_DIR.to_string(),
            max_age_hours: defaults::AUDIO_MAX_AGE_HOURS,
        }
    }
}

impl AppConfig {
    /// Load configuration using the standard search order:
    /// 1. `$SOILSENSE_CONFIG` environment variable
    /// 2. `./soilsense.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SOILSENSE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from SOILSENSE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from SOILSENSE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "SOILSENSE_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("soilsense.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./soilsense.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./soilsense.toml, using defaults");
                }
            }
        }

        info!("No soilsense.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot work at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "server.addr '{}' is not a valid socket address",
                self.server.addr
            )));
        }
        if self.model.path.trim().is_empty() {
            return Err(ConfigError::Invalid("model.path is empty".to_string()));
        }
        if self.speech.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("speech.endpoint is empty".to_string()));
        }
        if self.speech.language.trim().is_empty() {
            return Err(ConfigError::Invalid("speech.language is empty".to_string()));
        }
        if self.speech.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "speech.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.audio.dir.trim().is_empty() {
            return Err(ConfigError::Invalid("audio.dir is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            addr = "127.0.0.1:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.model.path, defaults::MODEL_PATH);
        assert_eq!(config.speech.language, defaults::SPEECH_LANGUAGE);
        config.validate().unwrap();
    }

    #[test]
    fn bad_addr_fails_validation() {
        let mut config = AppConfig::default();
        config.server.addr = "not-an-addr".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = AppConfig::default();
        config.speech.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = AppConfig::load_from_file(Path::new("/nonexistent/soilsense.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, _)));
    }
}
