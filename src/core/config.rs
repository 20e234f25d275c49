//! Application configuration.
//!
//! Settings live in a TOML file; the API key may instead come from the
//! `OPENAI_API_KEY` environment variable, which always wins.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::core::models::SenderFallback;
use crate::errors::SummarizerError;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Instruction placed in front of every chunk sent to the model.
    pub prompt: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    pub max_word_count: usize,
    /// IANA timezone name used to turn message timestamps into local dates.
    pub timezone: String,
    #[serde(default)]
    pub sender_fallback: SenderFallback,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
    pub summarizer: SummarizerConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl AppConfig {
    /// Load from `path` if given, otherwise from the first config file found in
    /// the standard locations. The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file is missing or malformed, or when any
    /// setting fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, SummarizerError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::find_config_file(),
        };
        let mut config = Self::load_from(&path)?;

        if let Ok(key) = env::var("OPENAI_API_KEY")
            && !key.trim().is_empty()
        {
            config.openai.api_key = Some(key);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file without environment overrides or validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, SummarizerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SummarizerError::ConfigError(format!("{}: {e}", path.display()))
        })?;
        Ok(content.parse()?)
    }

    fn find_config_file() -> PathBuf {
        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return local_config;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("chatsum").join(CONFIG_FILE_NAME);
            if home_config.exists() {
                return home_config;
            }
        }

        // Fall through to the local path so the read error names it.
        local_config
    }

    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting.
    pub fn validate(&self) -> Result<(), SummarizerError> {
        if self.openai.prompt.trim().is_empty() {
            return Err(SummarizerError::ConfigError(
                "openai.prompt must not be empty".to_string(),
            ));
        }
        if self.summarizer.max_word_count == 0 {
            return Err(SummarizerError::ConfigError(
                "summarizer.max_word_count must be a positive integer".to_string(),
            ));
        }
        if self.openai.request_timeout_secs == 0 {
            return Err(SummarizerError::ConfigError(
                "openai.request_timeout_secs must be a positive integer".to_string(),
            ));
        }
        self.timezone()?;
        self.api_key()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the configured name is not a known IANA zone.
    pub fn timezone(&self) -> Result<Tz, SummarizerError> {
        Tz::from_str(&self.summarizer.timezone).map_err(|e| {
            SummarizerError::ConfigError(format!(
                "summarizer.timezone '{}': {e}",
                self.summarizer.timezone
            ))
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if no API key is set in the file or environment.
    pub fn api_key(&self) -> Result<&str, SummarizerError> {
        self.openai
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SummarizerError::ConfigError(
                    "missing OpenAI API key (set openai.api_key or OPENAI_API_KEY)".to_string(),
                )
            })
    }
}

impl FromStr for AppConfig {
    type Err = SummarizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
