//! CLI configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use qrsign_identity::{FetchConfig, ProfileSource};

/// Full configuration for the `qrsign` tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QrSignConfig {
    /// HTTP fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Named-profile settings.
    #[serde(default)]
    pub profile: ProfileSource,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

fn default_log_level() -> String {
    "warn".into()
}
fn default_log_format() -> LogFormat {
    LogFormat::Text
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl QrSignConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate config text.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: QrSignConfig = toml::from_str(contents)?;
        config.profile.validate()?;
        Ok(config)
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
