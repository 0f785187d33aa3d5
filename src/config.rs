use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::journal::analytics::AnalyticsConfig;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct JotterConfig {
    pub log: LogConfig,
    pub data: DataConfig,
    pub insights: InsightsConfig,
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

/// Where seed data comes from. Unset paths fall back to the bundled fixtures.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DataConfig {
    pub entries_path: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InsightsConfig {
    pub top_tags: usize,
    pub latest_limit: usize,
    pub trend_window: usize,
    pub gallery_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub max_tags: usize,
    pub max_entities: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        let analytics = AnalyticsConfig::default();
        Self {
            top_tags: analytics.top_tags,
            latest_limit: analytics.latest_limit,
            trend_window: analytics.trend_window,
            gallery_limit: crate::journal::store::DEFAULT_GALLERY_LIMIT,
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_tags: crate::journal::suggest::DEFAULT_MAX_TAG_SUGGESTIONS,
            max_entities: crate::journal::suggest::DEFAULT_MAX_ENTITIES,
        }
    }
}

impl InsightsConfig {
    pub fn analytics(&self) -> AnalyticsConfig {
        AnalyticsConfig {
            top_tags: self.top_tags,
            latest_limit: self.latest_limit,
            trend_window: self.trend_window,
        }
    }
}

/// Returns `~/.jotter/`, or `./.jotter/` when no home directory is known.
pub fn default_jotter_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jotter")
}

/// Returns the default config file path: `~/.jotter/config.toml`
pub fn default_config_path() -> PathBuf {
    default_jotter_dir().join("config.toml")
}

impl JotterConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            JotterConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (JOTTER_ENTRIES, JOTTER_PROFILE, JOTTER_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOTTER_ENTRIES") {
            self.data.entries_path = Some(val);
        }
        if let Ok(val) = std::env::var("JOTTER_PROFILE") {
            self.data.profile_path = Some(val);
        }
        if let Ok(val) = std::env::var("JOTTER_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    pub fn resolved_entries_path(&self) -> Option<PathBuf> {
        self.data.entries_path.as_deref().map(expand_tilde)
    }

    pub fn resolved_profile_path(&self) -> Option<PathBuf> {
        self.data.profile_path.as_deref().map(expand_tilde)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
