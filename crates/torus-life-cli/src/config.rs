//! CLI configuration management.
//!
//! Values are resolved with the following precedence (highest first):
//! command-line flags, `TORUS_LIFE_*` environment variables (a `.env` file
//! is honored), the config file, built-in defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use torus_life_core::EngineConfig;

/// Settings for a playback session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid width in cells.
    pub width: usize,

    /// Grid height in cells.
    pub height: usize,

    /// Generation budget.
    pub generations: u64,

    /// Pause between rendered generations, in milliseconds.
    pub delay_ms: u64,

    /// Birth/survival rule, e.g. `23.3`.
    pub rule: String,
}

impl Default for Config {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            width: engine.width,
            height: engine.height,
            generations: engine.generation_budget,
            delay_ms: 100,
            rule: engine.rule,
        }
    }
}

impl Config {
    /// Load configuration from a config file and environment variables.
    ///
    /// An explicit `path` must exist; the per-user config file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_file_path() {
                Some(default_path) if default_path.exists() => Self::from_file(&default_path)?,
                _ => Self::default(),
            },
        };

        if let Some(width) = env_var("TORUS_LIFE_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = env_var("TORUS_LIFE_HEIGHT")? {
            config.height = height;
        }
        if let Some(generations) = env_var("TORUS_LIFE_GENERATIONS")? {
            config.generations = generations;
        }
        if let Some(delay_ms) = env_var("TORUS_LIFE_DELAY_MS")? {
            config.delay_ms = delay_ms;
        }
        if let Ok(rule) = std::env::var("TORUS_LIFE_RULE") {
            config.rule = rule;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Get the path to the per-user config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "torus-life", "torus-life")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.width, self.height, self.generations).with_rule(self.rule.clone())
    }
}

fn env_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Invalid value for {key}: {value:?}")),
        Err(_) => Ok(None),
    }
}
