//! Configuration loading from steady.toml
//!
//! Configuration can be specified in a `steady.toml` file, discovered by
//! walking up from the current directory. CLI flags override it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Steadybench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SteadyConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Export defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default export format: "csv", "json" or "md"
    #[serde(default)]
    pub format: Option<String>,
    /// Default export destination
    #[serde(default)]
    pub path: Option<String>,
}

/// Runner behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Render a per-benchmark progress bar
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            progress: default_progress(),
        }
    }
}

fn default_progress() -> bool {
    true
}

impl SteadyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("steady.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
