use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Mentor configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MentorConfig {
    /// Forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,

    /// Order-search settings.
    #[serde(default)]
    pub selection: SelectionToml,
}

impl MentorConfig {
    /// Loads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            window: default_window(),
            method: default_method(),
            threshold: default_threshold(),
        }
    }
}

fn default_window() -> usize {
    5
}
fn default_method() -> String {
    "t_distribution".to_string()
}
fn default_threshold() -> f64 {
    0.9
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionToml {
    #[serde(default = "default_max_p")]
    pub max_p: usize,
    #[serde(default = "default_max_d")]
    pub max_d: usize,
    #[serde(default = "default_max_q")]
    pub max_q: usize,
}

impl Default for SelectionToml {
    fn default() -> Self {
        Self {
            max_p: default_max_p(),
            max_d: default_max_d(),
            max_q: default_max_q(),
        }
    }
}

fn default_max_p() -> usize {
    5
}
fn default_max_d() -> usize {
    2
}
fn default_max_q() -> usize {
    5
}
