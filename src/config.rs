//! Configuration loading from TOML with environment variable overrides.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. Every
//! section is optional; a missing section falls back to the built-in
//! defaults (semiconductors preset, built-in miner catalog, port 3000).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::mining::MinerCatalog;
use crate::types::{DeckError, HardwareProfile};
use crate::valuation::presets::PresetId;

/// Environment variable that overrides `dashboard.port`.
pub const PORT_ENV: &str = "VALUEDECK_PORT";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub mining: MiningConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "valuedeck".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ValuationConfig {
    /// Preset loaded at startup. Defaults to "semiconductors".
    #[serde(default)]
    pub default_preset: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MiningConfig {
    /// Profile selected at startup. Unknown ids fall back to the first entry.
    #[serde(default)]
    pub default_profile: Option<String>,
    /// Replaces the built-in catalog when present.
    #[serde(default)]
    pub catalog: Option<Vec<HardwareProfile>>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// The startup preset, defaulting to semiconductors.
    pub fn default_preset(&self) -> Result<PresetId, DeckError> {
        match self.valuation.default_preset.as_deref() {
            Some(id) => id
                .parse()
                .map_err(|_| DeckError::Config(format!("unknown valuation.default_preset: {id}"))),
            None => Ok(PresetId::default()),
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn miner_catalog(&self) -> Result<MinerCatalog, DeckError> {
        match &self.mining.catalog {
            Some(profiles) => MinerCatalog::new(profiles.clone())
                .map_err(|e| DeckError::Config(format!("mining.catalog: {e}"))),
            None => Ok(MinerCatalog::default()),
        }
    }

    /// Dashboard port, honouring `VALUEDECK_PORT` when it parses.
    pub fn port(&self) -> u16 {
        std::env::var(PORT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.dashboard.port)
    }
}
