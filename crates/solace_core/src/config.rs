use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_LOG_CAPACITY;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub engine: EngineConfig,
    pub gateway: GatewayConfig,
}

impl SolaceConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SolaceConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist or is invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SOLACE_LOG_CAPACITY") {
            if let Ok(n) = v.parse() {
                self.engine.interaction_log_capacity = n;
            }
        }
        if let Ok(v) = std::env::var("SOLACE_RNG_SEED") {
            if let Ok(n) = v.parse() {
                self.engine.rng_seed = Some(n);
            }
        }
        if let Ok(v) = std::env::var("SOLACE_CONTENT_PATH") {
            self.engine.content_path = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("SOLACE_GATEWAY_HOST") {
            self.gateway.host = v;
        }
        if let Ok(v) = std::env::var("SOLACE_GATEWAY_PORT") {
            if let Ok(n) = v.parse() {
                self.gateway.port = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum interaction records kept per session (oldest evicted first).
    pub interaction_log_capacity: usize,
    /// Fixed seed for response and video selection. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// Optional TOML file replacing the built-in knowledge base / video library.
    pub content_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            interaction_log_capacity: DEFAULT_LOG_CAPACITY,
            rng_seed: None,
            content_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
