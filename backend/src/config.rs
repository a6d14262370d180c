//! Environment-driven settings for the catalog server.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::Context;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "8090";
pub const DEFAULT_SEED_PATH: &str = "backend/seed/programs.json";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub port: u16,
    pub seed_path: PathBuf,
}

impl BackendConfig {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load("CATALOG_PORT", DEFAULT_PORT)?,
            seed_path: try_load("CATALOG_SEED_PATH", DEFAULT_SEED_PATH)?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow::anyhow!("{e}")
        })
        .with_context(|| format!("environment variable {key} is misconfigured"))
}
