use anyhow::{bail, Context, Result};
use std::{env, path::PathBuf, time::Duration};

use crate::model::anthropic::DEFAULT_BASE_URL;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let Some(api_key) = get("ANTHROPIC_API_KEY") else {
            bail!("ANTHROPIC_API_KEY must be set");
        };

        let timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("UPSTREAM_TIMEOUT_SECS must be a number of seconds, got {:?}", raw)
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            upstream: UpstreamConfig {
                api_key,
                base_url: get("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
