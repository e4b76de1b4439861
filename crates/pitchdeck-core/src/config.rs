use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Environment variables the client honours. Nothing outside this list is
/// read into the configuration.
pub const ENV_ALLOWLIST: &[&str] = &[ENV_API_URL, ENV_TIMEOUT_SECS];

/// Overrides `api_base_url`.
pub const ENV_API_URL: &str = "PITCHDECK_API_URL";
/// Overrides `request_timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "PITCHDECK_TIMEOUT_SECS";

/// Global configuration loaded from `~/.config/pitchdeck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchdeckConfig {
    /// Scheme and host of the analysis service (e.g. `http://localhost:8000`).
    pub api_base_url: String,
    /// Path of the analysis endpoint, joined onto `api_base_url`.
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    /// Seconds to wait for the TCP/TLS connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole upload plus analysis round trip.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_analyze_path() -> String {
    "/api/analyze".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl Default for PitchdeckConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            analyze_path: default_analyze_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl PitchdeckConfig {
    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> Result<Url> {
        let base = Url::parse(&self.api_base_url)
            .with_context(|| format!("invalid api_base_url {:?}", self.api_base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!("api_base_url must be http or https, got {}", base.scheme());
        }
        base.join(&self.analyze_path)
            .with_context(|| format!("invalid analyze_path {:?}", self.analyze_path))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply allow-listed environment overrides. `lookup` is called only with
    /// names from [`ENV_ALLOWLIST`].
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in ENV_ALLOWLIST {
            let Some(value) = lookup(name) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match *name {
                ENV_API_URL => self.api_base_url = value.to_string(),
                ENV_TIMEOUT_SECS => {
                    self.request_timeout_secs = value
                        .parse()
                        .with_context(|| format!("{} must be a whole number of seconds", name))?;
                }
                _ => unreachable!("name comes from ENV_ALLOWLIST"),
            }
            tracing::debug!("config override from {}", name);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pitchdeck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PitchdeckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PitchdeckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PitchdeckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load the config file and apply allow-listed environment overrides.
pub fn load_effective() -> Result<PitchdeckConfig> {
    let mut cfg = load_or_init()?;
    cfg.apply_env(|name| std::env::var(name).ok())?;
    Ok(cfg)
}
