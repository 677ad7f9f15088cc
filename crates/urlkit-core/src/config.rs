use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for a single HEAD probe.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

/// HEAD probe parameters (`[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Total time allowed for one probe, in seconds.
    pub timeout_secs: u64,
    /// Optional separate connect timeout; when unset only `timeout_secs` applies.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Follow 3xx redirects before reading the response head.
    pub follow_redirects: bool,
    /// Redirect hop limit when `follow_redirects` is on.
    pub max_redirects: u32,
    /// Optional `User-Agent` header value.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            connect_timeout_secs: None,
            follow_redirects: true,
            max_redirects: 10,
            user_agent: None,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlkitConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
