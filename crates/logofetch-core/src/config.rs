use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// User agent sent by default. Some sites refuse obvious bots, so this
/// masquerades as a common desktop browser.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Backoff increment in milliseconds; the wait after attempt N is N
    /// times this.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 200,
        }
    }
}

/// Global configuration loaded from `~/.config/logofetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogofetchConfig {
    /// User agent sent on every request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Snapshot availability endpoint used for archive fallback.
    pub archive_endpoint: String,
    /// Optional cap on candidates tried per page. Unset, every extracted
    /// candidate is tried.
    #[serde(default)]
    pub max_candidates: Option<usize>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for LogofetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 20,
            archive_endpoint: "https://archive.org/wayback/available".to_string(),
            max_candidates: None,
            retry: None,
        }
    }
}

impl LogofetchConfig {
    /// Retry policy derived from the optional `[retry]` section.
    pub fn retry_policy(&self) -> RetryPolicy {
        let retry = self.retry.clone().unwrap_or_default();
        RetryPolicy {
            max_attempts: retry.max_attempts,
            base_delay: Duration::from_millis(retry.base_delay_ms),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logofetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LogofetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LogofetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LogofetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
