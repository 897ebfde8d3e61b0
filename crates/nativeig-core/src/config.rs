use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::Timeouts;
use crate::messages::StatusMessages;

/// Public Native IG deployment.
pub const DEFAULT_BASE_URL: &str = "https://nativeig.vercel.app";

/// Global configuration loaded from `~/.config/nativeig/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NigConfig {
    /// Base URL of the video-info API; `/api/video` is appended.
    pub base_url: String,
    /// Total time allowed for one API request, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// Program that opens a URL in the default browser.
    pub open_command: String,
    /// Where downloads go when `--output-dir` is not given (None = current directory).
    pub download_dir: Option<PathBuf>,
    /// Messages shown for failed requests.
    pub messages: StatusMessages,
}

impl Default for NigConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 15,
            open_command: "xdg-open".to_string(),
            download_dir: None,
            messages: StatusMessages::default(),
        }
    }
}

impl NigConfig {
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_timeout_secs.max(1)),
            total: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nativeig")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NigConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<NigConfig> {
    if !path.exists() {
        let default_cfg = NigConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: NigConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
