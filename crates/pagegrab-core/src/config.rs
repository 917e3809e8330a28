use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default User-Agent sent with every request.
pub fn default_user_agent() -> String {
    format!("pagegrab/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirections() -> u32 {
    10
}

/// Global configuration loaded from `~/.config/pagegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrabConfig {
    /// User-Agent header for the GET request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum number of redirects followed before the fetch fails.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional connect timeout in seconds (None = wait as long as libcurl does).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Directory results are written to when `--output-dir` is not given (None = cwd).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_redirections: default_max_redirections(),
            connect_timeout_secs: None,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
