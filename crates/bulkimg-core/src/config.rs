use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser-identifying User-Agent; some image hosts reject non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default extensions used when a URL path carries no suffix (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Fallback for `image_<n>` entries.
    pub indexed_default_ext: String,
    /// Fallback for `<brand>-<model>` entries.
    pub brand_model_default_ext: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            indexed_default_ext: ".jpg".to_string(),
            brand_model_default_ext: ".png".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/bulkimg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
    /// Per-request timeout in seconds (connect + transfer). The batch itself has none.
    pub timeout_secs: u64,
    /// User-Agent header sent with every GET.
    pub user_agent: String,
    /// Follow HTTP redirects (up to 10 hops).
    pub follow_redirects: bool,
    pub naming: NamingConfig,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: true,
            naming: NamingConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bulkimg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BulkConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<BulkConfig> {
    if !path.exists() {
        let default_cfg = BulkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: BulkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
