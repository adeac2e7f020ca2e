use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{Catalog, Category};

/// Remote base URLs candidates are resolved against. Each must end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrls {
    pub furniture: String,
    /// Fallback tried after `furniture` for furniture categories.
    pub furniture_kit: String,
    pub vegetation: String,
    pub floor: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            furniture: "https://raw.githubusercontent.com/KenneyNL/Isometric-Assets/master/Sprites/Furniture/".to_string(),
            furniture_kit: "https://raw.githubusercontent.com/KenneyNL/Furniture-Kit/master/Models/Isometric/".to_string(),
            vegetation: "https://raw.githubusercontent.com/KenneyNL/Isometric-Assets/master/Sprites/Vegetation/".to_string(),
            floor: "https://raw.githubusercontent.com/KenneyNL/Isometric-Assets/master/Sprites/Floor/".to_string(),
        }
    }
}

/// `[server]` section: static file server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served at `/`.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            root: PathBuf::from("web"),
        }
    }
}

/// `[explorer]` section: GitHub contents explorer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Repository as `owner/name`.
    pub repo: String,
    /// Contents API root, without trailing slash.
    pub api_base: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            repo: "iwenzhou/kenney".to_string(),
            api_base: "https://api.github.com".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/isofetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory that receives one subdirectory per category.
    pub asset_root: PathBuf,
    /// Maximum number of files saved per category in one run.
    pub per_category_cap: usize,
    /// Pause before every GET, in milliseconds.
    pub request_delay_ms: u64,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    #[serde(default)]
    pub bases: BaseUrls,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
    /// Replaces the built-in catalog when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<Category>>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets/images/furniture"),
            per_category_cap: 30,
            request_delay_ms: 100,
            user_agent: "Mozilla/5.0".to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            bases: BaseUrls::default(),
            server: ServerConfig::default(),
            explorer: ExplorerConfig::default(),
            catalog: None,
        }
    }
}

impl FetchConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured catalog, or the built-in one when none is set.
    pub fn catalog(&self) -> Catalog {
        match &self.catalog {
            Some(categories) => Catalog::new(categories.clone()),
            None => Catalog::builtin(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("isofetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
