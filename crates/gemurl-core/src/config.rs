use crate::url_model::CapsulePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "GEMURL_CONFIG";

/// Global configuration loaded from `~/.config/gemurl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemurlConfig {
    /// Hosting conventions for `gemurl capsule`.
    #[serde(default)]
    pub capsule: CapsulePolicy,
}

/// Config file location: `$GEMURL_CONFIG` if set, else the XDG config home.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gemurl")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration, falling back to built-in defaults when no file exists.
pub fn load() -> Result<GemurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(GemurlConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<GemurlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: GemurlConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
