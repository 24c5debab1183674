pub mod theme;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub use theme::{NamedColor, ThemeColor, ThemeConfig};

pub const APP_NAME: &str = "codex-auth";
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 20;

fn config_dir() -> Option<PathBuf> {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config_home.is_empty()
        {
            return Some(PathBuf::from(xdg_config_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".config").join(APP_NAME))
    }
    #[cfg(windows)]
    {
        dirs::config_dir().map(|dir| dir.join(APP_NAME))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Folder holding the auth profiles. Supports `~` for the home directory.
    /// The `CODEX_AUTHS_PATH` environment variable and `--auths-path` take precedence.
    /// ```toml
    /// auths_path = "~/codex/auths"
    /// ```
    #[serde(default)]
    pub auths_path: Option<String>,

    /// Seconds to wait for the profile list before giving up.
    #[serde(default = "Config::default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Menu layout options.
    #[serde(default)]
    pub menu: MenuSection,

    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MenuSection {
    /// Hide the side panel that shows action output.
    #[serde(default = "MenuSection::default_disable_panel")]
    pub disable_panel: bool,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            disable_panel: Self::default_disable_panel(),
        }
    }
}

impl MenuSection {
    fn default_disable_panel() -> bool {
        true
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auths_path: None,
            load_timeout_secs: Self::default_load_timeout_secs(),
            menu: MenuSection::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    fn default_load_timeout_secs() -> u64 {
        DEFAULT_LOAD_TIMEOUT_SECS
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    pub fn resolved_auths_path(&self) -> Option<PathBuf> {
        self.auths_path.as_deref().and_then(expand_tilde)
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// `None` when the home directory is needed but unknown.
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    match path.strip_prefix('~') {
        Some("") => dirs::home_dir(),
        Some(rest) if rest.starts_with('/') => {
            dirs::home_dir().map(|home| home.join(rest.trim_start_matches('/')))
        }
        _ => Some(PathBuf::from(path)),
    }
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

/// Load the config file. An explicit override must exist; the default
/// location is optional and falls back to built-in defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let config_file = match config_override {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => match config_file() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };
    let contents = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    load_config_from_str(&contents)
        .with_context(|| format!("Invalid config {}", config_file.display()))
}
