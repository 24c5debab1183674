use anyhow::Context;
use std::path::PathBuf;

const APP_NAME: &str = "codex-auth";
const LOG_FILE_NAME: &str = "codex-auth.log";

pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

pub fn cache_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return Some(PathBuf::from(xdg_cache_home).join(APP_NAME));
        }
        dirs::home_dir().map(|home| home.join(".cache").join(APP_NAME))
    }
    #[cfg(windows)]
    {
        Some(
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_NAME),
        )
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Route the `log` macros to a rolling file. The terminal belongs to the
/// menu, so nothing is logged to stdout or stderr.
pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file = default_log_file().context("Unable to find home directory for the log file")?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("codex-auth logging initialised (level={level})");
    Ok(())
}
