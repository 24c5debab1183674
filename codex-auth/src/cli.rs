use crate::{
    auth::{self, UsageTracker},
    output::Printer,
    picker,
};
use chrono::{SecondsFormat, Utc};
use cxmenu_core::{CancelToken, Config, config::expand_tilde, outcome::NOT_EXECUTED};
use cxmenu_tui::Theme;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::Write,
    path::{Path, PathBuf},
};

pub const AUTHS_PATH_ENV: &str = "CODEX_AUTHS_PATH";

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: u8,
}

impl CliError {
    /// Bad input or nothing selected
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    /// Configuration or environment problems
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::user(format!("{value:#}"))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct ProfileOutput {
    name: String,
    path: PathBuf,
    size: u64,
    last_used: Option<String>,
}

/// Pick the auths folder: `--auths-path`, then `CODEX_AUTHS_PATH`, then the config file.
pub fn resolve_auths_root(flag: Option<&Path>, config: &Config) -> CliResult<PathBuf> {
    let env_path = std::env::var(AUTHS_PATH_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .and_then(|value| expand_tilde(&value));
    let path = flag
        .map(Path::to_path_buf)
        .or(env_path)
        .or_else(|| config.resolved_auths_path())
        .ok_or_else(|| {
            CliError::user(format!(
                "auths path is not set; use --auths-path, {AUTHS_PATH_ENV}, or auths_path in the config file"
            ))
        })?;
    auth::validate_root(&path)
        .map_err(|e| CliError::user(format!("Invalid auth directory: {e:#}")))
}

pub fn cmd_list(root: &Path, json: bool) -> CliResult<()> {
    let tracker = UsageTracker::load(root)?;
    let mut files = auth::list_files(root)?;
    auth::sort_by_last_used(&mut files, &tracker);

    let output: Vec<ProfileOutput> = files
        .into_iter()
        .map(|file| ProfileOutput {
            last_used: tracker
                .last_used(&file.name)
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            name: file.name,
            path: file.path,
            size: file.size,
        })
        .collect();

    if json {
        print_json(&output)?;
    } else {
        print!("{}", format_profile_table(&output, &tracker));
    }
    Ok(())
}

/// Install the profile called `name` without opening the menu.
pub fn cmd_use(root: &Path, name: &str, printer: Printer) -> CliResult<()> {
    let file = auth::list_files(root)?
        .into_iter()
        .find(|file| file.name == name)
        .ok_or_else(|| {
            CliError::user(format!("No auth file named '{name}' in {}", root.display()))
        })?;

    let mut tracker = UsageTracker::load(root)?;
    let result = auth::install(&file.path, &auth::default_destination()?)?;
    if let Err(e) = tracker.touch(&file.name, Utc::now()) {
        log::warn!("failed to record use of {}: {e:#}", file.name);
    }
    printer.print(&env_dump(root), &result)?;
    Ok(())
}

/// Run the interactive picker and print what it installed.
pub fn cmd_pick(
    config: &Config,
    root: PathBuf,
    printer: Printer,
    session: CancelToken,
) -> CliResult<()> {
    let env = env_dump(&root);
    let menu = picker::menu_config(config, root, auth::default_destination()?, session)?;
    let theme = Theme::from_config(&config.theme);

    let outcome = cxmenu_tui::start(&menu, &theme)
        .map_err(|e| CliError::system(format!("Menu failed: {e:#}")))?;
    if !outcome.success {
        let message = if outcome.message == NOT_EXECUTED {
            "Operation cancelled before copying an auth file".to_string()
        } else {
            outcome.message
        };
        return Err(CliError::user(message));
    }
    let result = outcome
        .payload
        .ok_or_else(|| CliError::user("Copy finished without a result"))?;
    if let Some(entry) = &outcome.entry {
        log::info!("picked {}", entry.title);
    }
    printer.print(&env, &result)?;
    Ok(())
}

fn env_dump(root: &Path) -> BTreeMap<&'static str, String> {
    BTreeMap::from([("auths_path", root.display().to_string())])
}

fn format_profile_table(profiles: &[ProfileOutput], tracker: &UsageTracker) -> String {
    let name_header = "profile";
    let used_header = "last used";
    let name_width = profiles
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(name_header.len())
        .max(name_header.len());

    let mut out = String::new();
    let _ = writeln!(out, "{name_header:<name_width$}  {used_header}");
    for profile in profiles {
        let used = auth::describe_last_used(tracker.last_used(&profile.name));
        let _ = writeln!(out, "{:<name_width$}  {used}", profile.name);
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!(
        "{}",
        serde_json::to_string(value).map_err(|e| CliError::system(e.to_string()))?
    );
    Ok(())
}

pub fn print_error(error: &CliError, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": error.message() });
        eprintln!("{payload}");
    } else {
        eprintln!("{}", error.message());
    }
}
