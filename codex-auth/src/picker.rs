use crate::auth::{self, AuthFile, CopyResult, UsageTracker};
use anyhow::{Result, bail};
use chrono::Utc;
use cxmenu_core::{CancelToken, Config, Entry, Loader, MenuAction, MenuConfig, PanelUpdate};
use std::{
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

pub const COPY_PANEL_TITLE: &str = "Copy auth";

/// Lists the profiles in one folder, least recently used first.
pub struct AuthLoader {
    root: PathBuf,
    tracker: Arc<Mutex<UsageTracker>>,
}

impl AuthLoader {
    pub fn new(root: PathBuf, tracker: Arc<Mutex<UsageTracker>>) -> Self {
        Self { root, tracker }
    }
}

impl Loader<AuthFile> for AuthLoader {
    fn load(&self, ctx: &CancelToken) -> Result<Vec<Entry<AuthFile>>> {
        let mut files = auth::list_files(&self.root)?;
        if files.is_empty() {
            bail!("{} contains no files", self.root.display());
        }
        if ctx.is_cancelled() {
            bail!("cancelled");
        }
        let tracker = self.tracker.lock().unwrap_or_else(PoisonError::into_inner);
        auth::sort_by_last_used(&mut files, &tracker);
        Ok(files
            .into_iter()
            .map(|file| {
                let description = auth::describe_last_used(tracker.last_used(&file.name));
                Entry::new(file.name.clone(), file).with_description(description)
            })
            .collect())
    }
}

/// "Use auth file": copy the profile into place, record the use, and end the session.
pub fn use_auth_action(
    tracker: Arc<Mutex<UsageTracker>>,
    destination: PathBuf,
) -> MenuAction<AuthFile, CopyResult> {
    MenuAction::new("Use auth file", move |entry: &Entry<AuthFile>, ctx: &CancelToken| {
        if ctx.is_cancelled() {
            return PanelUpdate::failed(COPY_PANEL_TITLE, "", None, "cancelled");
        }
        let file = &entry.payload;
        match auth::install(&file.path, &destination) {
            Ok(result) => {
                let mut tracker = tracker.lock().unwrap_or_else(PoisonError::into_inner);
                if let Err(e) = tracker.touch(&file.name, Utc::now()) {
                    log::warn!("failed to record use of {}: {e:#}", file.name);
                }
                let content = format!("Copied {} to {}", file.name, result.destination.display());
                PanelUpdate::ready(COPY_PANEL_TITLE, content, result).then_quit()
            }
            Err(e) => {
                log::warn!("copy of {} failed: {e:#}", file.name);
                PanelUpdate::failed(COPY_PANEL_TITLE, format!("{e:#}"), None, e)
            }
        }
    })
}

/// Menu configuration for picking a profile from `root`.
pub fn menu_config(
    config: &Config,
    root: PathBuf,
    destination: PathBuf,
    session: CancelToken,
) -> Result<MenuConfig<AuthFile, CopyResult>> {
    let tracker = Arc::new(Mutex::new(UsageTracker::load(&root)?));
    let loader = AuthLoader::new(root, Arc::clone(&tracker));

    let mut menu = MenuConfig::new(Arc::new(loader));
    menu.actions = vec![use_auth_action(tracker, destination)];
    menu.load_timeout = config.load_timeout();
    menu.list_title = "Codex auth profiles".to_string();
    menu.list_help = vec![
        "Use ↑/↓ or digits + Enter to highlight a profile.".to_string(),
        "Press R to rescan the folder, Ctrl+C to abort.".to_string(),
    ];
    menu.actions_title = "Auth actions".to_string();
    menu.actions_help =
        vec!["Enter copies the highlighted profile to ~/.codex/auth.json.".to_string()];
    menu.panel_placeholder = "Selections show copy results here.".to_string();
    menu.disable_panel = config.menu.disable_panel;
    menu.session = session;
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn setup() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("auths");
        fs::create_dir(&root).unwrap();
        for name in ["work.json", "home.json", "spare.json"] {
            fs::write(root.join(name), format!("{{\"name\":\"{name}\"}}")).unwrap();
        }
        (tmp, root)
    }

    fn tracker_for(root: &std::path::Path) -> Arc<Mutex<UsageTracker>> {
        Arc::new(Mutex::new(UsageTracker::load(root).unwrap()))
    }

    #[test]
    fn loader_orders_never_used_first() {
        let (_tmp, root) = setup();
        let tracker = tracker_for(&root);
        tracker
            .lock()
            .unwrap()
            .touch("home.json", Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
            .unwrap();

        let loader = AuthLoader::new(root, tracker);
        let entries = loader.load(&CancelToken::new()).unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["spare.json", "work.json", "home.json"]);
        assert_eq!(entries[0].description, "never used");
        assert!(entries[2].description.starts_with("Last used "));
    }

    #[test]
    fn loader_fails_on_empty_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = AuthLoader::new(tmp.path().to_path_buf(), tracker_for(tmp.path()));
        let err = loader.load(&CancelToken::new()).unwrap_err();
        assert!(err.to_string().contains("contains no files"));
    }

    #[test]
    fn action_installs_touches_and_quits() {
        let (tmp, root) = setup();
        let tracker = tracker_for(&root);
        let destination = tmp.path().join("home").join(".codex").join("auth.json");
        let action = use_auth_action(Arc::clone(&tracker), destination.clone());

        let file = AuthFile {
            name: "work.json".to_string(),
            path: root.join("work.json"),
            size: 0,
        };
        let update = action.run(&Entry::new("work.json", file), &CancelToken::new());

        assert!(update.is_success());
        assert!(update.then_quit);
        assert_eq!(update.title, COPY_PANEL_TITLE);
        assert!(update.content.starts_with("Copied work.json to "));
        let result = update.payload.unwrap();
        assert_eq!(result.destination, destination);
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "{\"name\":\"work.json\"}"
        );
        assert!(tracker.lock().unwrap().last_used("work.json").is_some());
        // persisted for the next run
        assert!(
            UsageTracker::load(&root)
                .unwrap()
                .last_used("work.json")
                .is_some()
        );
    }

    #[test]
    fn action_reports_copy_failure() {
        let (tmp, root) = setup();
        let tracker = tracker_for(&root);
        let action = use_auth_action(Arc::clone(&tracker), tmp.path().join("auth.json"));

        let file = AuthFile {
            name: "gone.json".to_string(),
            path: root.join("gone.json"),
            size: 0,
        };
        let update = action.run(&Entry::new("gone.json", file), &CancelToken::new());

        assert!(!update.is_success());
        assert!(!update.then_quit);
        assert!(update.payload.is_none());
        assert!(update.status_message().starts_with("Copy auth failed: Cannot read"));
        assert_eq!(tracker.lock().unwrap().last_used("gone.json"), None);
    }

    #[test]
    fn menu_config_uses_file_settings() {
        let (tmp, root) = setup();
        let mut config = Config::default();
        config.load_timeout_secs = 3;
        config.menu.disable_panel = false;

        let menu = menu_config(&config, root, tmp.path().join("auth.json"), CancelToken::new())
            .unwrap();
        assert_eq!(menu.load_timeout, std::time::Duration::from_secs(3));
        assert!(!menu.disable_panel);
        assert_eq!(menu.actions.len(), 1);
        assert_eq!(menu.actions[0].label, "Use auth file");
        assert_eq!(menu.list_title(), "Codex auth profiles");
    }
}
