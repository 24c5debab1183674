use crate::{action::MenuAction, cancel::CancelToken, loader::Loader};
use std::{sync::Arc, time::Duration};

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_LIST_TITLE: &str = "Entries";
pub const DEFAULT_ACTIONS_TITLE: &str = "Actions";
pub const DEFAULT_PANEL_TITLE: &str = "Information";
pub const DEFAULT_PANEL_PLACEHOLDER: &str = "Select an action to view logs.";

/// Caller-provided configuration for one menu session.
///
/// Fields are public so callers can use struct update syntax over
/// [`MenuConfig::new`].
pub struct MenuConfig<T, P> {
    pub loader: Arc<dyn Loader<T>>,
    /// Configured once; immutable for the session
    pub actions: Vec<MenuAction<T, P>>,
    /// Bound on each loader call. Zero means [`DEFAULT_LOAD_TIMEOUT`].
    pub load_timeout: Duration,
    pub list_title: String,
    pub list_help: Vec<String>,
    pub actions_title: String,
    pub actions_help: Vec<String>,
    pub panel_placeholder: String,
    pub disable_panel: bool,
    /// Parent of every loader and action token. Cancelling it ends the session.
    pub session: CancelToken,
}

impl<T, P> MenuConfig<T, P> {
    pub fn new(loader: Arc<dyn Loader<T>>) -> Self {
        Self {
            loader,
            actions: Vec::new(),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            list_title: DEFAULT_LIST_TITLE.to_string(),
            list_help: Vec::new(),
            actions_title: DEFAULT_ACTIONS_TITLE.to_string(),
            actions_help: Vec::new(),
            panel_placeholder: String::new(),
            disable_panel: false,
            session: CancelToken::new(),
        }
    }

    pub fn effective_load_timeout(&self) -> Duration {
        if self.load_timeout.is_zero() {
            DEFAULT_LOAD_TIMEOUT
        } else {
            self.load_timeout
        }
    }

    pub fn list_title(&self) -> &str {
        non_empty_or(&self.list_title, DEFAULT_LIST_TITLE)
    }

    pub fn actions_title(&self) -> &str {
        non_empty_or(&self.actions_title, DEFAULT_ACTIONS_TITLE)
    }

    pub fn panel_placeholder(&self) -> &str {
        non_empty_or(&self.panel_placeholder, DEFAULT_PANEL_PLACEHOLDER)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
