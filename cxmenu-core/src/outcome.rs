use crate::entry::Entry;

pub const NO_OUTPUT: &str = "No output";
pub const NOT_EXECUTED: &str = "no action executed";

/// What an action reports back to the side panel when it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUpdate<P> {
    pub title: String,
    pub content: String,
    pub payload: Option<P>,
    pub error: Option<String>,
    /// Ask the engine to end the session once this update has been applied
    pub then_quit: bool,
}

impl<P> PanelUpdate<P> {
    pub fn ready(title: impl Into<String>, content: impl Into<String>, payload: P) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            payload: Some(payload),
            error: None,
            then_quit: false,
        }
    }

    pub fn failed(
        title: impl Into<String>,
        content: impl Into<String>,
        payload: Option<P>,
        error: impl std::fmt::Display,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            payload,
            error: Some(error.to_string()),
            then_quit: false,
        }
    }

    #[must_use]
    pub fn then_quit(mut self) -> Self {
        self.then_quit = true;
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Status line for this update: "<title> ready" or "<title> failed: <err>"
    pub fn status_message(&self) -> String {
        match &self.error {
            Some(error) => format!("{} failed: {error}", self.title),
            None => format!("{} ready", self.title),
        }
    }

    /// Panel body, trimmed, or a fixed placeholder when there is nothing to show
    pub fn panel_text(&self) -> String {
        let trimmed = self.content.trim();
        if trimmed.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Final result handed back to the caller when the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, P> {
    pub entry: Option<Entry<T>>,
    pub payload: Option<P>,
    pub message: String,
    pub success: bool,
}

impl<T, P> Outcome<T, P> {
    /// Returned when the session ends before any action completed
    pub fn not_executed() -> Self {
        Self {
            entry: None,
            payload: None,
            message: NOT_EXECUTED.to_string(),
            success: false,
        }
    }
}
