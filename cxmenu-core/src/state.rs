use crate::{
    command::Command,
    entry::{Entry, renumber},
    event::MenuEvent,
    input::Input,
    outcome::{Outcome, PanelUpdate},
    session::DEFAULT_PANEL_TITLE,
    viewport,
};

/// Longest numeric jump target the user can type
pub const MAX_JUMP_DIGITS: usize = 4;

pub const STATUS_LOADING: &str = "Loading entries...";
pub const STATUS_REFRESHING: &str = "Refreshing entries...";
pub const STATUS_INVALID_SELECTION: &str = "Invalid selection";

/// Which screen the menu is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Actions,
}

/// All mutable session state. Only the engine loop touches it, one event at
/// a time, so nothing in here needs locking.
#[derive(Debug)]
pub struct MenuState<T, P> {
    pub entries: Vec<Entry<T>>,
    pub view: View,
    pub list_cursor: usize,
    pub list_offset: usize,
    pub action_cursor: usize,
    /// Pending numeric jump target, digits only
    pub number_input: String,
    pub loading: bool,
    pub status: String,
    pub panel_title: String,
    pub panel_text: String,
    /// Display height in rows, `None` until the first resize
    pub height: Option<u16>,
    action_count: usize,
    last_action: Option<Outcome<T, P>>,
}

impl<T: Clone, P> MenuState<T, P> {
    pub fn new(action_count: usize, panel_placeholder: &str) -> Self {
        Self {
            entries: Vec::new(),
            view: View::List,
            list_cursor: 0,
            list_offset: 0,
            action_cursor: 0,
            number_input: String::new(),
            loading: true,
            status: STATUS_LOADING.to_string(),
            panel_title: DEFAULT_PANEL_TITLE.to_string(),
            panel_text: panel_placeholder.to_string(),
            height: None,
            action_count,
            last_action: None,
        }
    }

    /// The command to issue when the session starts
    pub fn init(&self) -> Command<T> {
        Command::LoadEntries
    }

    /// Rows of the list that fit on screen
    pub fn window_size(&self) -> usize {
        viewport::window_size(self.height)
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    pub fn current_entry(&self) -> Option<&Entry<T>> {
        self.entries.get(self.list_cursor)
    }

    pub fn last_action(&self) -> Option<&Outcome<T, P>> {
        self.last_action.as_ref()
    }

    /// Apply one event and return the side effect it asks for, if any.
    pub fn update(&mut self, event: MenuEvent<T, P>) -> Option<Command<T>> {
        match event {
            MenuEvent::Input(input) => self.handle_input(input),
            MenuEvent::Resize { height } => {
                self.height = Some(height);
                self.ensure_list_cursor_visible();
                None
            }
            MenuEvent::EntriesLoaded(Ok(entries)) => {
                self.apply_entries(entries);
                None
            }
            MenuEvent::EntriesLoaded(Err(error)) => {
                self.loading = false;
                self.status = format!("Failed to load entries: {error}");
                log::warn!("entry load failed: {error}");
                None
            }
            MenuEvent::PanelReady { entry, update } => {
                self.apply_panel_update(entry, update);
                None
            }
            MenuEvent::QuitRequested => Some(Command::Quit),
        }
    }

    /// Consume the session and produce what the caller gets back
    pub fn into_outcome(self) -> Outcome<T, P> {
        self.last_action.unwrap_or_else(Outcome::not_executed)
    }

    fn handle_input(&mut self, input: Input) -> Option<Command<T>> {
        if input == Input::Quit {
            return Some(Command::Quit);
        }
        match self.view {
            View::List => self.handle_list_input(input),
            View::Actions => self.handle_actions_input(input),
        }
    }

    fn handle_list_input(&mut self, input: Input) -> Option<Command<T>> {
        match input {
            Input::Back => self.number_input.clear(),
            Input::MoveUp => self.move_list_cursor(-1),
            Input::MoveDown => self.move_list_cursor(1),
            Input::Digit(digit) => self.push_digit(digit),
            Input::Confirm => self.confirm_list(),
            Input::Refresh => {
                self.loading = true;
                self.status = STATUS_REFRESHING.to_string();
                return Some(Command::LoadEntries);
            }
            Input::Quit => return Some(Command::Quit),
        }
        None
    }

    fn handle_actions_input(&mut self, input: Input) -> Option<Command<T>> {
        match input {
            Input::Back => {
                self.view = View::List;
                self.action_cursor = 0;
                self.number_input.clear();
            }
            Input::MoveUp => {
                self.action_cursor =
                    viewport::move_cursor(self.action_cursor, -1, self.action_count);
            }
            Input::MoveDown => {
                self.action_cursor =
                    viewport::move_cursor(self.action_cursor, 1, self.action_count);
            }
            Input::Confirm => {
                if self.action_count == 0 {
                    return None;
                }
                let entry = self.current_entry()?.clone();
                return Some(Command::RunAction {
                    index: self.action_cursor,
                    entry,
                });
            }
            Input::Quit => return Some(Command::Quit),
            // Digits and refresh only apply to the list
            Input::Digit(_) | Input::Refresh => {}
        }
        None
    }

    fn move_list_cursor(&mut self, delta: isize) {
        self.number_input.clear();
        self.list_cursor = viewport::move_cursor(self.list_cursor, delta, self.entries.len());
        self.ensure_list_cursor_visible();
    }

    fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.number_input.is_empty() && digit == '0' {
            return;
        }
        if self.number_input.len() >= MAX_JUMP_DIGITS {
            return;
        }
        self.number_input.push(digit);
        self.status = format!("Jump target: {}", self.number_input);
    }

    fn confirm_list(&mut self) {
        if !self.number_input.is_empty() {
            let target = std::mem::take(&mut self.number_input);
            match target.parse::<usize>() {
                Ok(number) if (1..=self.entries.len()).contains(&number) => {
                    self.list_cursor = number - 1;
                    self.ensure_list_cursor_visible();
                }
                _ => self.status = STATUS_INVALID_SELECTION.to_string(),
            }
            return;
        }
        if self.entries.is_empty() {
            return;
        }
        self.view = View::Actions;
        self.action_cursor = 0;
    }

    fn apply_entries(&mut self, mut entries: Vec<Entry<T>>) {
        renumber(&mut entries);
        self.entries = entries;
        self.loading = false;
        self.list_cursor = self.list_cursor.min(self.entries.len().saturating_sub(1));
        self.ensure_list_cursor_visible();
        self.status = format!("Loaded {} entries", self.entries.len());
        log::debug!("loaded {} entries", self.entries.len());
    }

    fn apply_panel_update(&mut self, entry: Option<Entry<T>>, update: PanelUpdate<P>) {
        let status = update.status_message();
        let success = update.is_success();
        self.panel_title = update.title.clone();
        self.panel_text = update.panel_text();
        self.status.clone_from(&status);
        log::info!("action completed: {status}");
        self.last_action = Some(Outcome {
            entry,
            payload: update.payload,
            message: status,
            success,
        });
    }

    fn ensure_list_cursor_visible(&mut self) {
        let total = self.entries.len();
        if total == 0 {
            self.list_cursor = 0;
            self.list_offset = 0;
            return;
        }
        self.list_cursor = self.list_cursor.min(total - 1);
        self.list_offset =
            viewport::clamp_offset(self.list_cursor, self.list_offset, total, self.window_size());
    }
}
