use crate::entry::Entry;

/// Side effects requested by [`crate::MenuState::update`].
/// The engine loop hands these to the dispatcher; the state machine itself
/// performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// Run the loader in the background
    LoadEntries,
    /// Run the action at `index` against `entry` in the background
    RunAction { index: usize, entry: Entry<T> },
    /// End the session
    Quit,
}
