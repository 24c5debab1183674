use crate::{entry::Entry, input::Input, outcome::PanelUpdate};

/// Everything that can change the menu state.
/// Key presses, resizes and background completions are merged into one queue
/// and applied one at a time, in arrival order.
#[derive(Debug)]
pub enum MenuEvent<T, P> {
    /// A resolved key press
    Input(Input),

    /// The display height changed
    Resize { height: u16 },

    /// The loader finished; errors are already rendered to text
    EntriesLoaded(Result<Vec<Entry<T>>, String>),

    /// An action finished. `entry` is the row the action was dispatched against.
    PanelReady {
        entry: Option<Entry<T>>,
        update: PanelUpdate<P>,
    },

    /// The caller asked for the session to end after an action
    QuitRequested,
}
