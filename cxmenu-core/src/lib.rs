pub mod action;
pub mod cancel;
pub mod command;
pub mod config;
pub mod entry;
pub mod event;
pub mod input;
pub mod loader;
pub mod outcome;
pub mod session;
pub mod state;
pub mod viewport;

// Re-export commonly used types at crate root
pub use action::MenuAction;
pub use cancel::CancelToken;
pub use command::Command;
pub use config::Config;
pub use entry::Entry;
pub use event::MenuEvent;
pub use input::Input;
pub use loader::Loader;
pub use outcome::{Outcome, PanelUpdate};
pub use session::MenuConfig;
pub use state::{MenuState, View};
