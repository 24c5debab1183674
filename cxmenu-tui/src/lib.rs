pub mod app;
pub mod components;
pub mod keymap;
pub mod theme;

pub use app::{run, start};
pub use theme::Theme;
