use cxmenu_core::config::{NamedColor, ThemeColor, ThemeConfig};
use ratatui::style::{Color, Modifier, Style};

/// Resolved colors, built once per session and passed by reference into
/// every draw function.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Color,
    pub accent: Color,
    pub muted: Color,
    pub number: Color,
    pub badge: Color,
    pub entry: Color,
    pub detail: Color,
    pub border: Color,
    pub error: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            title: to_ratatui_color(&config.title),
            accent: to_ratatui_color(&config.accent),
            muted: to_ratatui_color(&config.muted),
            number: to_ratatui_color(&config.number),
            badge: to_ratatui_color(&config.badge),
            entry: to_ratatui_color(&config.entry),
            detail: to_ratatui_color(&config.detail),
            border: to_ratatui_color(&config.border),
            error: to_ratatui_color(&config.error),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn detail_style(&self) -> Style {
        Style::default().fg(self.detail)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn to_ratatui_color(color: &ThemeColor) -> Color {
    match color {
        ThemeColor::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        ThemeColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::Gray,
            NamedColor::DarkGray => Color::DarkGray,
        },
    }
}
