use crate::theme::Theme;
use cxmenu_core::{MenuConfig, MenuState, View};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

pub mod action_menu;
pub mod entry_list;
pub mod panel;

/// Draw the whole menu: the active view, plus the side panel unless disabled.
pub fn draw<T, P>(
    f: &mut Frame,
    state: &MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
) where
    T: Clone,
{
    let area = f.area();
    let (main_area, panel_area) = split_panel(area, config.disable_panel);

    let lines = match state.view {
        View::List => entry_list::lines(state, config, theme, main_area.width),
        View::Actions => action_menu::lines(state, config, theme),
    };
    f.render_widget(Paragraph::new(lines), main_area);

    if let Some(panel_area) = panel_area {
        panel::draw(f, panel_area, state, config, theme);
    }
}

fn split_panel(area: Rect, disable_panel: bool) -> (Rect, Option<Rect>) {
    if disable_panel {
        return (area, None);
    }
    let chunks =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);
    (chunks[0], Some(chunks[1]))
}

/// "Status: ..." line shared by both views
pub(crate) fn status_line(status: &str, theme: &Theme) -> Line<'static> {
    let style = if status.contains("failed") || status.starts_with("Failed") {
        ratatui::style::Style::default().fg(theme.error)
    } else {
        theme.detail_style()
    };
    Line::from(Span::styled(format!("Status: {status}"), style))
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with '…'.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}


#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use super::*;
    use cxmenu_core::{Entry, MenuEvent, loader::mock::StaticLoader};
    use std::sync::Arc;

    fn loaded_state(count: u32) -> MenuState<u32, ()> {
        let mut state = MenuState::new(1, "Results show here.");
        let entries = (0..count).map(|i| Entry::new(format!("auth-{i}.json"), i)).collect();
        state.update(MenuEvent::EntriesLoaded(Ok(entries)));
        state
    }

    fn config(disable_panel: bool) -> MenuConfig<u32, ()> {
        let mut config = MenuConfig::new(Arc::new(StaticLoader::<u32>::new(vec![])));
        config.disable_panel = disable_panel;
        config.panel_placeholder = "Results show here.".to_string();
        config
    }

    #[test]
    fn test_panel_shown_by_default() {
        let state = loaded_state(2);
        let config = config(false);
        let theme = Theme::default();
        let output = render_to_string(120, 30, |f| draw(f, &state, &config, &theme));
        assert!(output.contains("auth-0.json"));
        assert!(output.contains("Information"));
        assert!(output.contains("Results show here."));
    }

    #[test]
    fn test_disabled_panel_is_omitted() {
        let state = loaded_state(2);
        let config = config(true);
        let theme = Theme::default();
        let output = render_to_string(120, 30, |f| draw(f, &state, &config, &theme));
        assert!(output.contains("auth-1.json"));
        assert!(!output.contains("Information"));
        assert!(!output.contains("Results show here."));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
