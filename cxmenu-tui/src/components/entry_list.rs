use super::{status_line, truncate_to_width};
use crate::theme::Theme;
use cxmenu_core::{Entry, MenuConfig, MenuState, viewport};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const POINTER_ACTIVE: &str = " › ";
const POINTER_IDLE: &str = " • ";
/// Columns taken by pointer and ordinal before the title starts
const ROW_PREFIX_WIDTH: usize = 8;

/// Lines of the list view: title, help, visible rows, then indicators.
pub fn lines<T, P>(
    state: &MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>>
where
    T: Clone,
{
    let mut lines = vec![Line::from(Span::styled(
        config.list_title().to_string(),
        theme.title_style(),
    ))];
    if !config.list_help.is_empty() {
        lines.extend(config.list_help.iter().map(|h| Line::raw(h.clone())));
        lines.push(Line::raw(""));
    }
    if state.loading {
        lines.push(Line::raw("Loading entries..."));
        lines.push(Line::raw(""));
    }
    if state.entries.is_empty() {
        lines.push(Line::raw("No entries available."));
    }

    let total = state.entries.len();
    let window = state.window_size();
    let range = viewport::visible_range(state.list_offset, total, window);
    let (start, end) = (range.start, range.end);
    for (idx, entry) in state.entries[range].iter().enumerate() {
        let selected = start + idx == state.list_cursor;
        lines.push(entry_row(entry, selected, theme, usize::from(width)));
        if !entry.subtitle.is_empty() && entry.subtitle != entry.description {
            lines.push(Line::from(Span::styled(
                format!("      {}", entry.subtitle),
                theme.detail_style(),
            )));
        }
    }

    lines.push(Line::raw(""));
    if total > window {
        lines.push(Line::from(Span::styled(
            format!("Showing {}-{end} of {total}", start + 1),
            theme.detail_style(),
        )));
    }
    if !state.number_input.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Pending selection: {}", state.number_input),
            theme.detail_style(),
        )));
    }
    lines.push(status_line(&state.status, theme));
    lines
}

fn entry_row<T>(entry: &Entry<T>, selected: bool, theme: &Theme, width: usize) -> Line<'static> {
    let pointer = if selected {
        Span::styled(
            POINTER_ACTIVE,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(POINTER_IDLE, Style::default().fg(theme.muted))
    };
    let mut title_style = Style::default().fg(theme.entry).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }

    let mut spans = vec![
        pointer,
        Span::raw(" "),
        Span::styled(
            format!("{:>3}.", entry.number),
            Style::default().fg(theme.number).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(entry.title.clone(), title_style),
    ];
    let mut used = ROW_PREFIX_WIDTH + entry.title.chars().count();
    for badge in &entry.badges {
        let label = format!("[{badge}]");
        used += label.chars().count() + 1;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, Style::default().fg(theme.badge)));
    }
    spans.push(Span::raw(" — "));
    used += 3;
    let summary = truncate_to_width(entry.summary(), width.saturating_sub(used).max(8));
    spans.push(Span::styled(summary, theme.detail_style()));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;
    use cxmenu_core::{Input, MenuEvent, loader::mock::StaticLoader};
    use ratatui::widgets::Paragraph;
    use std::sync::Arc;

    type State = MenuState<u32, ()>;

    fn config() -> MenuConfig<u32, ()> {
        let mut config = MenuConfig::new(Arc::new(StaticLoader::<u32>::new(vec![])));
        config.list_title = "Codex auth profiles".to_string();
        config.list_help =
            vec!["Use ↑/↓ or digits + Enter to highlight a profile.".to_string()];
        config
    }

    fn state_with(entries: Vec<Entry<u32>>) -> State {
        let mut state = State::new(1, "");
        state.update(MenuEvent::EntriesLoaded(Ok(entries)));
        state
    }

    fn render(state: &State, config: &MenuConfig<u32, ()>, height: u16) -> String {
        let theme = Theme::default();
        render_to_string(100, height, |f| {
            let lines = lines(state, config, &theme, f.area().width);
            f.render_widget(Paragraph::new(lines), f.area());
        })
    }

    #[test]
    fn test_rows_show_number_badges_and_summary() {
        let state = state_with(vec![
            Entry::new("work.json", 0)
                .with_description("Last used Mon, 02 Jan 2006 15:04")
                .with_badge("ready"),
            Entry::new("home.json", 1).with_subtitle("personal"),
            Entry::new("spare.json", 2),
        ]);
        let output = render(&state, &config(), 30);

        assert!(output.contains("Codex auth profiles"));
        assert!(output.contains("Use ↑/↓ or digits + Enter"));
        assert!(output.contains(" ›    1. work.json [ready] — Last used Mon, 02 Jan 2006 15:04"));
        assert!(output.contains(" •    2. home.json — personal"));
        assert!(output.contains("3. spare.json — (no description)"));
        assert!(output.contains("Status: Loaded 3 entries"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_subtitle_line_when_distinct_from_description() {
        let state = state_with(vec![
            Entry::new("a", 0).with_description("desc").with_subtitle("extra detail"),
        ]);
        let output = render(&state, &config(), 20);
        assert!(output.contains("a — desc"));
        assert!(output.contains("      extra detail"));
    }

    #[test]
    fn test_only_window_rows_are_drawn() {
        let entries = (0..30).map(|i| Entry::new(format!("row-{i:02}"), i)).collect();
        let mut state = state_with(entries);
        state.update(MenuEvent::Resize { height: 20 });
        for c in "25".chars() {
            state.update(MenuEvent::Input(Input::Digit(c)));
        }
        state.update(MenuEvent::Input(Input::Confirm));

        let output = render(&state, &config(), 40);
        // window is 10 rows ending at the cursor
        assert!(output.contains("row-24"));
        assert!(output.contains("row-15"));
        assert!(!output.contains("row-14"));
        assert!(!output.contains("row-25"));
        assert!(output.contains("Showing 16-25 of 30"));
    }

    #[test]
    fn test_pending_selection_and_loading_indicators() {
        let mut state = state_with((0..3).map(|i| Entry::new(format!("e{i}"), i)).collect());
        state.update(MenuEvent::Input(Input::Refresh));
        state.update(MenuEvent::Input(Input::Digit('2')));

        let output = render(&state, &config(), 30);
        assert!(output.contains("Loading entries..."));
        assert!(output.contains("Pending selection: 2"));
        assert!(output.contains("e0"), "stale entries stay visible while refreshing");
    }

    #[test]
    fn test_empty_list_message() {
        let state = state_with(vec![]);
        let output = render(&state, &config(), 20);
        assert!(output.contains("No entries available."));
    }
}
