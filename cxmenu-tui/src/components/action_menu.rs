use super::status_line;
use crate::theme::Theme;
use cxmenu_core::{MenuConfig, MenuState};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn lines<T, P>(
    state: &MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
) -> Vec<Line<'static>>
where
    T: Clone,
{
    let mut lines = vec![Line::from(Span::styled(
        config.actions_title().to_string(),
        theme.title_style(),
    ))];

    if let Some(entry) = state.current_entry() {
        let detail = entry.target_detail();
        let target = if detail.is_empty() {
            format!("Target: {}", entry.title)
        } else {
            format!("Target: {} — {detail}", entry.title)
        };
        lines.push(Line::from(Span::styled(target, theme.detail_style())));
    }
    lines.extend(config.actions_help.iter().map(|h| Line::raw(h.clone())));
    lines.push(Line::raw(""));

    for (idx, action) in config.actions.iter().enumerate() {
        let line = if idx == state.action_cursor {
            Line::from(vec![
                Span::styled(
                    " › ",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    action.label.clone(),
                    Style::default().fg(theme.entry).add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(theme.muted)),
                Span::styled(action.label.clone(), Style::default().fg(theme.entry)),
            ])
        };
        lines.push(line);
    }

    lines.push(Line::raw(""));
    lines.push(status_line(&state.status, theme));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;
    use cxmenu_core::{
        Entry, Input, MenuAction, MenuEvent, PanelUpdate, loader::mock::StaticLoader,
    };
    use ratatui::widgets::Paragraph;
    use std::sync::Arc;

    fn config() -> MenuConfig<u32, ()> {
        let mut config = MenuConfig::new(Arc::new(StaticLoader::<u32>::new(vec![])));
        config.actions = vec![
            MenuAction::new("Use auth file", |_, _| PanelUpdate::ready("Copy auth", "", ())),
            MenuAction::new("Show path", |_, _| PanelUpdate::ready("Path", "", ())),
        ];
        config.actions_help = vec!["Enter runs the highlighted action.".to_string()];
        config
    }

    fn render(state: &MenuState<u32, ()>, config: &MenuConfig<u32, ()>) -> String {
        let theme = Theme::default();
        render_to_string(80, 20, |f| {
            f.render_widget(Paragraph::new(lines(state, config, &theme)), f.area());
        })
    }

    #[test]
    fn test_shows_target_and_highlights_cursor() {
        let config = config();
        let mut state = MenuState::new(config.actions.len(), "");
        state.update(MenuEvent::EntriesLoaded(Ok(vec![
            Entry::new("work.json", 0).with_description("Last used Mon, 02 Jan 2006 15:04"),
        ])));
        state.update(MenuEvent::Input(Input::Confirm));
        state.update(MenuEvent::Input(Input::MoveDown));

        let output = render(&state, &config);
        assert!(output.contains("Actions"));
        assert!(output.contains("Target: work.json — Last used Mon, 02 Jan 2006 15:04"));
        assert!(output.contains("Enter runs the highlighted action."));
        assert!(output.contains(" • Use auth file"));
        assert!(output.contains(" › Show path"));
    }

    #[test]
    fn test_target_without_detail() {
        let config = config();
        let mut state = MenuState::new(config.actions.len(), "");
        state.update(MenuEvent::EntriesLoaded(Ok(vec![Entry::new("bare", 0)])));
        let output = render(&state, &config);
        assert!(output.contains("Target: bare"));
        assert!(!output.contains("Target: bare —"));
    }
}
