use crate::theme::Theme;
use cxmenu_core::{MenuConfig, MenuState, session::DEFAULT_PANEL_TITLE};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// Bordered side panel holding the latest action result.
pub fn draw<T, P>(
    f: &mut Frame,
    area: Rect,
    state: &MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
) {
    let title = if state.panel_title.is_empty() {
        DEFAULT_PANEL_TITLE
    } else {
        state.panel_title.as_str()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), theme.title_style()))
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1));

    let text = if state.panel_text.is_empty() {
        config.panel_placeholder()
    } else {
        state.panel_text.as_str()
    };
    let lines: Vec<Line> = text.lines().map(Line::raw).collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
