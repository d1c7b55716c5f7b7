use super::{centered_rect, Frame};
use crate::state::{ids, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const BUTTONS: [(&str, &str); 3] = [
    (ids::DIALOG_OPEN, "Open"),
    (ids::DIALOG_COPY, "Copy link"),
    (ids::DIALOG_CLOSE, "Close"),
];

/// Render the result dialog over the page.
///
pub fn dialog(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let result = match state.dialog_result() {
        Some(result) => result,
        None => return,
    };

    let area = centered_rect(70, 50, size);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(styling::block_title("Result", true))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let body = vec![
        Line::from(Span::styled(result.title.clone(), styling::active_block_title_style())),
        Line::from(Span::styled(
            format!("{} · {}", result.source.label(), result.age()),
            styling::muted_text_style(theme),
        )),
        Line::from(Span::styled(result.url(), styling::key_style(theme))),
        Line::from(""),
        Line::from(Span::styled(result.snippet.clone(), styling::normal_text_style(theme))),
    ];
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), rows[0]);

    let mut buttons = Vec::new();
    for (id, label) in BUTTONS {
        buttons.push(Span::styled(
            format!(" {} ", label),
            styling::button_style(theme, state.is_focused(id)),
        ));
        buttons.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        rows[1],
    );
}
