use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Number of shortcut hints shown in the footer.
const MAX_HINTS: usize = 6;

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    let mode = if state.is_help_open() {
        "HELP:"
    } else if state.is_dialog_open() {
        "RESULT:"
    } else if state.is_text_entry_active() {
        "SEARCH:"
    } else {
        "NORMAL:"
    };
    let mut left = vec![Span::styled(
        mode,
        Style::default()
            .fg(theme.background.to_color())
            .bg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD),
    )];

    match state.status() {
        Some(status) => left.push(Span::styled(
            format!(" {}", status),
            Style::default().fg(theme.success.to_color()),
        )),
        None => {
            // Inside the search box only global shortcuts reach the dispatcher.
            let text_entry = state.is_text_entry_active();
            let hints = state
                .shortcut_hints()
                .iter()
                .filter(|hint| !text_entry || hint.global)
                .take(MAX_HINTS);
            for hint in hints {
                left.push(Span::styled(format!(" {}", hint.chord), styling::key_style(theme)));
                left.push(Span::styled(
                    format!(": {},", hint.description.to_lowercase()),
                    styling::muted_text_style(theme),
                ));
            }
            left.push(Span::styled(" ?: all shortcuts", styling::muted_text_style(theme)));
        }
    }

    let right = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_width = right.width();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(
        Paragraph::new(Line::from(left)).alignment(Alignment::Left),
        columns[0],
    );
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), columns[1]);
}
