use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Log (Ctrl+L to hide)";

/// Render the newest captured log lines.
///
pub fn log_panel(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let lines: Vec<Line> = state
        .log_lines(size.height.saturating_sub(2) as usize)
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(styling::muted_text_style(theme))
        .block(
            Block::default()
                .title(BLOCK_TITLE)
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(paragraph, size);
}
