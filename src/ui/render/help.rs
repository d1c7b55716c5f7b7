use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

const BLOCK_TITLE: &str = "Keyboard shortcuts";

/// Width of the chord column.
const CHORD_WIDTH: usize = 14;

/// Render the shortcut reference over everything else.
///
pub fn help(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let area = centered_rect(60, 70, size);

    // One row per hint so the list selection lines up with the hints.
    let mut previous = None;
    let items: Vec<ListItem> = state
        .shortcut_hints()
        .iter()
        .map(|hint| {
            let category = if previous == Some(hint.category) {
                String::new()
            } else {
                previous = Some(hint.category);
                hint.category.title().to_string()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", category), styling::muted_text_style(&theme)),
                Span::styled(
                    format!("{:<width$}", hint.chord, width = CHORD_WIDTH),
                    styling::key_style(&theme),
                ),
                Span::styled(hint.description.clone(), styling::normal_text_style(&theme)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(styling::block_title(BLOCK_TITLE, true))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(&theme));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, state.get_help_list_state());
}
