use super::Frame;
use crate::state::{ids, PageId, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Pages";

/// Render the page sidebar according to state.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.is_focused(ids::SIDEBAR);
    let current = state.current_page();

    let block = Block::default()
        .title(styling::block_title(BLOCK_TITLE, focused))
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(&theme, focused));

    let items: Vec<ListItem> = PageId::ALL
        .iter()
        .map(|page| {
            let marker = if *page == current { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, styling::key_style(&theme)),
                Span::styled(page.title(), styling::normal_text_style(&theme)),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(styling::current_list_item_style(&theme));
    }
    frame.render_stateful_widget(list, size, state.get_sidebar_list_state());
}
