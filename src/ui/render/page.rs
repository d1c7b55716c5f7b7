use super::Frame;
use crate::state::{ids, PageId, State};
use crate::ui::widgets::styling;
use crate::utils::text_processing::{highlight_ranges, query_regex, split_highlighted, truncate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Sparkline},
};

/// Render the body of the current page according to state.
///
pub fn page(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_page() {
        PageId::Search => search(frame, size, state),
        PageId::Analytics => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(8), Constraint::Min(3)])
                .split(size);
            analytics_chart(frame, rows[0], state);
            items(frame, rows[1], state);
        }
        _ => items(frame, size, state),
    }
}

/// Render the search box and the filtered result list.
///
fn search(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(size);

    let input_focused = state.is_focused(ids::SEARCH_INPUT);
    let input = state.search_input_mut();
    input.set_block(
        Block::default()
            .title(styling::block_title("Search", input_focused))
            .borders(Borders::ALL)
            .border_style(styling::block_border_style(&theme, input_focused)),
    );
    input.set_style(styling::normal_text_style(&theme));
    input.set_placeholder_style(styling::muted_text_style(&theme));
    frame.render_widget(state.search_input().widget(), rows[0]);

    let results_focused = state.is_focused(ids::RESULTS);
    let query = state.query();
    let re = query_regex(&query);
    let snippet_width = rows[1].width.saturating_sub(6) as usize;

    let results = state.filtered_results();
    let title = format!("Results ({})", results.len());
    let items: Vec<ListItem> = results
        .iter()
        .map(|result| {
            let ranges = highlight_ranges(&result.title, re.as_ref());
            let mut title_spans: Vec<Span> = split_highlighted(&result.title, &ranges)
                .into_iter()
                .map(|(text, matched)| {
                    let style = if matched {
                        styling::match_style(&theme)
                    } else {
                        styling::normal_text_style(&theme)
                    };
                    Span::styled(text.to_string(), style)
                })
                .collect();
            title_spans.push(Span::styled(
                format!("  {} · {}", result.source.label(), result.age()),
                styling::muted_text_style(&theme),
            ));
            ListItem::new(vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    format!("  {}", truncate(&result.snippet, snippet_width)),
                    styling::muted_text_style(&theme),
                )),
            ])
        })
        .collect();

    let block = Block::default()
        .title(styling::block_title(&title, results_focused))
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(&theme, results_focused));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(&theme));
    frame.render_stateful_widget(list, rows[1], state.get_results_list_state());
}

/// Render the rows of a non-search page.
///
fn items(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.is_focused(ids::PAGE_BODY);
    let title = state.current_page().title();

    let items: Vec<ListItem> = state
        .items()
        .iter()
        .map(|item| {
            let flag = if item.enabled { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::styled(flag, styling::key_style(&theme)),
                Span::styled(item.title.clone(), styling::normal_text_style(&theme)),
                Span::styled(
                    format!("  {}", item.detail),
                    styling::muted_text_style(&theme),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(styling::block_title(title, focused))
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(&theme, focused));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(&theme));
    frame.render_stateful_widget(list, size, state.get_items_list_state());
}

/// Render the analytics sparkline.
///
fn analytics_chart(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let total: u64 = state.analytics().iter().sum();
    let chart = Sparkline::default()
        .block(
            Block::default()
                .title(format!("Searches per day (total {})", total))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .data(state.analytics())
        .style(styling::match_style(theme));
    frame.render_widget(chart, size);
}
