mod dialog;
mod footer;
mod help;
mod log_panel;
mod page;
mod sidebar;

use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the log panel when it is visible.
const LOG_HEIGHT: u16 = 8;

/// Width of the page sidebar.
const SIDEBAR_WIDTH: u16 = 22;

/// Render the whole screen according to state.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(rows[0]);

    sidebar::sidebar(frame, columns[0], state);
    page::page(frame, columns[1], state);
    if state.is_log_visible() {
        log_panel::log_panel(frame, rows[1], state);
    }
    footer::footer(frame, rows[rows.len() - 1], state);

    if state.is_dialog_open() {
        dialog::dialog(frame, size, state);
    }
    if state.is_help_open() {
        help::help(frame, size, state);
    }
}

/// Return a rectangle centered in `r` taking the given percentages.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
