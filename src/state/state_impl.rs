use crate::logger::{self, LogBuffer};
use crate::mock::{self, PageItem, SearchResult};
use crate::shortcuts::ShortcutHint;
use crate::ui::Theme;
use crate::utils::clipboard::copy_to_clipboard;
use log::*;
use ratatui::widgets::ListState;
use std::rc::Rc;
use tui_textarea::{Input, Key, TextArea};

use super::focus::{FocusHandle, FocusNode, FocusOptions, FocusRegistry, NodeKind};
use super::focus_return::FocusReturn;
use super::ids;
use super::navigation::{NavigationState, PageId};

/// Houses data representative of application state.
///
/// Owns the navigation state machine and the focus registry, and mounts the
/// focus nodes of whichever page and overlays are on screen.
pub struct State {
    navigation: NavigationState,
    fallback_page: PageId,
    focus: FocusRegistry,
    page_nodes: Vec<Rc<FocusNode>>,
    dialog_nodes: Vec<Rc<FocusNode>>,
    help_nodes: Vec<Rc<FocusNode>>,
    dialog: FocusReturn,
    help: FocusReturn,
    dialog_result: Option<usize>,
    sidebar_list_state: ListState,
    search_input: TextArea<'static>,
    results: Vec<SearchResult>,
    filtered_results: Vec<usize>,
    results_list_state: ListState,
    items: Vec<PageItem>,
    items_list_state: ListState,
    help_list_state: ListState,
    analytics: Vec<u64>,
    shortcut_hints: Vec<ShortcutHint>,
    log_visible: bool,
    log_buffer: LogBuffer,
    status: Option<String>,
    running: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State::new(PageId::Home, PageId::Home, Theme::default(), logger::new_buffer())
    }
}

impl State {
    pub fn new(start_page: PageId, fallback_page: PageId, theme: Theme, log_buffer: LogBuffer) -> Self {
        let results = mock::generate_results(mock::RESULT_SEED, mock::RESULT_COUNT);
        let mut state = State {
            navigation: NavigationState::new(start_page),
            fallback_page,
            focus: FocusRegistry::new(),
            page_nodes: vec![],
            dialog_nodes: vec![],
            help_nodes: vec![],
            dialog: FocusReturn::new(Some(ids::DIALOG_OPEN.to_string())),
            help: FocusReturn::new(Some(ids::HELP_LIST.to_string())),
            dialog_result: None,
            sidebar_list_state: ListState::default(),
            search_input: new_search_input(),
            filtered_results: vec![],
            results,
            results_list_state: ListState::default(),
            items: vec![],
            items_list_state: ListState::default(),
            help_list_state: ListState::default(),
            analytics: mock::analytics_series(mock::RESULT_SEED, 30),
            shortcut_hints: vec![],
            log_visible: false,
            log_buffer,
            status: None,
            running: true,
            theme,
        };
        state.refresh_results();
        state.mount_page();
        state
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the main loop after the current event.
    ///
    pub fn quit(&mut self) -> &mut Self {
        info!("Quitting...");
        self.running = false;
        self
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    // Navigation

    pub fn current_page(&self) -> PageId {
        self.navigation.current_page()
    }

    pub fn previous_page(&self) -> Option<PageId> {
        self.navigation.previous_page()
    }

    pub fn history(&self) -> Vec<PageId> {
        self.navigation.history()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigation.can_go_back()
    }

    pub fn fallback_page(&self) -> PageId {
        self.fallback_page
    }

    /// Show a page. Open overlays are closed first.
    ///
    pub fn navigate_to(&mut self, page: PageId, add_to_history: bool) -> &mut Self {
        self.close_overlays();
        self.navigation.navigate_to(page, add_to_history);
        info!("Showing {} page.", page.title());
        self.mount_page();
        self
    }

    /// Return to the previous page, or the fallback page when history is
    /// exhausted.
    ///
    pub fn go_back(&mut self) -> &mut Self {
        self.close_overlays();
        self.navigation.go_back(self.fallback_page);
        info!("Showing {} page.", self.current_page().title());
        self.mount_page();
        self
    }

    /// Replace the focus nodes of the previous page with those of the
    /// current one and focus its default widget.
    ///
    fn mount_page(&mut self) {
        for node in self.page_nodes.drain(..) {
            self.focus.unregister(node.id());
        }

        let page = self.current_page();
        let children: Vec<(&str, NodeKind)> = if page == PageId::Search {
            vec![
                (ids::SIDEBAR, NodeKind::List),
                (ids::SEARCH_INPUT, NodeKind::TextInput),
                (ids::RESULTS, NodeKind::List),
            ]
        } else {
            vec![(ids::SIDEBAR, NodeKind::List), (ids::PAGE_BODY, NodeKind::List)]
        };

        let root = FocusNode::container(ids::PAGE, children.iter().map(|(id, _)| *id));
        self.focus.register(ids::PAGE, &root);
        self.page_nodes.push(root);
        for (id, kind) in children {
            let node = FocusNode::new(id, kind);
            self.focus.register(id, &node);
            self.page_nodes.push(node);
        }

        self.sidebar_list_state
            .select(PageId::ALL.iter().position(|p| *p == page));
        self.items = mock::page_items(page);
        self.items_list_state
            .select(if self.items.is_empty() { None } else { Some(0) });

        let default_focus = if page == PageId::Search {
            ids::SEARCH_INPUT
        } else {
            ids::PAGE_BODY
        };
        self.focus.set_focus(default_focus, FocusOptions::default());
    }

    // Focus

    /// Register a focusable handle for the lifetime of a widget.
    ///
    pub fn register_focusable<H: FocusHandle + 'static>(&mut self, id: &str, handle: &Rc<H>) -> &mut Self {
        self.focus.register(id, handle);
        self
    }

    pub fn unregister_focusable(&mut self, id: &str) -> &mut Self {
        self.focus.unregister(id);
        self
    }

    pub fn set_focus(&mut self, id: &str, options: FocusOptions) -> &mut Self {
        self.focus.set_focus(id, options);
        self
    }

    pub fn return_to_previous(&mut self) -> &mut Self {
        self.focus.return_to_previous();
        self
    }

    pub fn trap_focus(&mut self, container_id: &str) -> &mut Self {
        self.focus.trap_focus(container_id);
        self
    }

    pub fn release_focus(&mut self) -> &mut Self {
        self.focus.release_focus();
        self
    }

    /// Return the id of the focused widget.
    ///
    pub fn focused(&self) -> Option<&str> {
        self.focus.current()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focus.is_focused(id)
    }

    /// Whether key presses should be typed rather than treated as shortcuts.
    ///
    pub fn is_text_entry_active(&self) -> bool {
        self.focus.is_text_entry_active()
    }

    /// Cycle focus with Tab. Trapped overlays confine the cycle; otherwise
    /// it runs over the widgets of the current page.
    ///
    pub fn handle_tab(&mut self, backwards: bool) -> bool {
        self.focus.handle_tab(backwards, Some(ids::PAGE))
    }

    // Overlays

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn is_help_open(&self) -> bool {
        self.help.is_open()
    }

    /// Return the result shown in the dialog.
    ///
    pub fn dialog_result(&self) -> Option<&SearchResult> {
        self.dialog_result.and_then(|i| self.results.get(i))
    }

    /// Open the result dialog for the selected result.
    ///
    pub fn open_dialog(&mut self) -> &mut Self {
        if self.dialog.is_open() {
            return self;
        }
        let index = match self.selected_result_index() {
            Some(index) => index,
            None => {
                debug!("No result selected, dialog stays closed.");
                return self;
            }
        };
        self.dialog_result = Some(index);

        let container = FocusNode::container(
            ids::RESULT_DIALOG,
            [ids::DIALOG_OPEN, ids::DIALOG_COPY, ids::DIALOG_CLOSE],
        );
        self.focus.register(ids::RESULT_DIALOG, &container);
        self.dialog_nodes.push(container);
        for id in [ids::DIALOG_OPEN, ids::DIALOG_COPY, ids::DIALOG_CLOSE] {
            let node = FocusNode::new(id, NodeKind::Button);
            self.focus.register(id, &node);
            self.dialog_nodes.push(node);
        }

        self.dialog.update(true, &mut self.focus);
        self.focus.trap_focus(ids::RESULT_DIALOG);
        self
    }

    pub fn close_dialog(&mut self) -> &mut Self {
        if !self.dialog.is_open() {
            return self;
        }
        self.focus.release_focus();
        self.dialog.update(false, &mut self.focus);
        for node in self.dialog_nodes.drain(..) {
            self.focus.unregister(node.id());
        }
        self.dialog_result = None;
        self
    }

    /// Open the selected result: the first press shows the dialog, a press
    /// inside the dialog opens the result.
    ///
    pub fn open_result(&mut self) -> &mut Self {
        if self.dialog.is_open() {
            self.confirm_open();
            self
        } else {
            self.open_dialog()
        }
    }

    fn confirm_open(&mut self) {
        if let Some(url) = self.dialog_result().map(SearchResult::url) {
            info!("Opening {}", url);
            self.set_status(format!("Opened {}", url));
        }
        self.close_dialog();
    }

    pub fn open_help(&mut self) -> &mut Self {
        if self.help.is_open() {
            return self;
        }
        let container = FocusNode::container(ids::HELP, [ids::HELP_LIST]);
        let list = FocusNode::new(ids::HELP_LIST, NodeKind::List);
        self.focus.register(ids::HELP, &container);
        self.focus.register(ids::HELP_LIST, &list);
        self.help_nodes.push(container);
        self.help_nodes.push(list);
        self.help_list_state.select(Some(0));

        self.help.update(true, &mut self.focus);
        self.focus.trap_focus(ids::HELP);
        self
    }

    pub fn close_help(&mut self) -> &mut Self {
        if !self.help.is_open() {
            return self;
        }
        if self.dialog.is_open() {
            self.focus.trap_focus(ids::RESULT_DIALOG);
        } else {
            self.focus.release_focus();
        }
        self.help.update(false, &mut self.focus);
        for node in self.help_nodes.drain(..) {
            self.focus.unregister(node.id());
        }
        self
    }

    pub fn toggle_help(&mut self) -> &mut Self {
        if self.help.is_open() {
            self.close_help()
        } else {
            self.open_help()
        }
    }

    fn close_overlays(&mut self) {
        self.close_help();
        self.close_dialog();
    }

    /// Close the topmost overlay. With no overlay open, leave the search
    /// box for the result list.
    ///
    pub fn close(&mut self) -> &mut Self {
        if self.help.is_open() {
            self.close_help()
        } else if self.dialog.is_open() {
            self.close_dialog()
        } else {
            if self.focus.is_focused(ids::SEARCH_INPUT) {
                self.focus.set_focus(ids::RESULTS, FocusOptions::default());
            }
            self
        }
    }

    /// Run the primary action of the focused widget.
    ///
    pub fn activate(&mut self) -> &mut Self {
        let focused = self.focus.current().map(str::to_string);
        match focused.as_deref() {
            Some(ids::SIDEBAR) => {
                if let Some(page) = self.sidebar_list_state.selected().and_then(|i| PageId::ALL.get(i)) {
                    let page = *page;
                    self.navigate_to(page, true);
                }
            }
            Some(ids::SEARCH_INPUT) => {
                if !self.filtered_results.is_empty() {
                    self.focus.set_focus(ids::RESULTS, FocusOptions::default());
                }
            }
            Some(ids::RESULTS) => {
                self.open_dialog();
            }
            Some(ids::PAGE_BODY) => {
                self.toggle_item();
            }
            Some(ids::DIALOG_OPEN) => {
                self.confirm_open();
            }
            Some(ids::DIALOG_COPY) => {
                self.copy_link();
            }
            Some(ids::DIALOG_CLOSE) => {
                self.close_dialog();
            }
            Some(ids::HELP_LIST) => {
                self.close_help();
            }
            _ => {}
        }
        self
    }

    // Lists

    pub fn get_sidebar_list_state(&mut self) -> &mut ListState {
        &mut self.sidebar_list_state
    }

    pub fn get_results_list_state(&mut self) -> &mut ListState {
        &mut self.results_list_state
    }

    pub fn get_items_list_state(&mut self) -> &mut ListState {
        &mut self.items_list_state
    }

    pub fn get_help_list_state(&mut self) -> &mut ListState {
        &mut self.help_list_state
    }

    /// Move the selection of the focused list down.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        self.step_selection(false);
        self
    }

    /// Move the selection of the focused list up.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        self.step_selection(true);
        self
    }

    fn step_selection(&mut self, backwards: bool) {
        let focused = self.focus.current().map(str::to_string);
        match focused.as_deref() {
            Some(ids::SIDEBAR) => step(&mut self.sidebar_list_state, PageId::ALL.len(), backwards),
            Some(ids::SEARCH_INPUT) | Some(ids::RESULTS) => {
                step(&mut self.results_list_state, self.filtered_results.len(), backwards)
            }
            Some(ids::PAGE_BODY) => step(&mut self.items_list_state, self.items.len(), backwards),
            Some(ids::HELP_LIST) => {
                step(&mut self.help_list_state, self.shortcut_hints.len(), backwards)
            }
            Some(ids::DIALOG_OPEN) | Some(ids::DIALOG_COPY) | Some(ids::DIALOG_CLOSE) => {
                self.focus.handle_tab(backwards, None);
            }
            _ => {}
        }
    }

    // Search

    pub fn search_input(&self) -> &TextArea<'static> {
        &self.search_input
    }

    pub fn search_input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_input
    }

    /// Return the text typed into the search box.
    ///
    pub fn query(&self) -> String {
        self.search_input.lines().join(" ")
    }

    /// Feed a key press to the search box and refilter the results. Keys
    /// that would break the query onto a second line are dropped.
    ///
    pub fn type_into_search(&mut self, input: impl Into<Input>) -> &mut Self {
        let input = input.into();
        if inserts_newline(&input) {
            trace!("Ignored newline key in search box.");
            return self;
        }
        if self.search_input.input(input) {
            if self.search_input.lines().len() > 1 {
                self.search_input.undo();
            }
            self.refresh_results();
        }
        self
    }

    /// Clear the query and show every result again.
    ///
    pub fn clear_search(&mut self) -> &mut Self {
        self.search_input = new_search_input();
        self.refresh_results();
        self
    }

    /// Jump to the search box from anywhere.
    ///
    pub fn focus_search(&mut self) -> &mut Self {
        if self.current_page() != PageId::Search {
            self.navigate_to(PageId::Search, true);
        } else {
            self.close_overlays();
        }
        self.focus.set_focus(ids::SEARCH_INPUT, FocusOptions::default());
        self
    }

    fn refresh_results(&mut self) {
        let query = self.query();
        self.filtered_results = mock::filter_results(&self.results, &query);
        debug!(
            "Query '{}' matches {} of {} results.",
            query,
            self.filtered_results.len(),
            self.results.len()
        );
        self.results_list_state.select(if self.filtered_results.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    /// Return the results that match the query, in display order.
    ///
    pub fn filtered_results(&self) -> Vec<&SearchResult> {
        self.filtered_results
            .iter()
            .filter_map(|i| self.results.get(*i))
            .collect()
    }

    fn selected_result_index(&self) -> Option<usize> {
        self.results_list_state
            .selected()
            .and_then(|i| self.filtered_results.get(i))
            .copied()
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected_result_index().and_then(|i| self.results.get(i))
    }

    /// Copy the link of the result in the dialog, or the selected result.
    ///
    pub fn copy_link(&mut self) -> &mut Self {
        let url = match self.dialog_result().or_else(|| self.selected_result()) {
            Some(result) => result.url(),
            None => return self,
        };
        match copy_to_clipboard(&url) {
            Ok(()) => {
                info!("Copied {} to clipboard.", url);
                self.set_status(format!("Copied {}", url));
            }
            Err(e) => {
                warn!("{}", e);
                self.set_status("Could not access the clipboard");
            }
        }
        self
    }

    // Page bodies

    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    pub fn analytics(&self) -> &[u64] {
        &self.analytics
    }

    /// Flip the flag of the selected row on the current page.
    ///
    pub fn toggle_item(&mut self) -> &mut Self {
        let selected = self.items_list_state.selected();
        if let Some(item) = selected.and_then(|i| self.items.get_mut(i)) {
            item.enabled = !item.enabled;
            let message = format!(
                "{} {}",
                item.title,
                if item.enabled { "enabled" } else { "disabled" }
            );
            debug!("{}", message);
            self.set_status(message);
        }
        self
    }

    // Shortcuts and log

    pub fn shortcut_hints(&self) -> &[ShortcutHint] {
        &self.shortcut_hints
    }

    pub fn set_shortcut_hints(&mut self, hints: Vec<ShortcutHint>) -> &mut Self {
        self.shortcut_hints = hints;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Return the newest `count` log lines, oldest first.
    ///
    pub fn log_lines(&self, count: usize) -> Vec<String> {
        match self.log_buffer.lock() {
            Ok(buffer) => {
                let skip = buffer.len().saturating_sub(count);
                buffer.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }
}

/// Whether the text area would insert a line break for this input.
///
fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter => true,
        Key::Char('m') | Key::Char('j') => input.ctrl && !input.alt,
        _ => false,
    }
}

fn new_search_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Search everything...");
    textarea
}

/// Move a list selection one step, wrapping at both ends.
///
fn step(list_state: &mut ListState, len: usize, backwards: bool) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let next = match (list_state.selected(), backwards) {
        (Some(i), false) if i + 1 < len => i + 1,
        (Some(_), false) => 0,
        (Some(i), true) if i > 0 => i - 1,
        (Some(_), true) => len - 1,
        (None, false) => 0,
        (None, true) => len - 1,
    };
    list_state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAX_HISTORY;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            state.type_into_search(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn new_state_focuses_default_widget() {
        let state = State::default();
        assert_eq!(state.current_page(), PageId::Home);
        assert_eq!(state.focused(), Some(ids::PAGE_BODY));
        assert!(!state.is_text_entry_active());
        assert!(state.is_running());
    }

    #[test]
    fn navigate_to_search_focuses_text_input() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        assert_eq!(state.focused(), Some(ids::SEARCH_INPUT));
        assert!(state.is_text_entry_active());
        assert_eq!(state.previous_page(), Some(PageId::Home));
        assert_eq!(state.history(), vec![PageId::Home, PageId::Search]);
    }

    #[test]
    fn history_stays_bounded_through_state() {
        let mut state = State::default();
        for page in PageId::ALL.iter().cycle().take(25) {
            state.navigate_to(*page, true);
            assert!(state.history().len() <= MAX_HISTORY);
            assert_eq!(state.history().last(), Some(&state.current_page()));
        }
    }

    #[test]
    fn go_back_lands_on_fallback_when_history_exhausted() {
        let mut state = State::new(PageId::About, PageId::Search, Theme::default(), logger::new_buffer());
        assert!(!state.can_go_back());
        state.go_back();
        assert_eq!(state.current_page(), PageId::Search);
        assert_eq!(state.history(), vec![PageId::Search]);
        assert_eq!(state.focused(), Some(ids::SEARCH_INPUT));
    }

    #[test]
    fn navigation_remounts_page_nodes() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.navigate_to(PageId::Settings, true);
        state.set_focus(ids::SEARCH_INPUT, FocusOptions::default());
        assert_eq!(state.focused(), Some(ids::PAGE_BODY));
    }

    #[test]
    fn tab_cycles_page_widgets() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        assert!(state.handle_tab(false));
        assert_eq!(state.focused(), Some(ids::RESULTS));
        assert!(state.handle_tab(false));
        assert_eq!(state.focused(), Some(ids::SIDEBAR));
        assert!(state.handle_tab(true));
        assert_eq!(state.focused(), Some(ids::RESULTS));
    }

    #[test]
    fn typing_filters_results() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        let total = state.filtered_results().len();
        type_text(&mut state, "zzzz-no-such-text");
        assert_eq!(state.query(), "zzzz-no-such-text");
        assert!(state.filtered_results().is_empty());
        assert!(state.selected_result().is_none());
        state.clear_search();
        assert_eq!(state.filtered_results().len(), total);
    }

    #[test]
    fn dialog_traps_focus_and_returns_it_on_close() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.activate();
        assert_eq!(state.focused(), Some(ids::RESULTS));

        state.activate();
        assert!(state.is_dialog_open());
        assert_eq!(state.focused(), Some(ids::DIALOG_OPEN));
        assert!(state.dialog_result().is_some());

        state.handle_tab(true);
        assert_eq!(state.focused(), Some(ids::DIALOG_CLOSE));
        state.handle_tab(false);
        assert_eq!(state.focused(), Some(ids::DIALOG_OPEN));

        state.close();
        assert!(!state.is_dialog_open());
        assert_eq!(state.focused(), Some(ids::RESULTS));
        state.set_focus(ids::DIALOG_OPEN, FocusOptions::default());
        assert_eq!(state.focused(), Some(ids::RESULTS));
    }

    #[test]
    fn dialog_open_button_closes_and_sets_status() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.open_dialog();
        let url = state.dialog_result().unwrap().url();
        state.activate();
        assert!(!state.is_dialog_open());
        assert_eq!(state.status(), Some(format!("Opened {}", url).as_str()));
    }

    #[test]
    fn help_over_dialog_restores_dialog_trap() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.open_dialog();
        state.open_help();
        assert_eq!(state.focused(), Some(ids::HELP_LIST));

        state.close();
        assert!(!state.is_help_open());
        assert!(state.is_dialog_open());
        assert_eq!(state.focused(), Some(ids::DIALOG_OPEN));
        state.handle_tab(false);
        assert_eq!(state.focused(), Some(ids::DIALOG_COPY));
    }

    #[test]
    fn navigating_closes_overlays() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.open_dialog();
        state.navigate_to(PageId::Home, true);
        assert!(!state.is_dialog_open());
        assert_eq!(state.focused(), Some(ids::PAGE_BODY));
        assert!(state.handle_tab(false));
        assert_eq!(state.focused(), Some(ids::SIDEBAR));
    }

    #[test]
    fn escape_leaves_search_input() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        state.close();
        assert_eq!(state.focused(), Some(ids::RESULTS));
    }

    #[test]
    fn sidebar_enter_navigates_to_selected_page() {
        let mut state = State::default();
        state.set_focus(ids::SIDEBAR, FocusOptions::default());
        state.next_item();
        state.activate();
        assert_eq!(state.current_page(), PageId::ALL[1]);
    }

    #[test]
    fn toggle_item_flips_flag() {
        let mut state = State::default();
        state.navigate_to(PageId::Connectors, true);
        let before = state.items()[0].enabled;
        state.activate();
        assert_eq!(state.items()[0].enabled, !before);
        assert!(state.status().is_some());
    }

    #[test]
    fn list_selection_wraps() {
        let mut list_state = ListState::default();
        step(&mut list_state, 3, true);
        assert_eq!(list_state.selected(), Some(2));
        step(&mut list_state, 3, false);
        assert_eq!(list_state.selected(), Some(0));
        step(&mut list_state, 0, false);
        assert_eq!(list_state.selected(), None);
    }

    #[test]
    fn focus_search_from_other_page() {
        let mut state = State::default();
        state.focus_search();
        assert_eq!(state.current_page(), PageId::Search);
        assert!(state.is_text_entry_active());
    }

    #[test]
    fn search_box_stays_on_one_line() {
        let mut state = State::default();
        state.navigate_to(PageId::Search, true);
        type_text(&mut state, "a");
        state.type_into_search(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        state.type_into_search(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
        type_text(&mut state, "b");
        assert_eq!(state.search_input().lines().len(), 1);
        assert_eq!(state.query(), "ab");
    }

    #[test]
    fn custom_widgets_join_the_focus_registry() {
        let mut state = State::default();
        let toolbar = FocusNode::container("toolbar", ["save", "discard"]);
        let save = FocusNode::new("save", NodeKind::Button);
        let discard = FocusNode::new("discard", NodeKind::Button);
        state
            .register_focusable("toolbar", &toolbar)
            .register_focusable("save", &save)
            .register_focusable("discard", &discard);

        let before = state.focused().map(str::to_string);
        state.set_focus("save", FocusOptions::RECORD).trap_focus("toolbar");
        assert!(save.is_focused());
        assert!(state.handle_tab(false));
        assert_eq!(state.focused(), Some("discard"));
        assert!(!save.is_focused());
        assert!(state.handle_tab(false));
        assert_eq!(state.focused(), Some("save"));

        state.release_focus().return_to_previous();
        assert_eq!(state.focused().map(str::to_string), before);

        state.unregister_focusable("discard");
        state.set_focus("discard", FocusOptions::default());
        assert_eq!(state.focused().map(str::to_string), before);
    }

    #[test]
    fn log_lines_returns_newest_entries() {
        let buffer = logger::new_buffer();
        {
            let mut guard = buffer.lock().unwrap();
            for i in 0..5 {
                guard.push(format!("line {}", i));
            }
        }
        let state = State::new(PageId::Home, PageId::Home, Theme::default(), buffer);
        assert_eq!(state.log_lines(2), vec!["line 3", "line 4"]);
    }
}
