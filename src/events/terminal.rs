use crate::config::Bindings;
use crate::events::screens::{self, APP_SCOPE};
use crate::shortcuts::{Dispatch, KeyInput, ShortcutDispatcher, ShortcutHint};
use crate::state::{PageId, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    router: KeyRouter,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new(bindings: Bindings, state: &mut State) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler {
            rx,
            router: KeyRouter::new(bindings, state),
        }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&mut self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => self.router.handle_key(event, state),
            Event::Tick => {}
        }
        Ok(state.is_running())
    }
}

/// Routes key presses to focus cycling, the shortcut dispatcher or the
/// search box, and keeps the page shortcut scope in step with the page.
///
pub struct KeyRouter {
    dispatcher: ShortcutDispatcher<State>,
    bindings: Bindings,
    page: Option<PageId>,
}

impl KeyRouter {
    pub fn new(bindings: Bindings, state: &mut State) -> Self {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe(APP_SCOPE, screens::app_shortcuts(&bindings));
        let mut router = KeyRouter {
            dispatcher,
            bindings,
            page: None,
        };
        router.sync_scopes(state);
        router
    }

    pub fn dispatcher(&self) -> &ShortcutDispatcher<State> {
        &self.dispatcher
    }

    /// Handle one key press.
    ///
    pub fn handle_key(&mut self, event: KeyEvent, state: &mut State) {
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("Processing exit terminal event '{:?}'...", event);
            state.quit();
            return;
        }

        let input = KeyInput::from(event);
        if input.is_tab() && state.handle_tab(input.shift) {
            return;
        }

        let in_text_entry = state.is_text_entry_active();
        match self.dispatcher.dispatch(&input, in_text_entry, state) {
            Dispatch::Handled => self.sync_scopes(state),
            Dispatch::Ignored if in_text_entry => {
                state.type_into_search(event);
            }
            Dispatch::Ignored => trace!("Unbound key {:?}.", input.key),
        }
    }

    /// Swap the page scope when the current page changed and publish the
    /// active shortcuts for the footer and help overlay.
    ///
    pub fn sync_scopes(&mut self, state: &mut State) {
        let page = state.current_page();
        if self.page == Some(page) {
            return;
        }
        if let Some(old) = self.page.replace(page) {
            self.dispatcher.unsubscribe(&screens::page_scope(old));
        }
        self.dispatcher.subscribe(
            screens::page_scope(page),
            screens::page_shortcuts(page, &self.bindings),
        );
        let mut hints: Vec<ShortcutHint> = self
            .dispatcher
            .active_shortcuts()
            .map(ShortcutHint::from)
            .collect();
        // Stable, so dispatch order is kept inside each category.
        hints.sort_by_key(|hint| hint.category);
        state.set_shortcut_hints(hints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::shortcuts::default_bindings;
    use crate::state::ids;

    fn setup(page: PageId) -> (KeyRouter, State) {
        let mut state = State::default();
        state.navigate_to(page, true);
        let router = KeyRouter::new(default_bindings(), &mut state);
        (router, state)
    }

    fn press(router: &mut KeyRouter, state: &mut State, code: KeyCode, modifiers: KeyModifiers) {
        router.handle_key(KeyEvent::new(code, modifiers), state);
    }

    fn type_char(router: &mut KeyRouter, state: &mut State, c: char) {
        press(router, state, KeyCode::Char(c), KeyModifiers::NONE);
    }

    #[test]
    fn ctrl_k_opens_search_from_any_page() {
        let (mut router, mut state) = setup(PageId::Settings);
        press(&mut router, &mut state, KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(state.current_page(), PageId::Search);
        assert_eq!(state.focused(), Some(ids::SEARCH_INPUT));
    }

    #[test]
    fn plain_k_does_not_fire_primary_shortcut() {
        let (mut router, mut state) = setup(PageId::Settings);
        type_char(&mut router, &mut state, 'k');
        assert_eq!(state.current_page(), PageId::Settings);
    }

    #[test]
    fn non_global_shortcut_is_typed_in_search_box() {
        let (mut router, mut state) = setup(PageId::Search);
        type_char(&mut router, &mut state, 'q');
        type_char(&mut router, &mut state, 'x');
        assert!(state.is_running());
        assert_eq!(state.query(), "qx");
    }

    #[test]
    fn global_shortcut_fires_in_search_box() {
        let (mut router, mut state) = setup(PageId::Search);
        type_char(&mut router, &mut state, 'a');
        press(&mut router, &mut state, KeyCode::Char('h'), KeyModifiers::ALT);
        assert_eq!(state.current_page(), PageId::Home);
        assert_eq!(state.query(), "a");
    }

    #[test]
    fn quit_key_outside_text_entry() {
        let (mut router, mut state) = setup(PageId::Home);
        type_char(&mut router, &mut state, 'q');
        assert!(!state.is_running());
    }

    #[test]
    fn ctrl_c_always_quits() {
        let (mut router, mut state) = setup(PageId::Search);
        press(&mut router, &mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!state.is_running());
    }

    #[test]
    fn page_scope_follows_navigation() {
        let (mut router, mut state) = setup(PageId::Home);
        assert!(router.dispatcher().is_subscribed("page:home"));
        type_char(&mut router, &mut state, '/');
        assert_eq!(state.current_page(), PageId::Search);
        assert!(router.dispatcher().is_subscribed("page:search"));
        assert!(!router.dispatcher().is_subscribed("page:home"));
        assert!(state
            .shortcut_hints()
            .iter()
            .any(|hint| hint.description == "Clear query"));
    }

    #[test]
    fn page_shortcut_runs_outside_text_entry() {
        let (mut router, mut state) = setup(PageId::Search);
        type_char(&mut router, &mut state, 'z');
        press(&mut router, &mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(state.focused(), Some(ids::RESULTS));
        type_char(&mut router, &mut state, 'x');
        assert_eq!(state.query(), "");
    }

    #[test]
    fn dialog_round_trip_through_keys() {
        let (mut router, mut state) = setup(PageId::Search);
        press(&mut router, &mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(state.focused(), Some(ids::RESULTS));
        press(&mut router, &mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(state.is_dialog_open());

        press(&mut router, &mut state, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(state.focused(), Some(ids::DIALOG_CLOSE));
        press(&mut router, &mut state, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(state.focused(), Some(ids::DIALOG_OPEN));

        press(&mut router, &mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!state.is_dialog_open());
        assert_eq!(state.focused(), Some(ids::RESULTS));
    }

    #[test]
    fn help_opens_with_shifted_question_mark() {
        let (mut router, mut state) = setup(PageId::Home);
        press(&mut router, &mut state, KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(state.is_help_open());
        press(&mut router, &mut state, KeyCode::F(1), KeyModifiers::NONE);
        assert!(!state.is_help_open());
        assert_eq!(state.focused(), Some(ids::PAGE_BODY));
    }

    #[test]
    fn shift_enter_does_not_split_the_query() {
        let (mut router, mut state) = setup(PageId::Search);
        type_char(&mut router, &mut state, 'a');
        press(&mut router, &mut state, KeyCode::Enter, KeyModifiers::SHIFT);
        type_char(&mut router, &mut state, 'b');
        assert_eq!(state.focused(), Some(ids::SEARCH_INPUT));
        assert_eq!(state.search_input().lines().len(), 1);
        assert_eq!(state.query(), "ab");
    }

    #[test]
    fn help_hints_form_one_run_per_category() {
        for page in [PageId::Home, PageId::Search] {
            let (_router, state) = setup(page);
            let mut runs = Vec::new();
            for hint in state.shortcut_hints() {
                if runs.last() != Some(&hint.category) {
                    runs.push(hint.category);
                }
            }
            let mut distinct = runs.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(runs.len(), distinct.len(), "{:?}", runs);
        }
    }

    #[test]
    fn back_returns_to_previous_page() {
        let (mut router, mut state) = setup(PageId::Collections);
        press(&mut router, &mut state, KeyCode::Char('i'), KeyModifiers::ALT);
        assert_eq!(state.current_page(), PageId::Insights);
        type_char(&mut router, &mut state, 'b');
        assert_eq!(state.current_page(), PageId::Collections);
        assert_eq!(state.previous_page(), Some(PageId::Insights));
    }
}
