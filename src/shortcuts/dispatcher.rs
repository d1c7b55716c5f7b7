//! Process-wide shortcut dispatch over screen-scoped shortcut sets.
//!
//! Screens subscribe their shortcuts under a scope name when they mount and
//! unsubscribe when they unmount. One dispatcher serves every key press and
//! consults the live scopes in subscription order.

use super::{matcher, KeyInput, KeyboardShortcut};
use log::*;

/// Outcome of dispatching a key press.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A shortcut fired; the key must not reach the focused widget.
    Handled,
    /// No shortcut fired; the key proceeds to the focused widget.
    Ignored,
}

struct Scope<C> {
    name: String,
    shortcuts: Vec<KeyboardShortcut<C>>,
}

/// Holds the active shortcut scopes and routes key presses to them.
///
pub struct ShortcutDispatcher<C> {
    scopes: Vec<Scope<C>>,
}

impl<C> Default for ShortcutDispatcher<C> {
    fn default() -> Self {
        ShortcutDispatcher::new()
    }
}

impl<C> ShortcutDispatcher<C> {
    pub fn new() -> Self {
        ShortcutDispatcher { scopes: Vec::new() }
    }

    /// Activate a set of shortcuts under a scope name. Subscribing a name
    /// that is already active replaces its shortcuts and keeps its position.
    ///
    pub fn subscribe(&mut self, scope: impl Into<String>, shortcuts: Vec<KeyboardShortcut<C>>) {
        let name = scope.into();
        match self.scopes.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                debug!(
                    "Replacing shortcut scope '{}' ({} shortcuts)...",
                    name,
                    shortcuts.len()
                );
                existing.shortcuts = shortcuts;
            }
            None => {
                debug!(
                    "Subscribing shortcut scope '{}' ({} shortcuts)...",
                    name,
                    shortcuts.len()
                );
                self.scopes.push(Scope { name, shortcuts });
            }
        }
    }

    /// Deactivate a scope. Unknown names are ignored.
    ///
    pub fn unsubscribe(&mut self, scope: &str) {
        let before = self.scopes.len();
        self.scopes.retain(|s| s.name != scope);
        if self.scopes.len() != before {
            debug!("Unsubscribed shortcut scope '{}'.", scope);
        }
    }

    pub fn is_subscribed(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s.name == scope)
    }

    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes.iter().map(|s| s.name.as_str()).collect()
    }

    /// Iterate over every active shortcut in dispatch order.
    ///
    pub fn active_shortcuts(&self) -> impl Iterator<Item = &KeyboardShortcut<C>> {
        self.scopes.iter().flat_map(|s| s.shortcuts.iter())
    }

    /// Return the first shortcut that would fire for the key press. Inside a
    /// text-entry context only global shortcuts are candidates.
    ///
    pub fn find(&self, event: &KeyInput, in_text_entry: bool) -> Option<&KeyboardShortcut<C>> {
        self.active_shortcuts()
            .filter(|shortcut| !in_text_entry || shortcut.global)
            .find(|shortcut| matcher::matches(event, shortcut))
    }

    /// Run the first matching shortcut's action, at most once per key press.
    ///
    pub fn dispatch(&self, event: &KeyInput, in_text_entry: bool, ctx: &mut C) -> Dispatch {
        match self.find(event, in_text_entry) {
            Some(shortcut) => {
                debug!(
                    "Shortcut '{}' matched {:?} (text entry: {}).",
                    shortcut.id, event.key, in_text_entry
                );
                shortcut.invoke(ctx);
                Dispatch::Handled
            }
            None => Dispatch::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{ShortcutCategory, ShortcutModifiers};

    #[derive(Default)]
    struct Fired {
        ids: Vec<&'static str>,
    }

    fn shortcut(id: &'static str, key: &str) -> KeyboardShortcut<Fired> {
        KeyboardShortcut::new(id, key, id, ShortcutCategory::General, move |f: &mut Fired| {
            f.ids.push(id)
        })
    }

    #[test]
    fn primary_shortcut_fires_once_with_ctrl_only() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe(
            "app",
            vec![shortcut("search", "k").modifiers(ShortcutModifiers::PRIMARY)],
        );
        let mut fired = Fired::default();

        let outcome = dispatcher.dispatch(&KeyInput::new("k").with_ctrl(), false, &mut fired);
        assert_eq!(outcome, Dispatch::Handled);
        assert_eq!(fired.ids, vec!["search"]);

        let outcome = dispatcher.dispatch(&KeyInput::new("k"), false, &mut fired);
        assert_eq!(outcome, Dispatch::Ignored);
        assert_eq!(fired.ids, vec!["search"]);
    }

    #[test]
    fn first_registered_wins() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe("app", vec![shortcut("first", "x"), shortcut("second", "x")]);
        dispatcher.subscribe("page", vec![shortcut("third", "x")]);
        let mut fired = Fired::default();
        dispatcher.dispatch(&KeyInput::new("x"), false, &mut fired);
        assert_eq!(fired.ids, vec!["first"]);
    }

    #[test]
    fn text_entry_only_considers_global_shortcuts() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe("page", vec![shortcut("local", "/")]);
        let mut fired = Fired::default();

        let outcome = dispatcher.dispatch(&KeyInput::new("/"), true, &mut fired);
        assert_eq!(outcome, Dispatch::Ignored);
        assert!(fired.ids.is_empty());

        dispatcher.subscribe("page", vec![shortcut("global", "/").global()]);
        let outcome = dispatcher.dispatch(&KeyInput::new("/"), true, &mut fired);
        assert_eq!(outcome, Dispatch::Handled);
        assert_eq!(fired.ids, vec!["global"]);
    }

    #[test]
    fn text_entry_skips_earlier_local_match_for_later_global() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe(
            "app",
            vec![shortcut("local", "Escape"), shortcut("global", "Escape").global()],
        );
        let mut fired = Fired::default();
        dispatcher.dispatch(&KeyInput::new("Escape"), true, &mut fired);
        dispatcher.dispatch(&KeyInput::new("Escape"), false, &mut fired);
        assert_eq!(fired.ids, vec!["global", "local"]);
    }

    #[test]
    fn resubscribing_replaces_instead_of_stacking() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe("page", vec![shortcut("one", "a")]);
        dispatcher.subscribe("page", vec![shortcut("two", "a")]);
        assert_eq!(dispatcher.scope_names(), vec!["page"]);
        assert_eq!(dispatcher.active_shortcuts().count(), 1);

        let mut fired = Fired::default();
        dispatcher.dispatch(&KeyInput::new("a"), false, &mut fired);
        assert_eq!(fired.ids, vec!["two"]);
    }

    #[test]
    fn unsubscribe_tears_down_scope() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe("app", vec![shortcut("quit", "q")]);
        dispatcher.subscribe("page", vec![shortcut("next", "j")]);
        dispatcher.unsubscribe("page");
        dispatcher.unsubscribe("missing");
        assert!(!dispatcher.is_subscribed("page"));
        assert!(dispatcher.is_subscribed("app"));

        let mut fired = Fired::default();
        assert_eq!(
            dispatcher.dispatch(&KeyInput::new("j"), false, &mut fired),
            Dispatch::Ignored
        );
    }

    #[test]
    fn find_does_not_invoke() {
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.subscribe("app", vec![shortcut("help", "?")]);
        let found = dispatcher.find(&KeyInput::new("?"), false).map(|s| s.id.clone());
        assert_eq!(found.as_deref(), Some("help"));
    }
}
