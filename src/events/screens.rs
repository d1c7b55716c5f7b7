//! Shortcut sets of the application and its pages.
//!
//! The app scope is active for the whole session. Each page contributes its
//! own scope, swapped whenever the current page changes.

use crate::config::Bindings;
use crate::shortcuts::{KeyboardShortcut, ShortcutCategory};
use crate::state::{PageId, State, StateError};
use log::*;

/// Scope holding shortcuts that work on every page.
pub const APP_SCOPE: &str = "app";

/// Pages reachable with a `go-*` shortcut, in help order.
const GO_TO_PAGES: [(&str, PageId); 9] = [
    ("go-home", PageId::Home),
    ("go-search", PageId::Search),
    ("go-collections", PageId::Collections),
    ("go-insights", PageId::Insights),
    ("go-analytics", PageId::Analytics),
    ("go-connectors", PageId::Connectors),
    ("go-settings", PageId::Settings),
    ("go-profile", PageId::Profile),
    ("go-about", PageId::About),
];

/// Return the scope name of a page.
///
pub fn page_scope(page: PageId) -> String {
    format!("page:{}", page)
}

/// Build a shortcut from its configured binding. Ids without a binding are
/// skipped.
///
fn bind(
    bindings: &Bindings,
    id: &str,
    description: &str,
    category: ShortcutCategory,
    action: impl Fn(&mut State) + 'static,
) -> Option<KeyboardShortcut<State>> {
    let binding = match bindings.get(id) {
        Some(binding) => binding,
        None => {
            warn!("{}", StateError::UnknownShortcut(id.to_string()));
            return None;
        }
    };
    let shortcut = KeyboardShortcut::new(id, binding.key.as_str(), description, category, action)
        .modifiers(binding.modifiers());
    Some(if binding.global {
        shortcut.global()
    } else {
        shortcut
    })
}

/// Return the shortcuts that are active on every page.
///
pub fn app_shortcuts(bindings: &Bindings) -> Vec<KeyboardShortcut<State>> {
    use ShortcutCategory::*;

    let mut shortcuts = vec![
        bind(bindings, "quit", "Quit", General, |s| {
            s.quit();
        }),
        bind(bindings, "quit-key", "Quit", General, |s| {
            s.quit();
        }),
        bind(bindings, "close", "Close overlay", General, |s| {
            s.close();
        }),
        bind(bindings, "help", "Toggle help", General, |s| {
            s.toggle_help();
        }),
        bind(bindings, "help-f1", "Toggle help", General, |s| {
            s.toggle_help();
        }),
        bind(bindings, "toggle-log", "Toggle log panel", General, |s| {
            s.toggle_log();
        }),
        bind(bindings, "activate", "Select", General, |s| {
            s.activate();
        }),
        bind(bindings, "item-next", "Next item", General, |s| {
            s.next_item();
        }),
        bind(bindings, "item-prev", "Previous item", General, |s| {
            s.previous_item();
        }),
        bind(bindings, "item-down", "Next item", General, |s| {
            s.next_item();
        }),
        bind(bindings, "item-up", "Previous item", General, |s| {
            s.previous_item();
        }),
        bind(bindings, "back", "Go back", Navigation, |s| {
            s.go_back();
        }),
        bind(bindings, "back-alt", "Go back", Navigation, |s| {
            s.go_back();
        }),
        bind(bindings, "command-search", "Search everything", Search, |s| {
            s.focus_search();
        }),
        bind(bindings, "focus-search", "Focus search box", Search, |s| {
            s.focus_search();
        }),
    ];

    for (id, page) in GO_TO_PAGES {
        let description = format!("Go to {}", page.title());
        shortcuts.push(bind(bindings, id, &description, Navigation, move |s| {
            s.navigate_to(page, true);
        }));
    }

    shortcuts.into_iter().flatten().collect()
}

/// Return the shortcuts that only apply to the given page.
///
pub fn page_shortcuts(page: PageId, bindings: &Bindings) -> Vec<KeyboardShortcut<State>> {
    use ShortcutCategory::*;

    let shortcuts = match page {
        PageId::Search => vec![
            bind(bindings, "clear-search", "Clear query", Search, |s| {
                s.clear_search();
            }),
            bind(bindings, "open-result", "Open result", Results, |s| {
                s.open_result();
            }),
            bind(bindings, "copy-link", "Copy link", Results, |s| {
                s.copy_link();
            }),
        ],
        _ => vec![bind(bindings, "toggle-item", "Toggle item", General, |s| {
            s.toggle_item();
        })],
    };

    shortcuts.into_iter().flatten().collect()
}
