//! Matching of key presses against shortcut definitions.

use super::{KeyInput, KeyboardShortcut, ShortcutModifiers};

/// Checks if a key press matches a shortcut.
///
pub fn matches<C>(event: &KeyInput, shortcut: &KeyboardShortcut<C>) -> bool {
    matches_binding(event, &shortcut.key, shortcut.modifiers)
}

/// Checks if a key press matches a key and modifier set.
///
/// Keys compare case-insensitively. Each modifier class must be held
/// exactly when the binding declares it, so a plain `k` binding does not
/// fire while Ctrl is down and a `Ctrl+K` binding does not fire without it.
/// Ctrl and Meta both satisfy the primary class.
///
pub fn matches_binding(event: &KeyInput, key: &str, modifiers: ShortcutModifiers) -> bool {
    if !keys_equal(&event.key, key) {
        return false;
    }
    event.primary() == modifiers.primary
        && event.alt == modifiers.alt
        && event.shift == modifiers.shift
}

fn keys_equal(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::ShortcutCategory;

    fn shortcut(key: &str, modifiers: ShortcutModifiers) -> KeyboardShortcut<()> {
        KeyboardShortcut::new("test", key, "Test", ShortcutCategory::General, |_| {})
            .modifiers(modifiers)
    }

    #[test]
    fn plain_key_matches_without_modifiers() {
        let s = shortcut("k", ShortcutModifiers::NONE);
        assert!(matches(&KeyInput::new("k"), &s));
        assert!(!matches(&KeyInput::new("j"), &s));
    }

    #[test]
    fn key_names_compare_case_insensitively() {
        let s = shortcut("escape", ShortcutModifiers::NONE);
        assert!(matches(&KeyInput::new("Escape"), &s));
        let s = shortcut("K", ShortcutModifiers::PRIMARY);
        assert!(matches(&KeyInput::new("k").with_ctrl(), &s));
    }

    #[test]
    fn primary_accepts_ctrl_or_meta() {
        let s = shortcut("k", ShortcutModifiers::PRIMARY);
        assert!(matches(&KeyInput::new("k").with_ctrl(), &s));
        assert!(matches(&KeyInput::new("k").with_meta(), &s));
        assert!(matches(&KeyInput::new("k").with_ctrl().with_meta(), &s));
        assert!(!matches(&KeyInput::new("k"), &s));
    }

    #[test]
    fn undeclared_modifiers_must_not_be_held() {
        let s = shortcut("k", ShortcutModifiers::NONE);
        assert!(!matches(&KeyInput::new("k").with_ctrl(), &s));
        assert!(!matches(&KeyInput::new("k").with_meta(), &s));
        assert!(!matches(&KeyInput::new("k").with_alt(), &s));
        assert!(!matches(&KeyInput::new("k").with_shift(), &s));
    }

    #[test]
    fn every_modifier_class_is_biconditional() {
        let all = ShortcutModifiers {
            primary: true,
            alt: true,
            shift: true,
        };
        let s = shortcut("p", all);
        assert!(matches(
            &KeyInput::new("P").with_ctrl().with_alt().with_shift(),
            &s
        ));
        assert!(!matches(&KeyInput::new("p").with_ctrl().with_alt(), &s));
        assert!(!matches(&KeyInput::new("p").with_ctrl().with_shift(), &s));
        assert!(!matches(&KeyInput::new("p").with_alt().with_shift(), &s));
    }

    #[test]
    fn matching_is_referentially_transparent() {
        let s = shortcut("k", ShortcutModifiers::PRIMARY);
        let hit = KeyInput::new("k").with_ctrl();
        let miss = KeyInput::new("k");
        let first: Vec<bool> = (0..5).map(|_| matches(&hit, &s)).collect();
        let interleaved: Vec<bool> = (0..5)
            .map(|_| {
                matches(&miss, &s);
                matches(&hit, &s)
            })
            .collect();
        assert_eq!(first, vec![true; 5]);
        assert_eq!(interleaved, first);
    }
}
