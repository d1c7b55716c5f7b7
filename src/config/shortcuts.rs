//! Shortcut binding configuration.
//!
//! Every shortcut the application defines has a stable id and a default
//! binding. The config file may override the key, modifiers and global flag
//! of any id.

use crate::shortcuts::{matches_binding, KeyInput, ShortcutModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key chord and text-entry behaviour of one shortcut.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub global: bool,
}

impl Binding {
    fn plain(key: &str) -> Self {
        Binding {
            key: key.to_string(),
            primary: false,
            alt: false,
            shift: false,
            global: false,
        }
    }

    fn primary(key: &str) -> Self {
        Binding {
            primary: true,
            ..Binding::plain(key)
        }
    }

    fn alt(key: &str) -> Self {
        Binding {
            alt: true,
            ..Binding::plain(key)
        }
    }

    fn global(mut self) -> Self {
        self.global = true;
        self
    }

    /// Return the key press this binding is triggered by.
    ///
    pub fn key_input(&self) -> KeyInput {
        KeyInput {
            key: self.key.clone(),
            ctrl: self.primary,
            meta: false,
            alt: self.alt,
            shift: self.shift,
        }
    }

    pub fn modifiers(&self) -> ShortcutModifiers {
        ShortcutModifiers {
            primary: self.primary,
            alt: self.alt,
            shift: self.shift,
        }
    }
}

/// Bindings keyed by shortcut id.
///
pub type Bindings = BTreeMap<String, Binding>;

/// Returns the default binding of every shortcut id.
///
pub fn default_bindings() -> Bindings {
    let defaults = [
        // General
        ("quit", Binding::primary("q").global()),
        ("quit-key", Binding::plain("q")),
        ("close", Binding::plain("Escape").global()),
        ("help", Binding::plain("?")),
        ("help-f1", Binding::plain("F1").global()),
        ("toggle-log", Binding::primary("l").global()),
        ("activate", Binding::plain("Enter").global()),
        ("item-next", Binding::plain("j")),
        ("item-prev", Binding::plain("k")),
        ("item-down", Binding::plain("ArrowDown").global()),
        ("item-up", Binding::plain("ArrowUp").global()),
        // Navigation
        ("back", Binding::plain("b")),
        ("back-alt", Binding::alt("ArrowLeft").global()),
        ("go-home", Binding::alt("h").global()),
        ("go-search", Binding::alt("s").global()),
        ("go-collections", Binding::alt("c").global()),
        ("go-insights", Binding::alt("i").global()),
        ("go-analytics", Binding::alt("a").global()),
        ("go-connectors", Binding::alt("o").global()),
        ("go-settings", Binding::alt("t").global()),
        ("go-profile", Binding::alt("p").global()),
        ("go-about", Binding::alt("b").global()),
        // Search
        ("command-search", Binding::primary("k").global()),
        ("focus-search", Binding::plain("/")),
        ("clear-search", Binding::plain("x")),
        ("open-result", Binding::plain("o")),
        ("copy-link", Binding::plain("y")),
        // Page lists
        ("toggle-item", Binding::plain(" ")),
    ];

    defaults
        .into_iter()
        .map(|(id, binding)| (id.to_string(), binding))
        .collect()
}

/// Apply overrides on top of the defaults. Returns the ids that are not
/// known shortcuts; those overrides are not applied.
///
pub fn merge_bindings(defaults: &mut Bindings, overrides: &Bindings) -> Vec<String> {
    let mut unknown = Vec::new();
    for (id, binding) in overrides {
        match defaults.get_mut(id) {
            Some(existing) => *existing = binding.clone(),
            None => unknown.push(id.clone()),
        }
    }
    unknown
}

/// Returns ids whose chords collide with another id in the same bindings.
/// The first-registered shortcut wins at runtime, so collisions are worth a
/// warning.
///
pub fn find_conflicts(bindings: &Bindings) -> Vec<(String, String)> {
    let entries: Vec<_> = bindings.iter().collect();
    let mut conflicts = Vec::new();
    for (i, (id_a, a)) in entries.iter().enumerate() {
        let input = a.key_input();
        for (id_b, b) in entries.iter().skip(i + 1) {
            if matches_binding(&input, &b.key, b.modifiers()) {
                conflicts.push((id_a.to_string(), id_b.to_string()));
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_have_no_conflicts() {
        let bindings = default_bindings();
        assert!(find_conflicts(&bindings).is_empty());
    }

    #[test]
    fn test_command_search_is_global_primary() {
        let bindings = default_bindings();
        let binding = &bindings["command-search"];
        assert_eq!(binding.key, "k");
        assert!(binding.primary);
        assert!(binding.global);
    }

    #[test]
    fn test_merge_bindings_applies_known_overrides() {
        let mut bindings = default_bindings();
        let mut overrides = Bindings::new();
        overrides.insert("help".to_string(), Binding::plain("h"));
        overrides.insert("teleport".to_string(), Binding::plain("t"));

        let unknown = merge_bindings(&mut bindings, &overrides);
        assert_eq!(unknown, vec!["teleport".to_string()]);
        assert_eq!(bindings["help"].key, "h");
        assert!(!bindings.contains_key("teleport"));
    }

    #[test]
    fn test_find_conflicts_ignores_key_case() {
        let mut bindings = Bindings::new();
        bindings.insert("a".to_string(), Binding::plain("K"));
        bindings.insert("b".to_string(), Binding::plain("k"));
        bindings.insert("c".to_string(), Binding::primary("k"));
        assert_eq!(
            find_conflicts(&bindings),
            vec![("a".to_string(), "b".to_string())]
        );
    }

    #[test]
    fn test_key_input_fires_own_binding() {
        for (id, binding) in default_bindings() {
            assert!(
                matches_binding(&binding.key_input(), &binding.key, binding.modifiers()),
                "{}",
                id
            );
        }
    }

    #[test]
    fn test_find_conflicts_respects_each_modifier() {
        let mut bindings = Bindings::new();
        bindings.insert("a".to_string(), Binding::alt("ArrowLeft"));
        bindings.insert("b".to_string(), Binding::alt("arrowleft"));
        bindings.insert("c".to_string(), Binding::plain("ArrowLeft"));
        bindings.insert("d".to_string(), Binding::primary("arrowleft"));
        assert_eq!(
            find_conflicts(&bindings),
            vec![("a".to_string(), "b".to_string())]
        );
    }

    #[test]
    fn test_binding_serialization() {
        let binding = Binding::primary("k").global();
        let serialized = serde_yaml::to_string(&binding).unwrap();
        assert!(serialized.contains("primary: true"));
        let deserialized: Binding = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(binding, deserialized);
    }

    #[test]
    fn test_binding_defaults_missing_flags() {
        let binding: Binding = serde_yaml::from_str("key: g\nalt: true\n").unwrap();
        assert_eq!(binding, Binding::alt("g"));
    }
}
