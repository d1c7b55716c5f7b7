//! Keyboard shortcut definitions, matching and dispatch.
//!
//! This module contains:
//! - [`KeyInput`]: a platform-neutral key press converted from crossterm
//! - [`KeyboardShortcut`]: an immutable binding of a key chord to an action
//! - [`matcher`]: the pure event/shortcut matching rule
//! - [`dispatcher`]: screen-scoped shortcut sets behind one listener

pub mod dispatcher;
pub mod matcher;

pub use dispatcher::{Dispatch, ShortcutDispatcher};
pub use matcher::{matches, matches_binding};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A single key press with its physical modifier flags.
///
/// Key names follow DOM conventions (`Enter`, `Escape`, `ArrowUp`, `F1`)
/// and printable keys carry the character itself.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyInput {
    /// Return a key press without modifiers.
    ///
    pub fn new(key: impl Into<String>) -> Self {
        KeyInput {
            key: key.into(),
            ..KeyInput::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Whether either physical key of the primary modifier class is held.
    ///
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Whether this is a Tab or Shift+Tab press with no other modifiers.
    ///
    pub fn is_tab(&self) -> bool {
        self.key.eq_ignore_ascii_case("tab") && !self.primary() && !self.alt
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        let mut shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let key = match event.code {
            KeyCode::Char(c) => {
                // Shift is already part of symbols like '?'
                if !c.is_alphabetic() {
                    shift = false;
                }
                c.to_string()
            }
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => {
                shift = true;
                "Tab".to_string()
            }
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Insert => "Insert".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };
        KeyInput {
            key,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event.modifiers.contains(KeyModifiers::SUPER)
                || event.modifiers.contains(KeyModifiers::META),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift,
        }
    }
}

/// Logical modifier set of a shortcut. `primary` stands for Ctrl or the
/// platform command key.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortcutModifiers {
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl ShortcutModifiers {
    pub const NONE: ShortcutModifiers = ShortcutModifiers {
        primary: false,
        alt: false,
        shift: false,
    };
    pub const PRIMARY: ShortcutModifiers = ShortcutModifiers {
        primary: true,
        alt: false,
        shift: false,
    };
    pub const ALT: ShortcutModifiers = ShortcutModifiers {
        primary: false,
        alt: true,
        shift: false,
    };
}

/// Grouping used by the help overlay.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutCategory {
    Navigation,
    Search,
    Results,
    General,
}

impl ShortcutCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Search => "Search",
            ShortcutCategory::Results => "Results",
            ShortcutCategory::General => "General",
        }
    }
}

/// Side effect run when a shortcut fires. The context is the explicitly
/// owned application state the dispatcher was handed.
///
pub type ShortcutAction<C> = Rc<dyn Fn(&mut C)>;

/// An immutable key binding.
///
pub struct KeyboardShortcut<C> {
    pub id: String,
    pub key: String,
    pub modifiers: ShortcutModifiers,
    pub description: String,
    pub category: ShortcutCategory,
    pub action: ShortcutAction<C>,
    pub global: bool,
}

impl<C> KeyboardShortcut<C> {
    /// Return a new non-global shortcut without modifiers.
    ///
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        description: impl Into<String>,
        category: ShortcutCategory,
        action: impl Fn(&mut C) + 'static,
    ) -> Self {
        KeyboardShortcut {
            id: id.into(),
            key: key.into(),
            modifiers: ShortcutModifiers::NONE,
            description: description.into(),
            category,
            action: Rc::new(action),
            global: false,
        }
    }

    pub fn modifiers(mut self, modifiers: ShortcutModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the shortcut as usable while a text box has focus.
    ///
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    /// Run the action against the given context.
    ///
    pub fn invoke(&self, ctx: &mut C) {
        (self.action)(ctx)
    }

    /// Return the chord as shown in help and footer text, e.g. `Ctrl+K`.
    ///
    pub fn display_chord(&self) -> String {
        format_chord(&self.key, self.modifiers)
    }
}

impl<C> Clone for KeyboardShortcut<C> {
    fn clone(&self) -> Self {
        KeyboardShortcut {
            id: self.id.clone(),
            key: self.key.clone(),
            modifiers: self.modifiers,
            description: self.description.clone(),
            category: self.category,
            action: Rc::clone(&self.action),
            global: self.global,
        }
    }
}

impl<C> fmt::Debug for KeyboardShortcut<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardShortcut")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("modifiers", &self.modifiers)
            .field("category", &self.category)
            .field("global", &self.global)
            .finish()
    }
}

/// Display data of an active shortcut, detached from its action.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutHint {
    pub chord: String,
    pub description: String,
    pub category: ShortcutCategory,
    pub global: bool,
}

impl<C> From<&KeyboardShortcut<C>> for ShortcutHint {
    fn from(shortcut: &KeyboardShortcut<C>) -> Self {
        ShortcutHint {
            chord: shortcut.display_chord(),
            description: shortcut.description.clone(),
            category: shortcut.category,
            global: shortcut.global,
        }
    }
}

/// Name of the primary modifier on the running platform.
///
pub fn primary_modifier_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd"
    } else {
        "Ctrl"
    }
}

/// Format a key and modifier set for display.
///
pub fn format_chord(key: &str, modifiers: ShortcutModifiers) -> String {
    let mut parts = Vec::new();
    if modifiers.primary {
        parts.push(primary_modifier_name().to_string());
    }
    if modifiers.alt {
        parts.push("Alt".to_string());
    }
    if modifiers.shift {
        parts.push("Shift".to_string());
    }
    let key_str = match key {
        " " => "Space".to_string(),
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        "Escape" => "Esc".to_string(),
        k if k.chars().count() == 1 && modifiers != ShortcutModifiers::NONE => {
            k.to_uppercase()
        }
        k => k.to_string(),
    };
    parts.push(key_str);
    parts.join("+")
}
