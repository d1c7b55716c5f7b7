//! Keyboard focus registry.
//!
//! Focusable widgets register a handle under a string id when they mount and
//! unregister it when they unmount. The registry only keeps weak references:
//! a handle that disappears without unregistering is treated like an unknown
//! id. Every lookup miss is absorbed, because widgets can unmount while other
//! code still holds their ids.

use log::*;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Something that can receive keyboard focus.
///
pub trait FocusHandle {
    /// Give this element keyboard focus.
    fn focus(&self);

    /// Take keyboard focus away from this element.
    fn blur(&self) {}

    /// Ids of focusable descendants in tab order.
    fn focusable_descendants(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether key presses on this element produce literal text.
    fn is_text_entry(&self) -> bool {
        false
    }
}

/// Options for [`FocusRegistry::set_focus`].
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusOptions {
    /// Remember the element that held focus so it can be returned to.
    pub record_previous: bool,
}

impl FocusOptions {
    pub const RECORD: FocusOptions = FocusOptions {
        record_previous: true,
    };
}

/// Snapshot of the element holding focus, taken outside the focus history.
///
#[derive(Clone)]
pub struct ActiveElement {
    id: String,
    handle: Weak<dyn FocusHandle>,
}

impl ActiveElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the element still exists.
    ///
    pub fn is_alive(&self) -> bool {
        self.handle.strong_count() > 0
    }
}

impl std::fmt::Debug for ActiveElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveElement")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Tracks focusable handles, the focused id, focus history and the trapped
/// container.
///
#[derive(Default)]
pub struct FocusRegistry {
    handles: HashMap<String, Weak<dyn FocusHandle>>,
    current: Option<String>,
    history: Vec<String>,
    trapped: Option<String>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        FocusRegistry::default()
    }

    /// Register a handle under an id, replacing any previous handle.
    ///
    pub fn register<H: FocusHandle + 'static>(&mut self, id: impl Into<String>, handle: &Rc<H>) {
        let id = id.into();
        let weak: Weak<H> = Rc::downgrade(handle);
        let weak: Weak<dyn FocusHandle> = weak;
        if self.handles.insert(id.clone(), weak).is_some() {
            trace!("Replaced focus handle '{}'.", id);
        }
    }

    /// Remove a handle. Unknown ids are ignored.
    ///
    pub fn unregister(&mut self, id: &str) {
        if self.handles.remove(id).is_some() {
            trace!("Unregistered focus handle '{}'.", id);
        }
    }

    /// Whether a live handle is registered under the id.
    ///
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    fn lookup(&self, id: &str) -> Option<Rc<dyn FocusHandle>> {
        self.handles.get(id).and_then(Weak::upgrade)
    }

    /// Return the id that currently holds focus.
    ///
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    pub fn trapped(&self) -> Option<&str> {
        self.trapped.as_deref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the focused element is a text-entry context.
    ///
    pub fn is_text_entry_active(&self) -> bool {
        self.current
            .as_deref()
            .and_then(|id| self.lookup(id))
            .map(|handle| handle.is_text_entry())
            .unwrap_or(false)
    }

    /// Move focus to the element registered under `id`. Unknown or stale
    /// ids leave the registry untouched.
    ///
    pub fn set_focus(&mut self, id: &str, options: FocusOptions) {
        let handle = match self.lookup(id) {
            Some(handle) => handle,
            None => {
                warn!("Cannot focus '{}': no such focusable element.", id);
                return;
            }
        };

        if options.record_previous {
            if let Some(previous) = &self.current {
                self.history.push(previous.clone());
            }
        }

        if let Some(previous) = self.current.as_deref().filter(|p| *p != id) {
            if let Some(previous_handle) = self.lookup(previous) {
                previous_handle.blur();
            }
        }

        handle.focus();
        debug!("Focus moved to '{}'.", id);
        self.current = Some(id.to_string());
    }

    /// Return focus to the most recently recorded element. Does nothing when
    /// no element was recorded.
    ///
    pub fn return_to_previous(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.set_focus(&previous, FocusOptions::default());
        }
    }

    /// Drop the newest recorded element if it is `id`. Used when focus went
    /// back to that element without going through the history.
    ///
    pub fn forget_previous(&mut self, id: &str) {
        if self.history.last().map(String::as_str) == Some(id) {
            self.history.pop();
        }
    }

    /// Confine Tab cycling to a container, replacing any existing trap.
    ///
    pub fn trap_focus(&mut self, container_id: impl Into<String>) {
        let container_id = container_id.into();
        if let Some(old) = self.trapped.replace(container_id.clone()) {
            if old != container_id {
                debug!("Focus trap moved from '{}' to '{}'.", old, container_id);
            }
        } else {
            debug!("Focus trapped in '{}'.", container_id);
        }
    }

    /// Lift the focus trap.
    ///
    pub fn release_focus(&mut self) {
        if let Some(old) = self.trapped.take() {
            debug!("Focus trap on '{}' released.", old);
        }
    }

    /// Handle a Tab (or Shift+Tab when `backwards`) press. Cycles through the
    /// trapped container, or `fallback` when nothing is trapped. Tab on the
    /// last descendant wraps to the first and Shift+Tab on the first wraps to
    /// the last. Returns `true` when the press was consumed.
    ///
    pub fn handle_tab(&mut self, backwards: bool, fallback: Option<&str>) -> bool {
        let container_id = match self.trapped.as_deref().or(fallback) {
            Some(id) => id.to_string(),
            None => return false,
        };
        let container = match self.lookup(&container_id) {
            Some(container) => container,
            None => return self.trapped.is_some(),
        };

        let order: Vec<String> = container
            .focusable_descendants()
            .into_iter()
            .filter(|id| self.contains(id))
            .collect();
        if order.is_empty() {
            return self.trapped.is_some();
        }

        let last = order.len() - 1;
        let position = self
            .current
            .as_ref()
            .and_then(|current| order.iter().position(|id| id == current));
        let target = match (position, backwards) {
            (Some(i), false) if i == last => 0,
            (Some(i), false) => i + 1,
            (Some(0), true) => last,
            (Some(i), true) => i - 1,
            (None, false) => 0,
            (None, true) => last,
        };
        self.set_focus(&order[target], FocusOptions::default());
        true
    }

    /// Snapshot the element that holds focus right now.
    ///
    pub fn active_element(&self) -> Option<ActiveElement> {
        let id = self.current.as_ref()?;
        let handle = self.handles.get(id)?.clone();
        Some(ActiveElement {
            id: id.clone(),
            handle,
        })
    }

    /// Give focus straight back to a snapshotted element. Returns `false`
    /// if the element no longer exists.
    ///
    pub fn restore(&mut self, element: &ActiveElement) -> bool {
        let handle = match element.handle.upgrade() {
            Some(handle) => handle,
            None => return false,
        };
        if let Some(previous) = self.current.as_deref().filter(|p| *p != element.id) {
            if let Some(previous_handle) = self.lookup(previous) {
                previous_handle.blur();
            }
        }
        handle.focus();
        debug!("Focus restored to '{}'.", element.id);
        self.current = Some(element.id.clone());
        true
    }
}

/// Kind of a focus node, used for text-entry detection and styling.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    TextInput,
    List,
    Button,
}

/// Focus handle backing a rendered widget.
///
#[derive(Debug)]
pub struct FocusNode {
    id: String,
    kind: NodeKind,
    children: Vec<String>,
    focused: Cell<bool>,
}

impl FocusNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Rc<Self> {
        Rc::new(FocusNode {
            id: id.into(),
            kind,
            children: Vec::new(),
            focused: Cell::new(false),
        })
    }

    /// Return a container whose focusable children come in the given order.
    ///
    pub fn container<I, S>(id: impl Into<String>, children: I) -> Rc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rc::new(FocusNode {
            id: id.into(),
            kind: NodeKind::Container,
            children: children.into_iter().map(Into::into).collect(),
            focused: Cell::new(false),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

impl FocusHandle for FocusNode {
    fn focus(&self) {
        self.focused.set(true);
    }

    fn blur(&self) {
        self.focused.set(false);
    }

    fn focusable_descendants(&self) -> Vec<String> {
        self.children.clone()
    }

    fn is_text_entry(&self) -> bool {
        self.kind == NodeKind::TextInput
    }
}
