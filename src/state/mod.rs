//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that owns navigation, focus and page data
//! - Navigation state machine and its bounded history
//! - Focus registry and focus return for modal surfaces
//! - State error handling

mod error;
mod focus;
mod focus_return;
mod history;
mod navigation;

pub use error::StateError;
pub use focus::{ActiveElement, FocusHandle, FocusNode, FocusOptions, FocusRegistry, NodeKind};
pub use focus_return::FocusReturn;
pub use history::HistoryRing;
pub use navigation::{NavigationState, PageId, MAX_HISTORY};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

/// Focus ids of the widgets the application mounts.
pub mod ids {
    pub const PAGE: &str = "page";
    pub const SIDEBAR: &str = "sidebar";
    pub const SEARCH_INPUT: &str = "search-input";
    pub const RESULTS: &str = "results";
    pub const PAGE_BODY: &str = "page-body";
    pub const RESULT_DIALOG: &str = "result-dialog";
    pub const DIALOG_OPEN: &str = "dialog-open";
    pub const DIALOG_COPY: &str = "dialog-copy";
    pub const DIALOG_CLOSE: &str = "dialog-close";
    pub const HELP: &str = "help";
    pub const HELP_LIST: &str = "help-list";
}
