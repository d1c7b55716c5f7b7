//! Terminal prototype of a unified search client.
//!
//! The interesting part is the coordination layer between pages, keyboard
//! focus and shortcuts:
//! - [`state::NavigationState`]: current page and bounded history
//! - [`state::FocusRegistry`]: focusable handles, focus history and traps
//! - [`state::FocusReturn`]: focus hand-off for modal surfaces
//! - [`shortcuts`]: shortcut matching and screen-scoped dispatch
//!
//! Everything else renders fabricated content around it.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod mock;
pub mod shortcuts;
pub mod state;
pub mod ui;
pub mod utils;
