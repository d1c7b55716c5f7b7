//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Terminal events: key presses routed to focus and shortcut handling
//! - Screens: the shortcut sets the app and each page subscribe

pub mod screens;
pub mod terminal;
