//! Shared helpers that do not belong to a single module.

pub mod clipboard;
pub mod text_processing;
