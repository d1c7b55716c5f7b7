//! Reusable UI widget components.
//!
//! This module contains styling utilities shared by the render modules.

pub mod styling;
