//! System clipboard access.

use crate::error::{AppError, AppResult};
use ::clipboard::{ClipboardContext, ClipboardProvider};

/// Copy text to the system clipboard.
///
pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}
