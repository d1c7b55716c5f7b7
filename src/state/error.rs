//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A page name that is not part of the page set
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// A shortcut id that no screen defines
    #[error("Unknown shortcut: {0}")]
    UnknownShortcut(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::UnknownPage("dashboard".to_string());
        assert!(error.to_string().contains("Unknown page"));
        assert!(error.to_string().contains("dashboard"));

        let error = StateError::UnknownShortcut("go-nowhere".to_string());
        assert!(error.to_string().contains("Unknown shortcut"));
        assert!(error.to_string().contains("go-nowhere"));
    }
}
