//! State management-specific error types.

use crate::preferences::PreferenceError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The network thread is gone, so no fetch can be issued
    #[error("Network handler unavailable")]
    NetworkUnavailable,

    /// A preference change could not be persisted
    #[error("Failed to persist preference: {0}")]
    Preference(#[from] PreferenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::NetworkUnavailable;
        assert!(error.to_string().contains("Network handler unavailable"));

        let error: StateError = PreferenceError::SerializationFailed("yaml".to_string()).into();
        assert!(matches!(error, StateError::Preference(_)));
        assert!(error.to_string().contains("persist preference"));
    }
}
