//! Error types for the desktop window manager
//!
//! Almost every failure in this crate has a silent fallback (defaults for a
//! corrupt snapshot, `mailto:` for a failed clipboard write). These types
//! cover the few operations that report an error to the host.

use crate::contact::ContactError;

/// Errors that can occur in desktop operations
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A window key did not name any registered window
    #[error("unknown window id: {0}")]
    UnknownWindow(String),

    /// The storage backend rejected a read or write
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A contact submission was rejected before sending
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),
}

/// Errors reported by a [`Storage`](crate::persistence::Storage) backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or blocked (private mode, sandboxed frame)
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend failed, e.g. on quota exhaustion
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::UnknownWindow("about-nothing".to_string());
        assert_eq!(err.to_string(), "unknown window id: about-nothing");

        let err = DesktopError::from(StorageError::Unavailable);
        assert_eq!(err.to_string(), "storage error: storage is unavailable");

        let err = StorageError::Backend("QuotaExceededError".to_string());
        assert_eq!(err.to_string(), "storage backend error: QuotaExceededError");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DesktopError = parse.into();
        assert!(matches!(err, DesktopError::Serialization(_)));
    }
}
