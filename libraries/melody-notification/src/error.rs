//! Error types for the notification bridge

use thiserror::Error;

/// Notification bridge errors
///
/// None of these reach the host through the presenter or the router; they
/// only travel between a backend and the presenter, and out of
/// [`crate::NotificationBridge::handle_json`].
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The OS notification subsystem rejected a request
    #[error("Notification backend error: {0}")]
    Backend(String),

    /// A method call could not be decoded
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl NotificationError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Result type for notification operations
pub type Result<T> = std::result::Result<T, NotificationError>;
