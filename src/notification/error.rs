//! Notification system error types.
//!
//! Delivery failures never reach the timer; they are logged by the
//! dispatcher and dropped.

use thiserror::Error;

/// Errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The desktop notification service rejected or failed the request.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// The notification had nothing to show.
    #[error("invalid notification: {0}")]
    InvalidInput(String),
}

impl NotificationError {
    /// Returns true if retrying later might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SendFailed(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => {
                "check that a notification daemon is running, or pass --no-notify"
            }
            Self::InvalidInput(_) => "notifications need a non-empty title and message",
        }
    }
}

impl From<notify_rust::error::Error> for NotificationError {
    fn from(err: notify_rust::error::Error) -> Self {
        Self::SendFailed(err.to_string())
    }
}
