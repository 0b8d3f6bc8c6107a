//! Notification delivery for timer events.
//!
//! The timer only returns [`TimerEvent::NotifyRequested`] values; this module
//! turns them into user-visible notifications:
//!
//! - [`Notifier`]: the delivery interface
//! - [`DesktopNotifier`]: platform notifications via `notify-rust`
//! - [`LogNotifier`]: writes to the log instead (`--no-notify`)
//! - [`MockNotifier`]: records calls for tests
//! - [`NotificationDispatcher`]: delivers off the render loop
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pomato::engine::TimerEvent;
//! use pomato::notification::{DesktopNotifier, NotificationDispatcher};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dispatcher = NotificationDispatcher::new(Arc::new(DesktopNotifier::new()));
//! let events = [TimerEvent::NotifyRequested {
//!     title: "Pomato".to_string(),
//!     message: "Time to Work!".to_string(),
//! }];
//! for handle in dispatcher.dispatch(&events) {
//!     let _ = handle.await;
//! }
//! # }
//! ```

mod desktop;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

pub use self::desktop::DesktopNotifier;
pub use self::error::NotificationError;

use crate::engine::TimerEvent;

/// Delivers a titled message to the user.
///
/// Implementations may block; callers that must stay responsive go through
/// [`NotificationDispatcher`].
pub trait Notifier: Send + Sync {
    /// Shows one notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

/// Delivers one notification, logging instead of returning failures.
///
/// Returns true if the notifier accepted it.
pub fn deliver(notifier: &dyn Notifier, title: &str, message: &str) -> bool {
    match notifier.notify(title, message) {
        Ok(()) => {
            tracing::debug!(title, message, "notification delivered");
            true
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                transient = e.is_transient(),
                suggestion = e.suggestion(),
                "notification dropped"
            );
            false
        }
    }
}

// ============================================================================
// NotificationDispatcher
// ============================================================================

/// Fans notification requests out to blocking tasks.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Starts delivery of every `NotifyRequested` in `events`.
    ///
    /// Must be called from within a tokio runtime. The returned handles may be
    /// dropped; delivery continues in the background.
    pub fn dispatch(&self, events: &[TimerEvent]) -> Vec<JoinHandle<bool>> {
        events
            .iter()
            .filter_map(|event| match event {
                TimerEvent::NotifyRequested { title, message } => {
                    Some((title.clone(), message.clone()))
                }
                TimerEvent::PhaseEntered { .. } => None,
            })
            .map(|(title, message)| {
                let notifier = Arc::clone(&self.notifier);
                tokio::task::spawn_blocking(move || deliver(notifier.as_ref(), &title, &message))
            })
            .collect()
    }
}

// ============================================================================
// LogNotifier
// ============================================================================

/// Records notifications in the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        tracing::info!(title, message, "notification (desktop delivery disabled)");
        Ok(())
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<(String, String)>>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Returns the `(title, message)` pairs delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("mock failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;

    fn request(message: &str) -> TimerEvent {
        TimerEvent::NotifyRequested {
            title: "Pomato".to_string(),
            message: message.to_string(),
        }
    }

    mod deliver_tests {
        use super::*;

        #[test]
        fn test_deliver_success() {
            let mock = MockNotifier::new();

            assert!(deliver(&mock, "Pomato", "Time to Work!"));
            assert_eq!(
                mock.sent(),
                vec![("Pomato".to_string(), "Time to Work!".to_string())]
            );
        }

        #[test]
        fn test_deliver_failure_is_swallowed() {
            let mock = MockNotifier::new();
            mock.set_should_fail(true);

            assert!(!deliver(&mock, "Pomato", "Time to Work!"));
            assert_eq!(mock.sent_count(), 0);
        }

        #[test]
        fn test_log_notifier_always_succeeds() {
            assert!(deliver(&LogNotifier, "Pomato", "Time for a pause."));
        }
    }

    mod dispatcher_tests {
        use super::*;

        #[tokio::test]
        async fn test_dispatch_only_notification_requests() {
            let mock = Arc::new(MockNotifier::new());
            let dispatcher = NotificationDispatcher::new(mock.clone());
            let events = vec![
                TimerEvent::PhaseEntered {
                    phase: Phase::ShortBreak,
                },
                request("Time for a pause."),
            ];

            let handles = dispatcher.dispatch(&events);
            assert_eq!(handles.len(), 1);
            for handle in handles {
                assert!(handle.await.unwrap());
            }

            assert_eq!(
                mock.sent(),
                vec![("Pomato".to_string(), "Time for a pause.".to_string())]
            );
        }

        #[tokio::test]
        async fn test_dispatch_nothing_for_phase_changes() {
            let mock = Arc::new(MockNotifier::new());
            let dispatcher = NotificationDispatcher::new(mock.clone());

            let handles = dispatcher.dispatch(&[TimerEvent::PhaseEntered { phase: Phase::Idle }]);

            assert!(handles.is_empty());
            assert_eq!(mock.sent_count(), 0);
        }

        #[tokio::test]
        async fn test_dispatch_failure_reports_false() {
            let mock = Arc::new(MockNotifier::new());
            mock.set_should_fail(true);
            let dispatcher = NotificationDispatcher::new(mock.clone());

            let handles = dispatcher.dispatch(&[request("Time to Work!")]);

            for handle in handles {
                assert!(!handle.await.unwrap());
            }
        }
    }
}
