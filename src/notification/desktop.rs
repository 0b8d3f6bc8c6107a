//! Desktop notifications through the platform notification service.

use notify_rust::{Notification, Timeout};

use super::{NotificationError, Notifier};

/// Application name reported to the notification service.
const APP_NAME: &str = "pomato";

/// How long a notification stays on screen, in milliseconds.
const DISPLAY_TIMEOUT_MS: u32 = 10_000;

/// Sends notifications via `notify-rust` (libnotify on Linux/BSD).
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn build(title: &str, message: &str) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(DISPLAY_TIMEOUT_MS));
        notification
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        if title.trim().is_empty() || message.trim().is_empty() {
            return Err(NotificationError::InvalidInput(
                "title and message must not be empty".to_string(),
            ));
        }
        Self::build(title, message).show()?;
        Ok(())
    }
}
