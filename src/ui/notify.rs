//! Blocking user alerts.

use tracing::warn;

/// Surfaces a blocking message to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message` and waits for the user to dismiss it.
    fn alert(&self, message: &str);
}

/// Notifier for headless hosts: alerts go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!(alert = message, "User alert");
    }
}
