//! Delivery of reminders to the user.

use parking_lot::Mutex;
use tracing::info;

/// Fire-and-forget notification sink.
///
/// Implementations deal with their own failures; nothing is reported back.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str) {
        info!(title, message, "reminder");
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(title, message)` pairs in delivery order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.sent.lock().push((title.to_string(), message.to_string()));
    }
}
