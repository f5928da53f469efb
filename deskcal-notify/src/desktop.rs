//! Desktop notifications through the platform notification service.

use deskcal_core::Notifier;
use deskcal_core::config::NotifyConfig;
use notify_rust::{Notification, Timeout};
use tracing::warn;

pub struct DesktopNotifier {
    app_name: String,
    timeout_ms: u32,
}

impl DesktopNotifier {
    pub fn new(config: &NotifyConfig) -> Self {
        DesktopNotifier {
            app_name: config.app_name.clone(),
            timeout_ms: config.timeout_secs.saturating_mul(1000),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) {
        let result = Notification::new()
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(self.timeout_ms))
            .show();

        if let Err(e) = result {
            warn!(error = %e, title, "could not show desktop notification");
        }
    }
}
