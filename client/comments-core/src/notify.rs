/// User-facing notification seam
///
/// Submission outcomes surface as transient, non-blocking notices; how they
/// render (toast, banner, nothing) is the embedding client's concern.
use tracing::{error, info};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Sink for transient user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Notifier that routes notices to the log
///
/// Default wiring for headless use and tests; a real client installs its own
/// implementation over its toast system.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success | NoticeLevel::Info => info!(notice = message, "notice"),
            NoticeLevel::Error => error!(notice = message, "notice"),
        }
    }
}
