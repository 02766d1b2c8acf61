//! Transient user notifications
//!
//! The host application renders these however it likes (a banner, a toast,
//! a status bar); the controller only decides what to say and how severe it
//! is.

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// A user action completed
    Success,
    /// A normal but empty outcome (nothing found, nothing to clear)
    Info,
    /// A failed or rejected action
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "success"),
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// Trait representing the notification surface
pub trait Notifier: Send + Sync {
    /// Present a single-line message to the user
    fn show(&self, message: &str, level: NoticeLevel);
}

/// Notifier that routes messages to the `log` facade. Useful for headless
/// hosts and as the default when no banner surface is wired up.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, message: &str, level: NoticeLevel) {
        match level {
            NoticeLevel::Success | NoticeLevel::Info => log::info!("{}", message),
            NoticeLevel::Error => log::warn!("{}", message),
        }
    }
}
