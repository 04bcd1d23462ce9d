//! User-facing notification port.
//!
//! The session reports every failure and informational result through a
//! [`Notifier`]. The FLTK shell implements it with message boxes; headless
//! callers can use [`LogNotifier`], which only writes to the tracing log.

use super::error::{AppError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

pub trait Notifier {
    /// Show `message` under `title`. Implementations must tolerate being
    /// called many times in quick succession.
    fn notify(&self, level: NoticeLevel, title: &str, message: &str);

    fn info(&self, title: &str, message: &str) {
        self.notify(NoticeLevel::Info, title, message);
    }

    /// Report an error with a title derived from its kind.
    fn report(&self, context: &str, err: &AppError) {
        let title = match err.kind() {
            ErrorKind::Io => "Error",
            ErrorKind::Config => "Settings Error",
        };
        self.notify(NoticeLevel::Error, title, &format!("{}: {}", context, err));
    }
}

/// Notifier that forwards everything to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NoticeLevel, title: &str, message: &str) {
        match level {
            NoticeLevel::Info => tracing::info!("{}: {}", title, message),
            NoticeLevel::Warning => tracing::warn!("{}: {}", title, message),
            NoticeLevel::Error => tracing::error!("{}: {}", title, message),
        }
    }
}
