use fltk::dialog;

use ink_pad::app::{NoticeLevel, Notifier};

/// Shows notices as FLTK message boxes. Warnings (auto-save failures) only
/// go to the log; the shell marks them in the window title.
pub struct FltkNotifier;

impl Notifier for FltkNotifier {
    fn notify(&self, level: NoticeLevel, title: &str, message: &str) {
        match level {
            NoticeLevel::Info => dialog::message_default(message),
            NoticeLevel::Warning => tracing::warn!("{}: {}", title, message),
            NoticeLevel::Error => dialog::alert_default(&format!("{}\n\n{}", title, message)),
        }
    }
}
