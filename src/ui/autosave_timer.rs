use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use super::messages::Message;

/// Repeating FLTK timeout that posts `Message::AutoSaveTick`. The callback
/// runs on the UI thread, so the tick is handled with the other messages.
pub struct AutoSaveTimer {
    handle: Option<TimeoutHandle>,
}

impl AutoSaveTimer {
    pub fn start(interval: Duration, sender: Sender<Message>) -> Self {
        let secs = timeout_secs(interval);
        let handle = app::add_timeout3(secs, move |handle| {
            sender.send(Message::AutoSaveTick);
            app::repeat_timeout3(secs, handle);
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Remove the timeout. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            app::remove_timeout3(handle);
        }
    }
}

/// FLTK timeouts take seconds as `f64`; never schedule faster than 1 s.
fn timeout_secs(interval: Duration) -> f64 {
    interval.as_secs_f64().max(1.0)
}
