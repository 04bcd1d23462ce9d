//! Periodic auto-save.
//!
//! The scheduler owns no timer. The GUI's toolkit timeout posts
//! `Command::AutoSaveTick` on the owner thread, which then calls
//! [`AutoSaveScheduler::tick`] with exclusive access to the active document.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::domain::document::Document;
use crate::app::domain::settings::AppSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSaveState {
    /// No target path yet.
    Idle,
    /// The document has a path and may be written to it.
    Armed(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSaveOutcome {
    Disabled,
    Idle,
    Clean,
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AutoSaveScheduler {
    interval: Duration,
    enabled: bool,
}

impl AutoSaveScheduler {
    pub fn new(interval: Duration, enabled: bool) -> Self {
        Self { interval, enabled }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.auto_save_interval(), settings.auto_save_enabled)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state_for(doc: &Document) -> AutoSaveState {
        match doc.file_path {
            Some(ref path) => AutoSaveState::Armed(path.clone()),
            None => AutoSaveState::Idle,
        }
    }

    /// Save `doc` to its own path if it is armed and dirty. At most one
    /// write per call. A failure leaves the document dirty so the next tick
    /// retries.
    pub fn tick(&mut self, doc: &mut Document) -> AutoSaveOutcome {
        if !self.enabled {
            return AutoSaveOutcome::Disabled;
        }
        let path = match Self::state_for(doc) {
            AutoSaveState::Idle => return AutoSaveOutcome::Idle,
            AutoSaveState::Armed(path) => path,
        };
        if !doc.is_dirty() {
            return AutoSaveOutcome::Clean;
        }

        match doc.save_to(&path) {
            Ok(()) => {
                tracing::debug!("Auto-saved {}", path.display());
                AutoSaveOutcome::Saved(path)
            }
            Err(e) => {
                tracing::warn!("Auto-save failed: {}", e);
                AutoSaveOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::document::DocumentId;
    use std::fs;
    use tempfile::tempdir;

    fn scheduler() -> AutoSaveScheduler {
        AutoSaveScheduler::new(Duration::from_secs(300), true)
    }

    #[test]
    fn test_untitled_document_is_idle() {
        let mut doc = Document::new_untitled(DocumentId(0), 1);
        doc.apply_edit("unsaved");
        assert_eq!(AutoSaveScheduler::state_for(&doc), AutoSaveState::Idle);
        assert_eq!(scheduler().tick(&mut doc), AutoSaveOutcome::Idle);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_armed_after_first_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut doc = Document::new_untitled(DocumentId(0), 1);
        doc.save_to(&path).unwrap();
        assert_eq!(AutoSaveScheduler::state_for(&doc), AutoSaveState::Armed(path));
    }

    #[test]
    fn test_one_write_per_dirty_tick() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "v1").unwrap();
        let mut doc = Document::load_from(DocumentId(0), &path).unwrap();
        let mut sched = scheduler();

        assert_eq!(sched.tick(&mut doc), AutoSaveOutcome::Clean);

        doc.apply_edit("v2");
        assert_eq!(sched.tick(&mut doc), AutoSaveOutcome::Saved(path.clone()));
        assert!(!doc.is_dirty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");

        // Clean now: a second tick must not write.
        fs::write(&path, "changed behind our back").unwrap();
        assert_eq!(sched.tick(&mut doc), AutoSaveOutcome::Clean);
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed behind our back");
    }

    #[test]
    fn test_failure_keeps_document_dirty_for_retry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut doc = Document::new_untitled(DocumentId(0), 1);
        doc.save_to(&path).unwrap();
        doc.apply_edit("new");
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let mut sched = scheduler();
        assert!(matches!(sched.tick(&mut doc), AutoSaveOutcome::Failed(_)));
        assert!(doc.is_dirty());

        fs::remove_dir(&path).unwrap();
        assert_eq!(sched.tick(&mut doc), AutoSaveOutcome::Saved(path));
    }

    #[test]
    fn test_disabled_never_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut doc = Document::new_untitled(DocumentId(0), 1);
        doc.save_to(&path).unwrap();
        doc.apply_edit("x");
        let mut sched = AutoSaveScheduler::new(Duration::from_secs(1), false);
        assert_eq!(sched.tick(&mut doc), AutoSaveOutcome::Disabled);
        assert!(doc.is_dirty());
    }
}
