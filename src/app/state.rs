use std::ops::Range;
use std::path::{Path, PathBuf};

use super::controllers::autosave::{AutoSaveOutcome, AutoSaveScheduler};
use super::controllers::tabs::TabManager;
use super::domain::command::{Command, CommandOutcome};
use super::domain::document::{Document, DocumentId};
use super::domain::formatting::StyleAttribute;
use super::domain::settings::{AppSettings, FontSetting};
use super::domain::theme::ThemeId;
use super::infrastructure::error::AppError;
use super::infrastructure::notifier::{NoticeLevel, Notifier};
use super::services::pdf::{self, PageLayout, PdfRenderer, TextPdfRenderer};
use super::services::search::{self, SearchOutcome};
use super::services::settings::SettingsPort;
use super::services::theme::ThemeStore;

/// Owns the open documents and routes every command to the active one.
///
/// All mutation happens on the thread that owns the session. Errors never
/// escape: they are reported through the [`Notifier`] and turned into
/// [`CommandOutcome::Failed`].
pub struct SessionManager {
    tabs: TabManager,
    settings: AppSettings,
    theme: ThemeStore,
    autosave: AutoSaveScheduler,
    pdf: Box<dyn PdfRenderer>,
    notifier: Box<dyn Notifier>,
    shut_down: bool,
}

impl SessionManager {
    /// Start a session with one blank document.
    pub fn new(
        settings: AppSettings,
        store: Box<dyn SettingsPort>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let pdf = Box::new(TextPdfRenderer::new(PageLayout::from_settings(&settings)));
        let autosave = AutoSaveScheduler::from_settings(&settings);
        let theme = ThemeStore::load(store);

        let mut session = Self {
            tabs: TabManager::new(),
            settings,
            theme,
            autosave,
            pdf,
            notifier,
            shut_down: false,
        };
        session.new_document();
        session
    }

    pub fn with_pdf_renderer(mut self, renderer: Box<dyn PdfRenderer>) -> Self {
        self.pdf = renderer;
        self
    }

    /// Single dispatch entry point for user intents and timer ticks.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        if self.shut_down {
            return CommandOutcome::Unchanged;
        }

        match command {
            Command::NewDocument => CommandOutcome::Created(self.new_document()),
            Command::OpenDocument(path) => self.open_document(&path),
            Command::CloseDocument(id) => self.close_document(id),
            Command::CloseActive => match self.tabs.active_id() {
                Some(id) => self.close_document(id),
                None => CommandOutcome::Unchanged,
            },
            Command::SaveActive(path) => self.save_active(path.as_deref()),
            Command::ExportActivePdf(path) => self.export_active_pdf(&path),
            Command::Activate(id) => self.activate(id),
            Command::ActivateNext => match self.tabs.next_doc_id() {
                Some(id) => self.activate(id),
                None => CommandOutcome::Unchanged,
            },
            Command::ActivatePrevious => match self.tabs.prev_doc_id() {
                Some(id) => self.activate(id),
                None => CommandOutcome::Unchanged,
            },
            Command::EditActive(text) => self.edit_active(&text),
            Command::SetSelection(range) => self.set_selection(range),
            Command::Find(query) => CommandOutcome::Search(self.find(&query)),
            Command::FindNext(query) => CommandOutcome::Search(self.find_next(&query)),
            Command::ClearHighlights => {
                if let Some(doc) = self.tabs.active_doc_mut() {
                    doc.clear_highlights();
                }
                CommandOutcome::Unchanged
            }
            Command::ToggleStyle(attr) => self.toggle_style(attr),
            Command::SetFont(font) => self.set_font(font),
            Command::ToggleTheme => CommandOutcome::ThemeChanged(self.toggle_theme()),
            Command::AutoSaveTick => CommandOutcome::AutoSave(self.auto_save_tick()),
        }
    }

    // --- Tabs ---

    pub fn new_document(&mut self) -> DocumentId {
        let id = self.tabs.add_untitled();
        let font = self.settings.default_font();
        if let Some(doc) = self.tabs.doc_by_id_mut(id) {
            doc.font = font;
        }
        tracing::debug!("New document {:?}", id);
        id
    }

    pub fn open_document(&mut self, path: &Path) -> CommandOutcome {
        let id = self.tabs.next_document_id();
        match Document::load_from(id, path) {
            Ok(mut doc) => {
                doc.font = self.settings.default_font();
                self.tabs.push(doc);
                tracing::info!("Opened {}", path.display());
                CommandOutcome::Opened(id)
            }
            Err(e) => self.fail("Failed to open file", e),
        }
    }

    /// Close `id`. The session is never left empty: closing the last
    /// document opens a fresh blank one.
    pub fn close_document(&mut self, id: DocumentId) -> CommandOutcome {
        if self.tabs.remove(id).is_none() {
            return CommandOutcome::Unchanged;
        }
        if self.tabs.count() == 0 {
            self.new_document();
        }
        match self.tabs.active_id() {
            Some(active) => CommandOutcome::Closed { closed: id, active },
            None => CommandOutcome::Unchanged,
        }
    }

    pub fn activate(&mut self, id: DocumentId) -> CommandOutcome {
        if self.tabs.set_active(id) {
            CommandOutcome::Activated(id)
        } else {
            CommandOutcome::Unchanged
        }
    }

    // --- File operations ---

    /// Save to `path` if given, else to the document's own path. Without
    /// either, returns `PathRequired` so the caller can prompt.
    pub fn save_active(&mut self, path: Option<&Path>) -> CommandOutcome {
        let Some(doc) = self.tabs.active_doc_mut() else {
            return CommandOutcome::Unchanged;
        };
        let target: PathBuf = match path.map(Path::to_path_buf).or_else(|| doc.file_path.clone()) {
            Some(p) => p,
            None => return CommandOutcome::PathRequired,
        };

        match doc.save_to(&target) {
            Ok(()) => {
                tracing::info!("Saved {}", target.display());
                CommandOutcome::Saved(target)
            }
            Err(e) => self.fail("Failed to save file", e),
        }
    }

    pub fn export_active_pdf(&mut self, path: &Path) -> CommandOutcome {
        let Some(doc) = self.tabs.active_doc() else {
            return CommandOutcome::Unchanged;
        };

        match pdf::export_text(self.pdf.as_ref(), doc.text(), path) {
            Ok(lines) => {
                tracing::info!("Exported {} lines to {}", lines, path.display());
                CommandOutcome::Exported {
                    path: path.to_path_buf(),
                    lines,
                }
            }
            Err(e) => self.fail("PDF export failed", e),
        }
    }

    // --- Editing ---

    pub fn edit_active(&mut self, text: &str) -> CommandOutcome {
        match self.tabs.active_doc_mut() {
            Some(doc) => {
                doc.apply_edit(text);
                CommandOutcome::Edited {
                    dirty: doc.is_dirty(),
                }
            }
            None => CommandOutcome::Unchanged,
        }
    }

    pub fn set_selection(&mut self, range: Range<usize>) -> CommandOutcome {
        match self.tabs.active_doc_mut() {
            Some(doc) => {
                doc.set_selection(range);
                CommandOutcome::SelectionChanged
            }
            None => CommandOutcome::Unchanged,
        }
    }

    pub fn toggle_style(&mut self, attribute: StyleAttribute) -> CommandOutcome {
        match self.tabs.active_doc_mut() {
            Some(doc) => CommandOutcome::StyleToggled {
                attribute,
                on: doc.toggle_style_at_selection(attribute),
            },
            None => CommandOutcome::Unchanged,
        }
    }

    pub fn set_font(&mut self, font: FontSetting) -> CommandOutcome {
        match self.tabs.active_doc_mut() {
            Some(doc) => {
                doc.font = font;
                CommandOutcome::FontChanged
            }
            None => CommandOutcome::Unchanged,
        }
    }

    // --- Search ---

    /// Highlight every match in the active document. A miss is reported as
    /// an informational notice, not an error.
    pub fn find(&mut self, query: &str) -> SearchOutcome {
        let Some(doc) = self.tabs.active_doc_mut() else {
            return SearchOutcome::NotFound;
        };
        let count = search::highlight_all(doc, query);
        if count == 0 {
            self.not_found(query);
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found { count }
        }
    }

    /// Select the next match after the current selection, wrapping once.
    pub fn find_next(&mut self, query: &str) -> SearchOutcome {
        let Some(doc) = self.tabs.active_doc_mut() else {
            return SearchOutcome::NotFound;
        };
        let from = doc.selection().end;
        match search::find_next(doc.text(), query, from) {
            Some((range, wrapped)) => {
                doc.set_selection(range.clone());
                SearchOutcome::Next { range, wrapped }
            }
            None => {
                self.not_found(query);
                SearchOutcome::NotFound
            }
        }
    }

    fn not_found(&self, query: &str) {
        if !query.is_empty() {
            self.notifier
                .info("Find", &format!("Cannot find '{}'", query));
        }
    }

    // --- View ---

    /// Flip the theme and persist it. A storage failure is reported but the
    /// new theme stays in effect for this run.
    pub fn toggle_theme(&mut self) -> ThemeId {
        match self.theme.toggle() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Could not persist theme: {}", e);
                self.notifier.report("Could not save theme", &e);
                self.theme.current()
            }
        }
    }

    // --- Auto-save ---

    pub fn auto_save_tick(&mut self) -> AutoSaveOutcome {
        let Some(doc) = self.tabs.active_doc_mut() else {
            return AutoSaveOutcome::Idle;
        };
        let outcome = self.autosave.tick(doc);
        if let AutoSaveOutcome::Failed(ref message) = outcome {
            self.notifier
                .notify(NoticeLevel::Warning, "Auto-Save Error", message);
        }
        outcome
    }

    /// Stop accepting commands. Returns the documents that still have
    /// unsaved changes so the caller can decide what to do with them.
    pub fn shutdown(&mut self) -> Vec<DocumentId> {
        self.shut_down = true;
        let dirty: Vec<_> = self
            .tabs
            .documents()
            .iter()
            .filter(|d| d.is_dirty())
            .map(|d| d.id)
            .collect();
        tracing::info!("Session shut down with {} unsaved document(s)", dirty.len());
        dirty
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    // --- Accessors ---

    pub fn documents(&self) -> &[Document] {
        self.tabs.documents()
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.tabs.doc_by_id(id)
    }

    pub fn active(&self) -> Option<&Document> {
        self.tabs.active_doc()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.tabs.active_id()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.active_index()
    }

    pub fn theme(&self) -> ThemeId {
        self.theme.current()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn autosave(&self) -> &AutoSaveScheduler {
        &self.autosave
    }

    fn fail(&self, context: &str, err: AppError) -> CommandOutcome {
        tracing::error!("{}: {}", context, err);
        self.notifier.report(context, &err);
        CommandOutcome::Failed(err.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::ErrorKind;
    use crate::app::services::settings::MemorySettings;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::tempdir;

    type Notes = Rc<RefCell<Vec<(NoticeLevel, String)>>>;

    struct Recorder(Notes);

    impl Notifier for Recorder {
        fn notify(&self, level: NoticeLevel, _title: &str, message: &str) {
            self.0.borrow_mut().push((level, message.to_string()));
        }
    }

    fn session() -> (SessionManager, Notes) {
        let notes = Notes::default();
        let s = SessionManager::new(
            AppSettings::default(),
            Box::new(MemorySettings::new()),
            Box::new(Recorder(notes.clone())),
        );
        (s, notes)
    }

    #[test]
    fn test_starts_with_one_blank_document() {
        let (s, _) = session();
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.active_id(), Some(DocumentId(0)));
        assert_eq!(s.active_index(), Some(0));
        assert_eq!(s.active().unwrap().text(), "");
    }

    #[test]
    fn test_new_and_close_scenario() {
        let (mut s, _) = session();
        assert_eq!(s.execute(Command::NewDocument), CommandOutcome::Created(DocumentId(1)));
        assert_eq!(s.active_index(), Some(1));
        assert_eq!(s.documents().len(), 2);

        s.execute(Command::CloseDocument(DocumentId(1)));
        assert_eq!(s.active_index(), Some(0));
        assert_eq!(s.documents().len(), 1);

        s.execute(Command::CloseDocument(DocumentId(0)));
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.active_index(), Some(0));
        let doc = s.active().unwrap();
        assert_eq!(doc.text(), "");
        assert!(!doc.is_dirty());
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_open_missing_file_leaves_session_unchanged() {
        let (mut s, notes) = session();
        let dir = tempdir().unwrap();
        let outcome = s.execute(Command::OpenDocument(dir.path().join("missing.txt")));
        assert_eq!(outcome, CommandOutcome::Failed(ErrorKind::Io));
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.active_id(), Some(DocumentId(0)));
        let notes = notes.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].0, NoticeLevel::Error);
        assert!(notes[0].1.starts_with("Failed to open file"));
    }

    #[test]
    fn test_open_appends_and_activates() {
        let (mut s, _) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "content").unwrap();

        let CommandOutcome::Opened(id) = s.execute(Command::OpenDocument(path.clone())) else {
            panic!("expected Opened");
        };
        assert_eq!(s.active_id(), Some(id));
        assert_eq!(s.documents().len(), 2);
        let doc = s.active().unwrap();
        assert_eq!(doc.text(), "content");
        assert_eq!(doc.display_name, "doc.txt");
        assert_eq!(doc.font, s.settings().default_font());
    }

    #[test]
    fn test_save_requires_path_for_untitled() {
        let (mut s, _) = session();
        s.execute(Command::EditActive("text".into()));
        assert_eq!(s.execute(Command::SaveActive(None)), CommandOutcome::PathRequired);
        assert!(s.active().unwrap().is_dirty());
    }

    #[test]
    fn test_save_then_save_again_to_own_path() {
        let (mut s, _) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        s.execute(Command::EditActive("first".into()));
        assert_eq!(
            s.execute(Command::SaveActive(Some(path.clone()))),
            CommandOutcome::Saved(path.clone())
        );
        s.execute(Command::EditActive("second".into()));
        assert_eq!(s.execute(Command::SaveActive(None)), CommandOutcome::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!s.active().unwrap().is_dirty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let (mut s, notes) = session();
        let dir = tempdir().unwrap();
        let bad = dir.path().join("nope").join("x.txt");
        assert_eq!(
            s.execute(Command::SaveActive(Some(bad))),
            CommandOutcome::Failed(ErrorKind::Io)
        );
        assert_eq!(notes.borrow().len(), 1);
    }

    #[test]
    fn test_find_highlights_or_notifies() {
        let (mut s, notes) = session();
        s.execute(Command::EditActive("abcabc".into()));
        assert_eq!(
            s.execute(Command::Find("abc".into())),
            CommandOutcome::Search(SearchOutcome::Found { count: 2 })
        );
        assert_eq!(s.active().unwrap().highlights(), &[0..3, 3..6]);
        assert!(notes.borrow().is_empty());

        assert_eq!(
            s.execute(Command::Find("xyz".into())),
            CommandOutcome::Search(SearchOutcome::NotFound)
        );
        let notes = notes.borrow();
        assert_eq!(notes[0].0, NoticeLevel::Info);
        assert_eq!(notes[0].1, "Cannot find 'xyz'");
    }

    #[test]
    fn test_find_next_moves_selection() {
        let (mut s, _) = session();
        s.execute(Command::EditActive("cat dog cat".into()));
        s.execute(Command::SetSelection(0..0));
        assert_eq!(
            s.execute(Command::FindNext("cat".into())),
            CommandOutcome::Search(SearchOutcome::Next { range: 0..3, wrapped: false })
        );
        assert_eq!(
            s.execute(Command::FindNext("cat".into())),
            CommandOutcome::Search(SearchOutcome::Next { range: 8..11, wrapped: false })
        );
        assert_eq!(
            s.execute(Command::FindNext("cat".into())),
            CommandOutcome::Search(SearchOutcome::Next { range: 0..3, wrapped: true })
        );
        assert_eq!(s.active().unwrap().selection(), 0..3);
    }

    #[test]
    fn test_toggle_style_uses_selection() {
        let (mut s, _) = session();
        s.execute(Command::EditActive("hello world".into()));
        s.execute(Command::SetSelection(0..5));
        assert_eq!(
            s.execute(Command::ToggleStyle(StyleAttribute::Bold)),
            CommandOutcome::StyleToggled { attribute: StyleAttribute::Bold, on: true }
        );
        assert!(s.active().unwrap().styles().is_fully_active(StyleAttribute::Bold, 0..5));
        s.execute(Command::ToggleStyle(StyleAttribute::Bold));
        assert!(!s.active().unwrap().styles().style_at(0).bold);
    }

    #[test]
    fn test_toggle_theme_persists_through_port() {
        let notes = Notes::default();
        let mut s = SessionManager::new(
            AppSettings::default(),
            Box::new(MemorySettings::new()),
            Box::new(Recorder(notes.clone())),
        );
        assert_eq!(s.theme(), ThemeId::Light);
        assert_eq!(s.execute(Command::ToggleTheme), CommandOutcome::ThemeChanged(ThemeId::Dark));
        assert_eq!(s.execute(Command::ToggleTheme), CommandOutcome::ThemeChanged(ThemeId::Light));
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn test_auto_save_tick_targets_active_document() {
        let (mut s, _) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("auto.txt");

        assert_eq!(
            s.execute(Command::AutoSaveTick),
            CommandOutcome::AutoSave(AutoSaveOutcome::Idle)
        );

        s.execute(Command::SaveActive(Some(path.clone())));
        s.execute(Command::EditActive("draft".into()));
        assert_eq!(
            s.execute(Command::AutoSaveTick),
            CommandOutcome::AutoSave(AutoSaveOutcome::Saved(path.clone()))
        );
        assert_eq!(
            s.execute(Command::AutoSaveTick),
            CommandOutcome::AutoSave(AutoSaveOutcome::Clean)
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "draft");
    }

    #[test]
    fn test_auto_save_failure_is_a_warning() {
        let (mut s, notes) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("auto.txt");
        s.execute(Command::SaveActive(Some(path.clone())));
        s.execute(Command::EditActive("draft".into()));
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let outcome = s.execute(Command::AutoSaveTick);
        assert!(matches!(outcome, CommandOutcome::AutoSave(AutoSaveOutcome::Failed(_))));
        assert_eq!(notes.borrow()[0].0, NoticeLevel::Warning);
        assert!(s.active().unwrap().is_dirty());
    }

    #[test]
    fn test_tab_cycling_and_activate() {
        let (mut s, _) = session();
        s.execute(Command::NewDocument);
        s.execute(Command::NewDocument);
        assert_eq!(s.execute(Command::ActivateNext), CommandOutcome::Activated(DocumentId(0)));
        assert_eq!(s.execute(Command::ActivatePrevious), CommandOutcome::Activated(DocumentId(2)));
        assert_eq!(s.execute(Command::Activate(DocumentId(1))), CommandOutcome::Activated(DocumentId(1)));
        assert_eq!(s.execute(Command::Activate(DocumentId(7))), CommandOutcome::Unchanged);
    }

    #[test]
    fn test_set_font_applies_to_active_only() {
        let (mut s, _) = session();
        s.execute(Command::NewDocument);
        let font = FontSetting {
            family: "Courier".into(),
            size: 18,
        };
        s.execute(Command::SetFont(font.clone()));
        assert_eq!(s.active().unwrap().font, font);
        assert_ne!(s.document(DocumentId(0)).unwrap().font, font);
    }

    #[test]
    fn test_shutdown_reports_dirty_and_stops() {
        let (mut s, _) = session();
        s.execute(Command::EditActive("unsaved".into()));
        assert_eq!(s.shutdown(), vec![DocumentId(0)]);
        assert!(s.is_shut_down());
        assert_eq!(s.execute(Command::NewDocument), CommandOutcome::Unchanged);
        assert_eq!(s.documents().len(), 1);
    }

    #[test]
    fn test_late_auto_save_tick_after_shutdown_writes_nothing() {
        let (mut s, _) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("late.txt");
        s.execute(Command::SaveActive(Some(path.clone())));
        s.execute(Command::EditActive("after save".into()));

        s.shutdown();
        assert_eq!(s.execute(Command::AutoSaveTick), CommandOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(s.active().unwrap().is_dirty());
    }

    #[test]
    fn test_theme_survives_restart_with_json_store() {
        use crate::app::services::settings::JsonSettingsStore;

        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        {
            let mut s = SessionManager::new(
                AppSettings::default(),
                Box::new(JsonSettingsStore::open(&path)),
                Box::new(Recorder(Notes::default())),
            );
            s.execute(Command::ToggleTheme);
        }

        let notes = Notes::default();
        let s = SessionManager::new(
            AppSettings::default(),
            Box::new(JsonSettingsStore::open(&path)),
            Box::new(Recorder(notes.clone())),
        );
        assert_eq!(s.theme(), ThemeId::Dark);
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn test_export_pdf_writes_file() {
        let (mut s, _) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        s.execute(Command::EditActive("one\ntwo\nthree".into()));

        assert_eq!(
            s.execute(Command::ExportActivePdf(path.clone())),
            CommandOutcome::Exported { path: path.clone(), lines: 3 }
        );
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // Exporting does not touch the document.
        assert!(s.active().unwrap().is_dirty());
    }

    #[test]
    fn test_export_pdf_to_bad_path_fails() {
        let (mut s, notes) = session();
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");

        assert_eq!(
            s.execute(Command::ExportActivePdf(path.clone())),
            CommandOutcome::Failed(ErrorKind::Io)
        );
        assert!(!path.exists());
        assert_eq!(notes.borrow()[0].0, NoticeLevel::Error);
    }

    #[test]
    fn test_typing_after_pending_style() {
        let (mut s, _) = session();
        s.execute(Command::EditActive("ab".into()));
        s.execute(Command::ToggleStyle(StyleAttribute::Italic));
        s.execute(Command::EditActive("abc".into()));
        s.execute(Command::SetSelection(3..3));
        s.execute(Command::EditActive("abcd".into()));

        let doc = s.active().unwrap();
        assert!(!doc.styles().style_at(1).italic);
        assert!(doc.styles().style_at(2).italic);
        assert!(doc.styles().style_at(3).italic);
    }

    #[test]
    fn test_renderer_failure_is_reported() {
        struct FailingRenderer;

        impl PdfRenderer for FailingRenderer {
            fn render(&self, _lines: &[String]) -> Result<Vec<u8>, AppError> {
                Err(AppError::Pdf("no fonts".into()))
            }
        }

        let notes = Notes::default();
        let mut s = SessionManager::new(
            AppSettings::default(),
            Box::new(MemorySettings::new()),
            Box::new(Recorder(notes.clone())),
        )
        .with_pdf_renderer(Box::new(FailingRenderer));
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        assert_eq!(
            s.execute(Command::ExportActivePdf(path.clone())),
            CommandOutcome::Failed(ErrorKind::Io)
        );
        assert!(!path.exists());
        assert_eq!(notes.borrow()[0].1, "PDF export failed: PDF export error: no fonts");
    }

    #[test]
    fn test_log_notifier_session_runs_headless() {
        use crate::app::infrastructure::notifier::LogNotifier;

        let mut s = SessionManager::new(
            AppSettings::default(),
            Box::new(MemorySettings::new()),
            Box::new(LogNotifier),
        );
        assert_eq!(
            s.execute(Command::Find("nothing".into())),
            CommandOutcome::Search(SearchOutcome::NotFound)
        );
    }
}
