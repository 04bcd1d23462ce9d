use std::path::{Path, PathBuf};

use fltk::{app::Sender, dialog, menu::MenuBar, prelude::*, window::Window};

use ink_pad::app::{
    AutoSaveOutcome, Command, CommandOutcome, DocumentId, FontSetting, SearchOutcome,
    SessionManager, StyleAttribute,
};

use super::autosave_timer::AutoSaveTimer;
use super::dialogs::find::show_find_dialog;
use super::editor_view::EditorView;
use super::file_dialogs::{native_export_dialog, native_open_dialog, native_save_dialog};
use super::main_window::MainWidgets;
use super::menu::build_menu;
use super::messages::Message;
use super::theme::apply_theme;

/// Glue between FLTK widgets and the session: turns messages into
/// commands and mirrors the active document back into the editor.
pub struct Shell {
    session: SessionManager,
    view: EditorView,
    window: Window,
    menu: MenuBar,
    sender: Sender<Message>,
    last_dir: Option<PathBuf>,
    last_query: String,
    autosave_timer: Option<AutoSaveTimer>,
    autosave_failed: bool,
}

impl Shell {
    pub fn new(session: SessionManager, widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let MainWidgets {
            wind: window,
            mut menu,
            text_editor,
            ..
        } = widgets;

        build_menu(&mut menu, &sender, session.theme());

        let font = session
            .active()
            .map(|d| d.font.clone())
            .unwrap_or_else(|| session.settings().default_font());
        let view = EditorView::new(text_editor, sender, &font, session.theme());

        let autosave_timer = if session.autosave().is_enabled() {
            let interval = session.autosave().interval();
            tracing::info!("Auto-save every {:?}", interval);
            Some(AutoSaveTimer::start(interval, sender))
        } else {
            None
        };

        let mut shell = Self {
            session,
            view,
            window,
            menu,
            sender,
            last_dir: None,
            last_query: String::new(),
            autosave_timer,
            autosave_failed: false,
        };
        shell.apply_current_theme();
        shell.show_active();
        shell
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    /// Handle one message. Returns false once the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => {
                self.session.execute(Command::NewDocument);
                self.show_active();
            }
            Message::FileOpen => self.file_open(),
            Message::FileSave => {
                self.file_save();
            }
            Message::FileSaveAs => {
                self.file_save_as();
            }
            Message::FileExportPdf => self.file_export_pdf(),
            Message::FileCloseTab => {
                if let Some(id) = self.session.active_id() {
                    self.close_tab(id);
                }
            }
            Message::FileQuit => {
                if self.confirm_quit() {
                    self.shutdown();
                    return false;
                }
            }

            Message::EditUndo => {
                let _ = self.view.editor_mut().undo();
            }
            Message::EditRedo => {
                let _ = self.view.editor_mut().redo();
            }
            Message::ShowFind => show_find_dialog(self.sender, &self.last_query),
            Message::Find(query) => {
                self.sync_selection();
                self.last_query = query.clone();
                if let CommandOutcome::Search(SearchOutcome::Found { count }) =
                    self.session.execute(Command::Find(query))
                {
                    tracing::debug!("Highlighted {} match(es)", count);
                }
                self.refresh_styles();
            }
            Message::FindNext(query) => {
                self.sync_selection();
                self.last_query = query.clone();
                if let CommandOutcome::Search(SearchOutcome::Next { range, .. }) =
                    self.session.execute(Command::FindNext(query))
                    && let Some(doc) = self.session.active()
                {
                    self.view.select_chars(doc.text(), range);
                }
            }
            Message::ClearHighlights => {
                self.session.execute(Command::ClearHighlights);
                self.refresh_styles();
            }
            Message::BufferModified => {
                let text = self.view.text();
                self.session.execute(Command::EditActive(text));
                self.sync_selection();
                self.refresh_styles();
                self.update_window_title();
            }

            Message::ToggleBold => self.toggle_style(StyleAttribute::Bold),
            Message::ToggleItalic => self.toggle_style(StyleAttribute::Italic),
            Message::ToggleUnderline => self.toggle_style(StyleAttribute::Underline),
            Message::SetFontFamily(family) => {
                if let Some(doc) = self.session.active() {
                    let font = FontSetting {
                        family: family.to_string(),
                        size: doc.font.size,
                    };
                    self.set_font(font);
                }
            }
            Message::SetFontSize(size) => {
                if let Some(doc) = self.session.active() {
                    let font = FontSetting {
                        family: doc.font.family.clone(),
                        size,
                    };
                    self.set_font(font);
                }
            }

            Message::ToggleTheme => {
                self.session.execute(Command::ToggleTheme);
                self.apply_current_theme();
            }
            Message::NextTab => {
                self.sync_selection();
                if let CommandOutcome::Activated(_) = self.session.execute(Command::ActivateNext) {
                    self.show_active();
                }
            }
            Message::PreviousTab => {
                self.sync_selection();
                if let CommandOutcome::Activated(_) =
                    self.session.execute(Command::ActivatePrevious)
                {
                    self.show_active();
                }
            }

            Message::AutoSaveTick => self.auto_save_tick(),
        }
        true
    }

    // --- File ---

    fn file_open(&mut self) {
        let Some(path) = native_open_dialog(self.last_dir.as_deref()) else {
            return;
        };
        self.remember_dir(&path);
        self.sync_selection();
        if let CommandOutcome::Opened(_) = self.session.execute(Command::OpenDocument(path)) {
            self.show_active();
        }
    }

    /// Returns true when the active document ended up saved.
    fn file_save(&mut self) -> bool {
        match self.session.execute(Command::SaveActive(None)) {
            CommandOutcome::Saved(_) => {
                self.autosave_failed = false;
                self.update_window_title();
                true
            }
            CommandOutcome::PathRequired => self.file_save_as(),
            _ => false,
        }
    }

    fn file_save_as(&mut self) -> bool {
        let Some(path) = native_save_dialog(self.last_dir.as_deref()) else {
            return false;
        };
        self.remember_dir(&path);
        match self.session.execute(Command::SaveActive(Some(path))) {
            CommandOutcome::Saved(_) => {
                self.autosave_failed = false;
                self.update_window_title();
                true
            }
            _ => false,
        }
    }

    fn file_export_pdf(&mut self) {
        let Some(path) = native_export_dialog(self.last_dir.as_deref()) else {
            return;
        };
        let path = if path.extension().is_none() {
            path.with_extension("pdf")
        } else {
            path
        };
        self.remember_dir(&path);
        if let CommandOutcome::Exported { path, lines } =
            self.session.execute(Command::ExportActivePdf(path))
        {
            dialog::message_default(&format!("Exported {} line(s) to {}", lines, path.display()));
        }
    }

    fn close_tab(&mut self, id: DocumentId) {
        if let Some(doc) = self.session.document(id)
            && doc.is_dirty()
        {
            let choice = dialog::choice2_default(
                &format!("\"{}\" has unsaved changes.", doc.display_name),
                "Save",
                "Discard",
                "Cancel",
            );
            match choice {
                Some(0) => {
                    if !self.file_save() {
                        return;
                    }
                }
                Some(1) => {}
                _ => return,
            }
        }

        self.session.execute(Command::CloseDocument(id));
        self.show_active();
    }

    fn confirm_quit(&mut self) -> bool {
        let dirty: Vec<DocumentId> = self
            .session
            .documents()
            .iter()
            .filter(|d| d.is_dirty())
            .map(|d| d.id)
            .collect();
        if dirty.is_empty() {
            return true;
        }

        let choice = dialog::choice2_default(
            "You have unsaved changes in one or more documents.",
            "Save All",
            "Quit Without Saving",
            "Cancel",
        );
        match choice {
            Some(0) => {
                for id in dirty {
                    self.session.execute(Command::Activate(id));
                    self.show_active();
                    if !self.file_save() {
                        return false;
                    }
                }
                true
            }
            Some(1) => true,
            _ => false,
        }
    }

    fn shutdown(&mut self) {
        if let Some(mut timer) = self.autosave_timer.take()
            && timer.is_active()
        {
            timer.cancel();
        }
        let unsaved = self.session.shutdown();
        if !unsaved.is_empty() {
            tracing::warn!("Quitting with {} unsaved document(s)", unsaved.len());
        }
    }

    // --- Format / view ---

    fn toggle_style(&mut self, attr: StyleAttribute) {
        self.sync_selection();
        if let CommandOutcome::StyleToggled { attribute, on } =
            self.session.execute(Command::ToggleStyle(attr))
        {
            tracing::debug!("{} -> {}", attribute.as_str(), on);
        }
        self.refresh_styles();
    }

    fn set_font(&mut self, font: FontSetting) {
        self.session.execute(Command::SetFont(font.clone()));
        self.view.apply_font(&font);
    }

    fn apply_current_theme(&mut self) {
        let theme = self.session.theme();
        let font = self
            .session
            .active()
            .map(|d| d.font.clone())
            .unwrap_or_else(|| self.session.settings().default_font());
        apply_theme(self.view.editor_mut(), &mut self.window, &mut self.menu, theme);
        self.view.apply_theme(&font, theme);
    }

    fn auto_save_tick(&mut self) {
        match self.session.execute(Command::AutoSaveTick) {
            CommandOutcome::AutoSave(AutoSaveOutcome::Saved(_)) => {
                self.autosave_failed = false;
                self.update_window_title();
            }
            CommandOutcome::AutoSave(AutoSaveOutcome::Failed(_)) => {
                self.autosave_failed = true;
                self.update_window_title();
            }
            _ => {}
        }
    }

    // --- Projection ---

    fn sync_selection(&mut self) {
        let range = self.view.selection_chars();
        self.session.execute(Command::SetSelection(range));
    }

    fn show_active(&mut self) {
        if let Some(doc) = self.session.active() {
            self.view.show_document(doc);
        }
        self.update_window_title();
    }

    fn refresh_styles(&mut self) {
        if let Some(doc) = self.session.active() {
            self.view.refresh_styles(doc);
        }
    }

    fn update_window_title(&mut self) {
        let Some(doc) = self.session.active() else {
            self.window.set_label("Untitled - InkPad");
            return;
        };
        let prefix = if doc.is_dirty() { "*" } else { "" };
        let count = self.session.documents().len();
        let position = match self.session.active_index() {
            Some(i) if count > 1 => format!(" [{}/{}]", i + 1, count),
            _ => String::new(),
        };
        let warning = if self.autosave_failed {
            " (auto-save failed)"
        } else {
            ""
        };
        self.window.set_label(&format!(
            "{}{}{} - InkPad{}",
            prefix, doc.display_name, position, warning
        ));
    }

    fn remember_dir(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_dir = Some(parent.to_path_buf());
        }
    }
}
