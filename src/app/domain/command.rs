use std::ops::Range;
use std::path::PathBuf;

use super::document::DocumentId;
use super::formatting::StyleAttribute;
use super::settings::FontSetting;
use super::theme::ThemeId;
use crate::app::controllers::autosave::AutoSaveOutcome;
use crate::app::infrastructure::error::ErrorKind;
use crate::app::services::search::SearchOutcome;

/// Every user intent the session understands.
/// The UI turns menu items, toolbar buttons and timer ticks into one of
/// these and hands it to `SessionManager::execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // File
    NewDocument,
    OpenDocument(PathBuf),
    CloseDocument(DocumentId),
    CloseActive,
    /// Save the active document; `None` means "to its own path".
    SaveActive(Option<PathBuf>),
    ExportActivePdf(PathBuf),

    // Tabs
    Activate(DocumentId),
    ActivateNext,
    ActivatePrevious,

    // Edit (reported by the text widget)
    EditActive(String),
    SetSelection(Range<usize>),

    // Search
    Find(String),
    FindNext(String),
    ClearHighlights,

    // Format
    ToggleStyle(StyleAttribute),
    SetFont(FontSetting),

    // View
    ToggleTheme,

    // Background
    AutoSaveTick,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Created(DocumentId),
    Opened(DocumentId),
    Closed { closed: DocumentId, active: DocumentId },
    Activated(DocumentId),
    Saved(PathBuf),
    /// The active document has no path yet; the caller must ask for one.
    PathRequired,
    Exported { path: PathBuf, lines: usize },
    Edited { dirty: bool },
    SelectionChanged,
    StyleToggled { attribute: StyleAttribute, on: bool },
    Search(SearchOutcome),
    FontChanged,
    ThemeChanged(ThemeId),
    AutoSave(AutoSaveOutcome),
    /// Nothing to do (unknown id, session shut down, ...).
    Unchanged,
    /// The operation failed; the notifier has already been told why.
    Failed(ErrorKind),
}
