/// All messages that can be sent through the FLTK channel.
/// Menu callbacks, dialog buttons, the buffer modify callback and the
/// auto-save timeout each send one of these; the dispatch loop in main
/// handles them on the UI thread.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExportPdf,
    FileCloseTab,
    FileQuit,

    // Edit
    EditUndo,
    EditRedo,
    ShowFind,
    Find(String),
    FindNext(String),
    ClearHighlights,
    BufferModified,

    // Format
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    SetFontFamily(&'static str),
    SetFontSize(u32),

    // View
    ToggleTheme,
    NextTab,
    PreviousTab,

    // Background
    AutoSaveTick,
}
