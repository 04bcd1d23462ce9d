use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use ink_pad::app::ThemeId;

use super::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_theme: ThemeId) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Export to PDF...", Shortcut::Ctrl | 'e', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileExportPdf) });
    menu.add("File/Close Tab", Shortcut::Ctrl | 'w', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileCloseTab) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | Shortcut::Shift | 'z', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });
    menu.add("Edit/Clear Highlights", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearHighlights) });

    // Format
    menu.add("Format/Bold", Shortcut::Ctrl | 'b', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleBold) });
    menu.add("Format/Italic", Shortcut::Ctrl | 'i', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleItalic) });
    menu.add("Format/Underline", Shortcut::Ctrl | 'u', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ToggleUnderline) });
    menu.add("Format/Font/Helvetica", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontFamily("Helvetica")) });
    menu.add("Format/Font/Courier", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontFamily("Courier")) });
    menu.add("Format/Font/Times", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontFamily("Times")) });
    menu.add("Format/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("Format/Font Size/Medium (14)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(14)) });
    menu.add("Format/Font Size/Large (18)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(18)) });
    menu.add("Format/Font Size/Huge (24)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(24)) });

    // View
    let dm_flag = if initial_theme.is_dark() { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Dark Theme", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleTheme) });
    menu.add("View/Next Tab", Shortcut::Ctrl | Key::PageDown, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NextTab) });
    menu.add("View/Previous Tab", Shortcut::Ctrl | Key::PageUp, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PreviousTab) });
}
