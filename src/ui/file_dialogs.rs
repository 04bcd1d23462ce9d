use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// NativeFileChooser filter format: "Description\tPattern", one per line.
pub const TEXT_FILTER: &str = "Text Files\t*.txt\nAll Files\t*";
pub const PDF_FILTER: &str = "PDF Files\t*.pdf";

fn run_chooser(save: bool, title: &str, filter: &str, start_dir: Option<&Path>) -> Option<PathBuf> {
    let kind = if save {
        FileDialogType::BrowseSaveFile
    } else {
        FileDialogType::BrowseFile
    };
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(filter);
    if let Some(dir) = start_dir {
        let _ = nfc.set_directory(&dir);
    }
    if save {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(false, "Open File", TEXT_FILTER, start_dir)
}

pub fn native_save_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(true, "Save File", TEXT_FILTER, start_dir)
}

pub fn native_export_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(true, "Export to PDF", PDF_FILTER, start_dir)
}
