use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use fltk::{
    app::Sender,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use ink_pad::app::services::text_ops::{byte_to_char, char_to_byte};
use ink_pad::app::{Document, FontSetting, ThemeId};

use super::messages::Message;
use super::style_map::StyleMap;
use super::theme::Palette;

/// The single text widget plus its style buffer. The session owns the
/// documents; this view only mirrors whichever one is active.
pub struct EditorView {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    style_map: StyleMap,
    loading: Rc<Cell<bool>>,
}

impl EditorView {
    pub fn new(mut editor: TextEditor, sender: Sender<Message>, font: &FontSetting, theme: ThemeId) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let style_map = StyleMap::new(font, theme);
        let loading = Rc::new(Cell::new(false));

        let quiet = loading.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if (inserted > 0 || deleted > 0) && !quiet.get() {
                sender.send(Message::BufferModified);
            }
        });

        editor.set_buffer(buffer.clone());
        editor.set_highlight_data_ext(style_buffer.clone(), style_map.entries());
        let palette = Palette::for_theme(theme);
        editor.set_linenumber_bgcolor(palette.linenumber_bg);
        editor.set_linenumber_fgcolor(palette.linenumber_fg);

        Self {
            editor,
            buffer,
            style_buffer,
            style_map,
            loading,
        }
    }

    /// Replace the widget contents with `doc` without reporting an edit.
    pub fn show_document(&mut self, doc: &Document) {
        self.loading.set(true);
        self.buffer.set_text(doc.text());
        self.loading.set(false);

        self.apply_font(&doc.font);
        self.refresh_styles(doc);
        self.select_chars(doc.text(), doc.selection());
    }

    /// Re-project character styles and search highlights.
    pub fn refresh_styles(&mut self, doc: &Document) {
        self.style_buffer.set_text(&StyleMap::style_string(doc));
        self.editor.redraw();
    }

    pub fn apply_font(&mut self, font: &FontSetting) {
        self.editor.set_text_size(font.size as i32);
        self.restyle(font, None);
    }

    pub fn apply_theme(&mut self, font: &FontSetting, theme: ThemeId) {
        self.restyle(font, Some(theme));
    }

    fn restyle(&mut self, font: &FontSetting, theme: Option<ThemeId>) {
        let theme = theme.unwrap_or(self.style_map.theme());
        self.style_map.rebuild(font, theme);
        self.editor
            .set_highlight_data_ext(self.style_buffer.clone(), self.style_map.entries());
        self.editor.redraw();
    }

    pub fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    /// Current selection in characters; an empty range is the caret.
    pub fn selection_chars(&self) -> Range<usize> {
        let text = self.text();
        match self.buffer.selection_position() {
            Some((start, end)) if start != end => {
                byte_to_char(&text, start as usize)..byte_to_char(&text, end as usize)
            }
            _ => {
                let caret = byte_to_char(&text, self.editor.insert_position() as usize);
                caret..caret
            }
        }
    }

    pub fn select_chars(&mut self, text: &str, range: Range<usize>) {
        let start = char_to_byte(text, range.start) as i32;
        let end = char_to_byte(text, range.end) as i32;
        if start == end {
            self.buffer.unselect();
        } else {
            self.buffer.select(start, end);
        }
        self.editor.set_insert_position(end);
        self.editor.show_insert_position();
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }
}

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string into a `String`
/// but never frees the original, so every call leaks a buffer-sized block.
fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is valid while `buf` lives. FLTK returns a
    // malloc'd, null-terminated copy (or null), which we copy and free.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
