use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::formatting::{FormattingState, StyleAttribute, StyleBuffer, StyleRun, TextStyle};
use super::settings::FontSetting;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// One open tab: text, per-character styles, file association and dirty flag.
///
/// All positions are character offsets into `text`.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    text: String,
    styles: StyleBuffer,
    highlights: Vec<Range<usize>>,
    formatting: FormattingState,
    selection: Range<usize>,
    pub file_path: Option<PathBuf>,
    dirty: bool,
    pub display_name: String,
    pub font: FontSetting,
}

impl Document {
    pub fn new_untitled(id: DocumentId, counter: u32) -> Self {
        let display_name = if counter <= 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled {}", counter)
        };

        Self {
            id,
            text: String::new(),
            styles: StyleBuffer::new(),
            highlights: Vec::new(),
            formatting: FormattingState::default(),
            selection: 0..0,
            file_path: None,
            dirty: false,
            display_name,
            font: FontSetting::default(),
        }
    }

    /// Read `path` as UTF-8 into a new clean document.
    pub fn load_from(id: DocumentId, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let char_len = content.chars().count();

        Ok(Self {
            id,
            text: content,
            styles: StyleBuffer::plain(char_len),
            highlights: Vec::new(),
            formatting: FormattingState::default(),
            selection: 0..0,
            file_path: Some(path.to_path_buf()),
            dirty: false,
            display_name: extract_filename(path),
            font: FontSetting::default(),
        })
    }

    /// Write the text as UTF-8 to `path`. On success the document is
    /// associated with `path` and marked clean.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.text).map_err(|e| AppError::io(path, e))?;
        self.file_path = Some(path.to_path_buf());
        self.update_display_name();
        self.dirty = false;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn update_display_name(&mut self) {
        if let Some(ref path) = self.file_path {
            self.display_name = extract_filename(path);
        }
    }

    /// Replace the whole text. Styles of the unchanged prefix and suffix
    /// survive; inserted characters take the pending style when typed at the
    /// caret, otherwise they continue the style of the character before them.
    pub fn apply_edit(&mut self, new_text: &str) {
        if new_text == self.text {
            return;
        }

        let (prefix, removed, inserted, at_caret) = match self.caret_insertion(new_text) {
            Some((caret, inserted)) => (caret, 0, inserted, true),
            None => {
                let (prefix, removed, inserted) = char_diff(&self.text, new_text);
                (prefix, removed, inserted, self.selection == (prefix..prefix))
            }
        };
        let style = match self.formatting.pending() {
            Some(pending) if at_caret => pending,
            _ => self.styles.style_before(prefix),
        };
        self.styles.splice(prefix, removed, inserted, style);
        self.text = new_text.to_string();
        self.highlights.clear();
        self.dirty = true;

        // Typing at the caret carries the caret (and any pending style) along.
        // An edit anywhere else means the insertion point moved.
        if at_caret {
            let caret = prefix + inserted;
            self.selection = caret..caret;
        } else {
            self.formatting.clear();
            let len = self.char_len();
            self.selection = self.selection.start.min(len)..self.selection.end.min(len);
        }
    }

    /// If `new_text` is the old text with something inserted exactly at the
    /// caret, returns `(caret, inserted_chars)`.
    fn caret_insertion(&self, new_text: &str) -> Option<(usize, usize)> {
        if !self.selection.is_empty() {
            return None;
        }
        let caret = self.selection.start;
        let split = self.text.char_indices().nth(caret).map_or(self.text.len(), |(i, _)| i);
        let (before, after) = self.text.split_at(split);
        if new_text.len() <= self.text.len()
            || !new_text.starts_with(before)
            || !new_text.ends_with(after)
        {
            return None;
        }
        let inserted = &new_text[before.len()..new_text.len() - after.len()];
        Some((caret, inserted.chars().count()))
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Record the cursor/selection reported by the display. Moving the
    /// insertion point drops any pending style.
    pub fn set_selection(&mut self, range: Range<usize>) {
        let len = self.char_len();
        let (a, b) = (range.start.min(len), range.end.min(len));
        let range = a.min(b)..a.max(b);
        if range != self.selection {
            self.formatting.clear();
        }
        self.selection = range;
    }

    /// Flip `attr` over `range`. A fully active range turns off, anything
    /// else turns fully on. An empty range toggles the pending style at
    /// that insertion point instead. Returns the resulting value.
    pub fn toggle_style(&mut self, attr: StyleAttribute, range: Range<usize>) -> bool {
        let len = self.char_len();
        let range = range.start.min(len)..range.end.min(len);
        if range.is_empty() {
            let base = self.styles.style_before(range.start);
            return self.formatting.toggle_pending(attr, base);
        }
        self.styles.toggle(attr, range)
    }

    /// Toggle `attr` at the current selection.
    pub fn toggle_style_at_selection(&mut self, attr: StyleAttribute) -> bool {
        self.toggle_style(attr, self.selection.clone())
    }

    /// Style the toolbar should reflect: the pending style at an insertion
    /// point, otherwise the style at the selection start.
    pub fn active_style(&self) -> TextStyle {
        if self.selection.is_empty() {
            self.formatting
                .pending()
                .unwrap_or_else(|| self.styles.style_before(self.selection.start))
        } else {
            self.styles.style_at(self.selection.start)
        }
    }

    pub fn styles(&self) -> &StyleBuffer {
        &self.styles
    }

    pub fn style_runs(&self) -> Vec<StyleRun> {
        self.styles.runs().collect()
    }

    pub fn formatting(&self) -> &FormattingState {
        &self.formatting
    }

    pub fn highlights(&self) -> &[Range<usize>] {
        &self.highlights
    }

    pub(crate) fn set_highlights(&mut self, ranges: Vec<Range<usize>>) {
        self.highlights = ranges;
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }
}

/// Returns `(prefix, removed, inserted)` in characters: the length of the
/// common prefix, and how many characters after it were replaced by how many.
fn char_diff(old: &str, new: &str) -> (usize, usize, usize) {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    let prefix = old_chars
        .iter()
        .zip(&new_chars)
        .take_while(|(a, b)| a == b)
        .count();
    let max_suffix = old_chars.len().min(new_chars.len()) - prefix;
    let suffix = old_chars
        .iter()
        .rev()
        .zip(new_chars.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    (
        prefix,
        old_chars.len() - prefix - suffix,
        new_chars.len() - prefix - suffix,
    )
}
