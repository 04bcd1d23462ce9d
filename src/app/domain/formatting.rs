use std::ops::Range;

/// A character style attribute that can be toggled from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    Bold,
    Italic,
    Underline,
}

impl StyleAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        bold: false,
        italic: false,
        underline: false,
    };

    pub fn get(&self, attr: StyleAttribute) -> bool {
        match attr {
            StyleAttribute::Bold => self.bold,
            StyleAttribute::Italic => self.italic,
            StyleAttribute::Underline => self.underline,
        }
    }

    pub fn set(&mut self, attr: StyleAttribute, on: bool) {
        match attr {
            StyleAttribute::Bold => self.bold = on,
            StyleAttribute::Italic => self.italic = on,
            StyleAttribute::Underline => self.underline = on,
        }
    }

    pub fn with(mut self, attr: StyleAttribute, on: bool) -> Self {
        self.set(attr, on);
        self
    }

    /// Compact index in `0..8`, one bit per attribute. The display
    /// projection uses it to pick a style table entry.
    pub fn index(self) -> u8 {
        (self.bold as u8) | (self.italic as u8) << 1 | (self.underline as u8) << 2
    }
}

/// A contiguous range of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: TextStyle,
}

/// One style per character, kept parallel to the document text.
///
/// Positions are character offsets. Ranges are clamped to the buffer, so
/// callers may pass stale selections without panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBuffer {
    styles: Vec<TextStyle>,
}

impl StyleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(len: usize) -> Self {
        Self {
            styles: vec![TextStyle::PLAIN; len],
        }
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn as_slice(&self) -> &[TextStyle] {
        &self.styles
    }

    pub fn style_at(&self, pos: usize) -> TextStyle {
        self.styles.get(pos).copied().unwrap_or_default()
    }

    /// Style of the character just before `pos`, which is what typing at
    /// `pos` continues.
    pub fn style_before(&self, pos: usize) -> TextStyle {
        match pos.min(self.styles.len()) {
            0 => TextStyle::PLAIN,
            p => self.styles[p - 1],
        }
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.styles.len());
        range.start.min(end)..end
    }

    /// True when `attr` is set on every character of `range`. An empty
    /// range is never fully active.
    pub fn is_fully_active(&self, attr: StyleAttribute, range: Range<usize>) -> bool {
        let range = self.clamp(range);
        !range.is_empty() && self.styles[range].iter().all(|s| s.get(attr))
    }

    pub fn set_attribute(&mut self, attr: StyleAttribute, range: Range<usize>, on: bool) {
        let range = self.clamp(range);
        for style in &mut self.styles[range] {
            style.set(attr, on);
        }
    }

    /// Flip `attr` over `range`: fully active turns off, anything else
    /// (including a mixed range) turns fully on. Returns the new value.
    pub fn toggle(&mut self, attr: StyleAttribute, range: Range<usize>) -> bool {
        let on = !self.is_fully_active(attr, range.clone());
        self.set_attribute(attr, range, on);
        on
    }

    /// Replace `removed` styles at `start` with `inserted` copies of `style`.
    pub fn splice(&mut self, start: usize, removed: usize, inserted: usize, style: TextStyle) {
        let start = start.min(self.styles.len());
        let end = (start + removed).min(self.styles.len());
        self.styles
            .splice(start..end, std::iter::repeat_n(style, inserted));
    }

    /// Coalesced runs in text order. Covers the whole buffer.
    pub fn runs(&self) -> impl Iterator<Item = StyleRun> + '_ {
        let mut pos = 0;
        std::iter::from_fn(move || {
            let style = *self.styles.get(pos)?;
            let start = pos;
            while self.styles.get(pos) == Some(&style) {
                pos += 1;
            }
            Some(StyleRun {
                range: start..pos,
                style,
            })
        })
    }
}

/// Style that applies to the next typed character when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattingState {
    pending: Option<TextStyle>,
}

impl FormattingState {
    pub fn pending(&self) -> Option<TextStyle> {
        self.pending
    }

    /// Toggle `attr` on the pending style, seeding it from `base` (the style
    /// at the insertion point) if nothing is pending yet. Returns the new value.
    pub fn toggle_pending(&mut self, attr: StyleAttribute, base: TextStyle) -> bool {
        let style = self.pending.get_or_insert(base);
        let on = !style.get(attr);
        style.set(attr, on);
        on
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_index_bits() {
        assert_eq!(TextStyle::PLAIN.index(), 0);
        let all = TextStyle {
            bold: true,
            italic: true,
            underline: true,
        };
        assert_eq!(all.index(), 7);
        assert_eq!(TextStyle::PLAIN.with(StyleAttribute::Italic, true).index(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_uniform_range() {
        let mut buf = StyleBuffer::plain(10);
        assert!(buf.toggle(StyleAttribute::Bold, 2..6));
        assert!(buf.is_fully_active(StyleAttribute::Bold, 2..6));
        assert!(!buf.toggle(StyleAttribute::Bold, 2..6));
        assert_eq!(buf, StyleBuffer::plain(10));
    }

    #[test]
    fn test_toggle_mixed_range_turns_on() {
        let mut buf = StyleBuffer::plain(6);
        buf.set_attribute(StyleAttribute::Italic, 0..2, true);
        assert!(buf.toggle(StyleAttribute::Italic, 0..6));
        assert!(buf.is_fully_active(StyleAttribute::Italic, 0..6));
    }

    #[test]
    fn test_toggle_only_touches_named_attribute() {
        let mut buf = StyleBuffer::plain(4);
        buf.set_attribute(StyleAttribute::Underline, 0..4, true);
        buf.toggle(StyleAttribute::Bold, 1..3);
        assert!(buf.is_fully_active(StyleAttribute::Underline, 0..4));
        assert!(!buf.style_at(0).bold);
        assert!(buf.style_at(1).bold);
    }

    #[test]
    fn test_ranges_are_clamped() {
        let mut buf = StyleBuffer::plain(3);
        buf.toggle(StyleAttribute::Bold, 1..100);
        assert!(buf.is_fully_active(StyleAttribute::Bold, 1..3));
        assert!(!buf.is_fully_active(StyleAttribute::Bold, 50..60));
    }

    #[test]
    fn test_runs_coalesce() {
        let mut buf = StyleBuffer::plain(8);
        buf.set_attribute(StyleAttribute::Bold, 2..5, true);
        let runs: Vec<_> = buf.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].range, 0..2);
        assert_eq!(runs[1].range, 2..5);
        assert!(runs[1].style.bold);
        assert_eq!(runs[2].range, 5..8);
        assert!(StyleBuffer::new().runs().next().is_none());
    }

    #[test]
    fn test_splice_inserts_and_removes() {
        let mut buf = StyleBuffer::plain(4);
        let bold = TextStyle::PLAIN.with(StyleAttribute::Bold, true);
        buf.splice(2, 1, 3, bold);
        assert_eq!(buf.len(), 6);
        assert!(buf.is_fully_active(StyleAttribute::Bold, 2..5));
        assert!(!buf.style_at(5).bold);
    }

    #[test]
    fn test_style_before() {
        let mut buf = StyleBuffer::plain(3);
        buf.set_attribute(StyleAttribute::Bold, 2..3, true);
        assert_eq!(buf.style_before(0), TextStyle::PLAIN);
        assert!(buf.style_before(3).bold);
        assert!(buf.style_before(99).bold);
    }

    #[test]
    fn test_pending_toggle() {
        let mut state = FormattingState::default();
        assert!(state.toggle_pending(StyleAttribute::Bold, TextStyle::PLAIN));
        assert!(state.pending().unwrap().bold);
        assert!(state.toggle_pending(StyleAttribute::Italic, TextStyle::PLAIN));
        assert!(state.pending().unwrap().bold);
        assert!(!state.toggle_pending(StyleAttribute::Bold, TextStyle::PLAIN));
        state.clear();
        assert_eq!(state.pending(), None);
    }
}
