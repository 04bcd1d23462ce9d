use fltk::enums::{Color, Font};
use fltk::text::{StyleTableEntryExt, TextAttr};

use ink_pad::app::{Document, FontSetting, ThemeId};

use super::theme::Palette;

/// Highlighted characters use the second half of the table.
const HIGHLIGHT_OFFSET: u8 = 8;

/// Maps document styles to FLTK style characters ('A'..'P').
///
/// Entry `n` renders `TextStyle::index() == n % 8`, with a search
/// highlight background when `n >= 8`.
pub struct StyleMap {
    entries: Vec<StyleTableEntryExt>,
    theme: ThemeId,
}

impl StyleMap {
    pub fn new(font: &FontSetting, theme: ThemeId) -> Self {
        let mut map = Self {
            entries: Vec::new(),
            theme,
        };
        map.rebuild(font, theme);
        map
    }

    pub fn rebuild(&mut self, font: &FontSetting, theme: ThemeId) {
        self.theme = theme;
        let palette = Palette::for_theme(theme);
        let size = font.size as i32;

        self.entries.clear();
        for n in 0..(2 * HIGHLIGHT_OFFSET) {
            let bold = n & 1 != 0;
            let italic = n & 2 != 0;
            let underline = n & 4 != 0;
            let highlighted = n >= HIGHLIGHT_OFFSET;

            let attr = entry_attr(underline, highlighted);

            self.entries.push(StyleTableEntryExt {
                color: palette.text,
                font: font_variant(&font.family, bold, italic),
                size,
                attr,
                bgcolor: if highlighted { palette.highlight_bg } else { Color::Background2 },
            });
        }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn entries(&self) -> Vec<StyleTableEntryExt> {
        self.entries.clone()
    }

    /// One style character per byte of the document text, as FLTK expects.
    pub fn style_string(doc: &Document) -> String {
        let styles = doc.styles().as_slice();
        let mut highlighted = vec![false; styles.len()];
        for range in doc.highlights() {
            for flag in highlighted.iter_mut().take(range.end).skip(range.start) {
                *flag = true;
            }
        }

        let mut out = String::with_capacity(doc.text().len());
        for (i, ch) in doc.text().chars().enumerate() {
            let mut idx = styles.get(i).map(|s| s.index()).unwrap_or(0);
            if highlighted.get(i).copied().unwrap_or(false) {
                idx += HIGHLIGHT_OFFSET;
            }
            let style_char = (b'A' + idx) as char;
            out.extend(std::iter::repeat_n(style_char, ch.len_utf8()));
        }
        out
    }
}

/// Highlighting adds a background and keeps any underline.
fn entry_attr(underline: bool, highlighted: bool) -> TextAttr {
    match (underline, highlighted) {
        (true, true) => TextAttr::BgColor | TextAttr::Underline,
        (false, true) => TextAttr::BgColor,
        (true, false) => TextAttr::Underline,
        (false, false) => TextAttr::None,
    }
}

/// FLTK has separate font faces for each bold/italic combination.
fn font_variant(family: &str, bold: bool, italic: bool) -> Font {
    match (family, bold, italic) {
        ("Courier", false, false) => Font::Courier,
        ("Courier", true, false) => Font::CourierBold,
        ("Courier", false, true) => Font::CourierItalic,
        ("Courier", true, true) => Font::CourierBoldItalic,
        ("Times", false, false) => Font::Times,
        ("Times", true, false) => Font::TimesBold,
        ("Times", false, true) => Font::TimesItalic,
        ("Times", true, true) => Font::TimesBoldItalic,
        (_, false, false) => Font::Helvetica,
        (_, true, false) => Font::HelveticaBold,
        (_, false, true) => Font::HelveticaItalic,
        (_, true, true) => Font::HelveticaBoldItalic,
    }
}
