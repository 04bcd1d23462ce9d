//! Plain-text PDF export.
//!
//! Each text line becomes one fixed-height cell in reading order. Styles and
//! highlights are not carried over. Characters outside Latin-1 are replaced
//! with `?` rather than failing the export. `pdf-writer` has no automatic
//! page overflow, so pages are split at a line-count threshold derived from
//! the page layout.

use std::fs;
use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops::{split_lines, to_latin1_lossy};

const MM_TO_PT: f32 = 72.0 / 25.4;
const FONT_NAME: Name<'static> = Name(b"F1");

/// Turns plain text lines into a PDF byte stream.
pub trait PdfRenderer {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>>;
}

/// Page geometry in millimetres, font size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub font_size_pt: f32,
}

impl Default for PageLayout {
    /// A4 portrait, 10 mm margins, 10 mm lines of 12 pt Helvetica.
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            line_height_mm: 10.0,
            font_size_pt: 12.0,
        }
    }
}

impl PageLayout {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            line_height_mm: settings.pdf_line_height_mm,
            font_size_pt: settings.pdf_font_size,
            ..Self::default()
        }
    }

    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height_mm - 2.0 * self.margin_mm;
        if self.line_height_mm <= 0.0 {
            return 1;
        }
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextPdfRenderer {
    layout: PageLayout,
}

impl TextPdfRenderer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    fn page_content(&self, lines: &[String]) -> Vec<u8> {
        let l = &self.layout;
        let line_height = l.line_height_mm * MM_TO_PT;
        let x = l.margin_mm * MM_TO_PT;
        // Baseline of the first cell: text sits vertically centred in its cell.
        let y = (l.page_height_mm - l.margin_mm) * MM_TO_PT - line_height / 2.0
            - l.font_size_pt * 0.3;

        let mut content = Content::new();
        content.begin_text();
        content.set_font(FONT_NAME, l.font_size_pt);
        content.next_line(x, y);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.next_line(0.0, -line_height);
            }
            content.show(Str(&to_latin1_lossy(line)));
        }
        content.end_text();
        content.finish()
    }
}

impl PdfRenderer for TextPdfRenderer {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>> {
        let per_page = self.layout.lines_per_page();
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![lines]
        } else {
            lines.chunks(per_page).collect()
        };
        let page_count = i32::try_from(pages.len())
            .map_err(|_| AppError::Pdf(format!("too many pages ({})", pages.len())))?;

        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_ids: Vec<Ref> = (0..page_count).map(|i| Ref::new(4 + 2 * i)).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().copied())
            .count(page_count);
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let width = self.layout.page_width_mm * MM_TO_PT;
        let height = self.layout.page_height_mm * MM_TO_PT;

        for (page_id, chunk) in page_ids.iter().zip(pages) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, width, height));
            page.parent(tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
            page.finish();

            let data = self.page_content(chunk);
            pdf.stream(content_id, &data);
        }

        Ok(pdf.finish())
    }
}

/// Render `text` line by line and write the PDF to `path`.
/// Returns the number of lines written.
pub fn export_text(renderer: &dyn PdfRenderer, text: &str, path: &Path) -> Result<usize> {
    let lines = split_lines(text);
    let bytes = renderer.render(&lines)?;
    fs::write(path, bytes).map_err(|e| AppError::io(path, e))?;
    Ok(lines.len())
}
