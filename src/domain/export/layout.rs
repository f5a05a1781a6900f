//! Page layout for PDF export
//!
//! Layout works in points with the origin at the top-left corner of an A4
//! page and `y` growing downwards; each text position is the baseline of the
//! line. Rendering to an actual PDF happens in the infrastructure layer.

use crate::domain::export::metrics::wrap_text;
use crate::domain::export::title_or;
use crate::domain::pro::ProDocument;
use crate::domain::simple::SimpleDocument;

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 48.0;
pub const CONTENT_WIDTH: f32 = 500.0;
/// A line whose baseline would sit below this starts a new page
pub const PAGE_BOTTOM: f32 = 760.0;

pub const IMAGE_WIDTH: f32 = 200.0;
pub const IMAGE_HEIGHT: f32 = 120.0;
const IMAGE_ADVANCE: f32 = 140.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const META_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 13.0;

const TITLE_ADVANCE: f32 = 22.0;
const META_ADVANCE: f32 = 16.0;
const HEADER_END_ADVANCE: f32 = 22.0;
const BODY_LINE_HEIGHT: f32 = 15.0;
const NOTES_HEADING_ADVANCE: f32 = 16.0;
const SECTION_HEADING_ADVANCE: f32 = 14.0;
const CONTENT_LINE_HEIGHT: f32 = 16.0;
const BLOCK_GAP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        weight: FontWeight,
        size: f32,
    },
    /// Slot for the attached image; `y` is the top edge
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfPage {
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub title: String,
    pub pages: Vec<PdfPage>,
}

impl PdfLayout {
    /// Every text line in drawing order, paired with its page index
    pub fn lines(&self) -> Vec<(usize, &str)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(page_index, page)| {
                page.ops.iter().filter_map(move |op| match op {
                    DrawOp::Text { text, .. } => Some((page_index, text.as_str())),
                    DrawOp::Image { .. } => None,
                })
            })
            .collect()
    }

    pub fn has_image(&self) -> bool {
        self.pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .any(|op| matches!(op, DrawOp::Image { .. }))
    }
}

/// Running vertical cursor over a growing list of pages
struct PageCursor {
    pages: Vec<PdfPage>,
    y: f32,
}

impl PageCursor {
    fn new() -> Self {
        PageCursor {
            pages: vec![PdfPage::default()],
            y: MARGIN,
        }
    }

    fn current_page(&mut self) -> &mut PdfPage {
        // The cursor always owns at least one page
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Start a new page when the cursor has passed the page-bottom threshold
    fn ensure_room(&mut self) {
        if self.y > PAGE_BOTTOM {
            self.pages.push(PdfPage::default());
            self.y = MARGIN;
        }
    }

    fn put(&mut self, text: &str, weight: FontWeight, size: f32) {
        let y = self.y;
        self.current_page().ops.push(DrawOp::Text {
            x: MARGIN,
            y,
            text: text.to_string(),
            weight,
            size,
        });
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Fixed-position header line, never paginated
    fn header_line(&mut self, text: &str, weight: FontWeight, size: f32, advance: f32) {
        self.put(text, weight, size);
        self.advance(advance);
    }

    /// Flowing line: checked against the page bottom before it is drawn
    fn flow_line(&mut self, text: &str, weight: FontWeight, size: f32, advance: f32) {
        self.ensure_room();
        self.put(text, weight, size);
        self.advance(advance);
    }

    fn flow_wrapped(&mut self, text: &str, size: f32, line_height: f32) {
        for line in wrap_text(text, size, CONTENT_WIDTH) {
            self.flow_line(&line, FontWeight::Regular, size, line_height);
        }
    }

    fn image(&mut self) {
        let y = self.y;
        self.current_page().ops.push(DrawOp::Image {
            x: MARGIN,
            y,
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        });
        self.advance(IMAGE_ADVANCE);
    }

    fn finish(self, title: String) -> PdfLayout {
        PdfLayout {
            title,
            pages: self.pages,
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn header(cursor: &mut PageCursor, title: &str, author: &str, datetime: &str) {
    cursor.header_line(
        title_or(title, "Untitled"),
        FontWeight::Bold,
        TITLE_SIZE,
        TITLE_ADVANCE,
    );
    cursor.header_line(
        &format!("Author: {}", or_dash(author)),
        FontWeight::Regular,
        META_SIZE,
        META_ADVANCE,
    );
    cursor.header_line(
        &format!("Date/Time: {}", or_dash(datetime)),
        FontWeight::Regular,
        META_SIZE,
        META_ADVANCE,
    );
}

/// Lay out a simple note. `with_image` is true only when the attached image
/// could be decoded; otherwise no space is reserved for it.
pub fn layout_simple(doc: &SimpleDocument, with_image: bool) -> PdfLayout {
    let mut cursor = PageCursor::new();

    header(&mut cursor, &doc.title, &doc.author, &doc.datetime);
    cursor.header_line(
        &format!("Location: {}", or_dash(&doc.location)),
        FontWeight::Regular,
        META_SIZE,
        HEADER_END_ADVANCE,
    );

    if with_image {
        cursor.image();
    }

    cursor.flow_wrapped(&doc.body, BODY_SIZE, BODY_LINE_HEIGHT);

    cursor.finish(title_or(&doc.title, "Untitled").to_string())
}

/// Lay out a song sheet: header, song metadata, image, notes, then sections
/// in performance order, paginating line by line.
pub fn layout_pro(doc: &ProDocument, with_image: bool) -> PdfLayout {
    let mut cursor = PageCursor::new();

    header(&mut cursor, &doc.title, &doc.author, &doc.datetime);
    cursor.header_line(
        &format!("Location: {}", or_dash(&doc.location)),
        FontWeight::Regular,
        META_SIZE,
        META_ADVANCE,
    );
    cursor.header_line(
        &format!(
            "Style: {} • BPM: {} • Time: {} • Key: {}",
            doc.style, doc.tempo, doc.time_sig, doc.key
        ),
        FontWeight::Regular,
        META_SIZE,
        HEADER_END_ADVANCE,
    );

    if with_image {
        cursor.image();
    }

    if !doc.notes.is_empty() {
        cursor.flow_line("Song Notes", FontWeight::Bold, HEADING_SIZE, NOTES_HEADING_ADVANCE);
        cursor.flow_wrapped(&doc.notes, META_SIZE, CONTENT_LINE_HEIGHT);
        cursor.advance(BLOCK_GAP);
    }

    for section in &doc.sections {
        cursor.flow_line(
            section.kind.label(),
            FontWeight::Bold,
            HEADING_SIZE,
            SECTION_HEADING_ADVANCE,
        );
        cursor.flow_wrapped(&section.content, META_SIZE, CONTENT_LINE_HEIGHT);
        cursor.advance(BLOCK_GAP);
    }

    cursor.finish(title_or(&doc.title, "Untitled").to_string())
}
