//! The note of whichever form is active

use crate::domain::export::text::{pro_text, simple_text};
use crate::domain::export::{layout_pro, layout_simple, text_filename, title_or, MailDraft, PdfLayout};
use crate::domain::preferences::Mode;
use crate::domain::pro::ProDocument;
use crate::domain::simple::SimpleDocument;

#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    Simple(SimpleDocument),
    Pro(ProDocument),
}

impl Note {
    pub fn mode(&self) -> Mode {
        match self {
            Note::Simple(_) => Mode::Simple,
            Note::Pro(_) => Mode::Pro,
        }
    }

    pub fn image_data_url(&self) -> Option<&str> {
        match self {
            Note::Simple(doc) => doc.image_data_url.as_deref(),
            Note::Pro(doc) => doc.image_data_url.as_deref(),
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Note::Simple(doc) => simple_text(doc),
            Note::Pro(doc) => pro_text(doc),
        }
    }

    pub fn text_filename(&self) -> String {
        match self {
            Note::Simple(doc) => text_filename(&doc.title, "lyrics"),
            Note::Pro(doc) => text_filename(&doc.title, "song"),
        }
    }

    pub fn pdf_filename(&self) -> String {
        match self {
            Note::Simple(doc) => format!("{}.pdf", title_or(&doc.title, "lyrics")),
            Note::Pro(doc) => format!("{}-sheet.pdf", title_or(&doc.title, "song")),
        }
    }

    pub fn layout(&self, with_image: bool) -> PdfLayout {
        match self {
            Note::Simple(doc) => layout_simple(doc, with_image),
            Note::Pro(doc) => layout_pro(doc, with_image),
        }
    }

    pub fn mail_draft(&self) -> MailDraft {
        match self {
            Note::Simple(doc) => MailDraft::for_simple(doc),
            Note::Pro(doc) => MailDraft::for_pro(doc),
        }
    }

    /// Text placed on the clipboard: the lyrics, or the whole sheet in pro mode
    pub fn clipboard_text(&self) -> String {
        match self {
            Note::Simple(doc) => doc.body.clone(),
            Note::Pro(doc) => pro_text(doc),
        }
    }
}
