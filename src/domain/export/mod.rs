//! Read-only transformations of a document into external artifacts

pub mod layout;
pub mod mail;
pub mod metrics;
pub mod text;

pub use layout::{layout_pro, layout_simple, DrawOp, FontWeight, PdfLayout, PdfPage};
pub use mail::MailDraft;

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Title, or `fallback` when the title is empty
pub fn title_or<'a>(title: &'a str, fallback: &'a str) -> &'a str {
    if title.is_empty() {
        fallback
    } else {
        title
    }
}

/// File name for a text export: whitespace runs become underscores
pub fn text_filename(title: &str, fallback: &str) -> String {
    let stem = whitespace_regex().replace_all(title_or(title, fallback), "_");
    format!("{}.txt", stem)
}
