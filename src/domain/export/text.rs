//! Plain-text rendering of notes

use crate::domain::pro::ProDocument;
use crate::domain::simple::SimpleDocument;

fn header(title: &str, author: &str, datetime: &str, location: &str) -> String {
    format!(
        "Title: {}\nAuthor: {}\nWhen/Where: {} @ {}\n",
        title, author, datetime, location
    )
}

/// Header block, a blank line, then the lyrics exactly as typed
pub fn simple_text(doc: &SimpleDocument) -> String {
    format!(
        "{}\n{}",
        header(&doc.title, &doc.author, &doc.datetime, &doc.location),
        doc.body
    )
}

/// `## <Type>` heading followed by the content, sections separated by a blank line
pub fn sections_text(doc: &ProDocument) -> String {
    doc.sections
        .iter()
        .map(|s| format!("## {}\n{}", s.kind, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Header, song metadata, notes and every section in performance order
pub fn pro_text(doc: &ProDocument) -> String {
    format!(
        "{}Style: {} • BPM {} • {} • Key {}\n\nNotes:\n{}\n\n{}",
        header(&doc.title, &doc.author, &doc.datetime, &doc.location),
        doc.style,
        doc.tempo,
        doc.time_sig,
        doc.key,
        doc.notes,
        sections_text(doc)
    )
}
