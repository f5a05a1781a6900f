//! Mail-compose drafts

use crate::domain::export::text::pro_text;
use crate::domain::export::title_or;
use crate::domain::pro::ProDocument;
use crate::domain::simple::SimpleDocument;

/// Subject and body of a pre-filled email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn for_simple(doc: &SimpleDocument) -> Self {
        MailDraft {
            subject: format!("Lyrics: {}", title_or(&doc.title, "Untitled")),
            body: format!(
                "{}\n\n— {}\n{} @ {}",
                doc.body, doc.author, doc.datetime, doc.location
            ),
        }
    }

    pub fn for_pro(doc: &ProDocument) -> Self {
        MailDraft {
            subject: format!("Song Sheet: {}", title_or(&doc.title, "Untitled")),
            body: pro_text(doc),
        }
    }

    /// `mailto:` URI with percent-encoded subject and body
    pub fn to_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient.trim(),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}
