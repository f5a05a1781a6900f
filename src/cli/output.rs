//! Output formatting utilities

use crate::domain::{Preferences, ProDocument, Section, SimpleDocument, Theme};

fn heading(theme: Theme, text: &str) -> String {
    format!("{} {}\n", theme.heading_marker(), text)
}

fn title_or_untitled(title: &str) -> &str {
    if title.trim().is_empty() {
        "Untitled"
    } else {
        title
    }
}

fn image_line(image: &Option<String>) -> &'static str {
    if image.is_some() {
        "Image: attached\n"
    } else {
        "Image: none\n"
    }
}

/// Format a simple note for display
pub fn format_simple(doc: &SimpleDocument, theme: Theme) -> String {
    let mut output = heading(theme, title_or_untitled(&doc.title));
    output.push_str(&format!("Author: {}\n", doc.author));
    output.push_str(&format!("When/Where: {} @ {}\n", doc.datetime, doc.location));
    output.push_str(&format!("Font: {} {}px\n", doc.font_family, doc.font_size));
    output.push_str(image_line(&doc.image_data_url));

    if !doc.body.is_empty() {
        output.push('\n');
        output.push_str(&doc.body);
        output.push('\n');
    }

    output
}

/// Format a pro song sheet for display, sections numbered by index
pub fn format_pro(doc: &ProDocument, theme: Theme) -> String {
    let mut output = heading(theme, title_or_untitled(&doc.title));
    output.push_str(&format!("Author: {}\n", doc.author));
    output.push_str(&format!("When/Where: {} @ {}\n", doc.datetime, doc.location));
    output.push_str(&format!(
        "Style: {} • BPM {} • {} • Key {}\n",
        doc.style, doc.tempo, doc.time_sig, doc.key
    ));
    output.push_str(image_line(&doc.image_data_url));

    if !doc.notes.is_empty() {
        output.push('\n');
        output.push_str(&heading(theme, "Notes"));
        output.push_str(&doc.notes);
        output.push('\n');
    }

    for (index, section) in doc.sections.iter().enumerate() {
        output.push('\n');
        output.push_str(&heading(theme, &format!("[{}] {}", index, section.kind)));
        if !section.content.is_empty() {
            output.push_str(&section.content);
            output.push('\n');
        }
    }

    output
}

/// Format section indices and types, one per line
pub fn format_section_list(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "No sections yet\n".to_string();
    }

    let mut output = String::new();
    for (index, section) in sections.iter().enumerate() {
        output.push_str(&format!("{}  {}\n", index, section.kind));
    }
    output
}

pub fn format_preferences(prefs: &Preferences) -> String {
    format!("mode = {}\ntheme = {}\n", prefs.mode, prefs.theme)
}
