//! Pro song sheet: metadata, notes and an ordered list of sections

use crate::domain::choices::{MusicalKey, Style, TimeSignature};
use crate::domain::document::{
    coerce_integer, lenient_choice, lenient_image, lenient_integer_or, lenient_text, now_datetime,
    parse_choice, parse_datetime, Document,
};
use crate::domain::section::{Section, SectionKind};
use crate::error::{Result, SongbookError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

const DEFAULT_TEMPO: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProDocument {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub datetime: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub style: Style,
    #[serde(deserialize_with = "lenient_tempo")]
    pub tempo: i64,
    #[serde(deserialize_with = "lenient_choice")]
    pub time_sig: TimeSignature,
    #[serde(deserialize_with = "lenient_choice")]
    pub key: MusicalKey,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: String,
    #[serde(deserialize_with = "lenient_image")]
    pub image_data_url: Option<String>,
    /// Performance order
    #[serde(deserialize_with = "lenient_sections")]
    pub sections: Vec<Section>,
}

fn lenient_tempo<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_integer_or(deserializer, DEFAULT_TEMPO)
}

/// Stored sections in order; an entry that is not a section is dropped on its own
fn lenient_sections<'de, D>(deserializer: D) -> std::result::Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(section) => Some(section),
            Err(e) => {
                log::warn!("Dropping unreadable stored section: {}", e);
                None
            }
        })
        .collect())
}

impl Default for ProDocument {
    fn default() -> Self {
        ProDocument {
            title: String::new(),
            author: String::new(),
            location: String::new(),
            datetime: now_datetime(),
            style: Style::default(),
            tempo: DEFAULT_TEMPO,
            time_sig: TimeSignature::default(),
            key: MusicalKey::default(),
            notes: String::new(),
            image_data_url: None,
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProField {
    Title,
    Author,
    Location,
    Datetime,
    Style,
    Tempo,
    TimeSig,
    Key,
    Notes,
}

impl ProField {
    pub fn name(&self) -> &'static str {
        match self {
            ProField::Title => "title",
            ProField::Author => "author",
            ProField::Location => "location",
            ProField::Datetime => "datetime",
            ProField::Style => "style",
            ProField::Tempo => "tempo",
            ProField::TimeSig => "time-sig",
            ProField::Key => "key",
            ProField::Notes => "notes",
        }
    }
}

impl FromStr for ProField {
    type Err = SongbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "title" => Ok(ProField::Title),
            "author" => Ok(ProField::Author),
            "location" => Ok(ProField::Location),
            "datetime" => Ok(ProField::Datetime),
            "style" | "genre" => Ok(ProField::Style),
            "tempo" | "bpm" => Ok(ProField::Tempo),
            "time-sig" | "timesig" => Ok(ProField::TimeSig),
            "key" => Ok(ProField::Key),
            "notes" => Ok(ProField::Notes),
            _ => Err(SongbookError::InvalidField(s.to_string())),
        }
    }
}

impl Document for ProDocument {
    type Field = ProField;

    const STORAGE_KEY: &'static str = "proData";

    fn title(&self) -> &str {
        &self.title
    }

    fn with_field(&self, field: ProField, raw: &str) -> Result<Self> {
        let mut next = self.clone();
        match field {
            ProField::Title => next.title = raw.to_string(),
            ProField::Author => next.author = raw.to_string(),
            ProField::Location => next.location = raw.to_string(),
            ProField::Datetime => next.datetime = parse_datetime(raw)?,
            ProField::Style => next.style = parse_choice(field.name(), raw)?,
            ProField::Tempo => next.tempo = coerce_integer(field.name(), raw)?,
            ProField::TimeSig => next.time_sig = parse_choice(field.name(), raw)?,
            ProField::Key => next.key = parse_choice(field.name(), raw)?,
            ProField::Notes => next.notes = raw.to_string(),
        }
        Ok(next)
    }

    fn with_image(&self, image_data_url: Option<String>) -> Self {
        ProDocument {
            image_data_url,
            ..self.clone()
        }
    }

    fn image_data_url(&self) -> Option<&str> {
        self.image_data_url.as_deref()
    }
}

// Section list editing. Sections are addressed by position only.
impl ProDocument {
    /// Append a section pre-filled with the template for `kind`
    pub fn add_section(&self, kind: SectionKind) -> Self {
        let mut sections = self.sections.clone();
        sections.push(Section::new(kind));
        ProDocument {
            sections,
            ..self.clone()
        }
    }

    /// Replace the content of the section at `index`
    pub fn update_section(&self, index: usize, content: &str) -> Result<Self> {
        self.check_index(index)?;
        let mut sections = self.sections.clone();
        sections[index].content = content.to_string();
        Ok(ProDocument {
            sections,
            ..self.clone()
        })
    }

    /// Remove the section at `index`; later sections shift down by one
    pub fn remove_section(&self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        let mut sections = self.sections.clone();
        sections.remove(index);
        Ok(ProDocument {
            sections,
            ..self.clone()
        })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.sections.len() {
            Ok(())
        } else {
            Err(SongbookError::SectionOutOfRange {
                index,
                len: self.sections.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let doc = ProDocument::default();
        assert_eq!(doc.style, Style::Pop);
        assert_eq!(doc.tempo, 100);
        assert_eq!(doc.time_sig, TimeSignature::FourFour);
        assert_eq!(doc.key, MusicalKey::C);
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_add_verse_chorus_remove_first() {
        let doc = ProDocument::default()
            .add_section(SectionKind::Verse)
            .add_section(SectionKind::Chorus)
            .remove_section(0)
            .unwrap();

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].kind, SectionKind::Chorus);
        assert_eq!(doc.sections[0].content, SectionKind::Chorus.template());
    }

    #[test]
    fn test_add_then_remove_last_restores_sections() {
        let base = ProDocument::default()
            .add_section(SectionKind::Intro)
            .add_section(SectionKind::Verse)
            .update_section(1, "first verse")
            .unwrap();

        for kind in SectionKind::KNOWN.iter() {
            let added = base.add_section(kind.clone());
            let restored = added.remove_section(added.sections.len() - 1).unwrap();
            assert_eq!(restored.sections, base.sections);
        }
    }

    #[test]
    fn test_update_touches_one_section() {
        let doc = ProDocument::default()
            .add_section(SectionKind::Verse)
            .add_section(SectionKind::Chorus)
            .add_section(SectionKind::Verse);

        let edited = doc.update_section(1, "la la la").unwrap();
        assert_eq!(edited.sections[0], doc.sections[0]);
        assert_eq!(edited.sections[1].content, "la la la");
        assert_eq!(edited.sections[1].kind, SectionKind::Chorus);
        assert_eq!(edited.sections[2], doc.sections[2]);
    }

    #[test]
    fn test_independent_edits_compose() {
        let doc = ProDocument::default()
            .add_section(SectionKind::Verse)
            .add_section(SectionKind::Chorus);

        let a_then_b = doc
            .update_section(0, "a")
            .unwrap()
            .update_section(1, "b")
            .unwrap();
        let b_then_a = doc
            .update_section(1, "b")
            .unwrap()
            .update_section(0, "a")
            .unwrap();
        assert_eq!(a_then_b, b_then_a);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let doc = ProDocument::default()
            .add_section(SectionKind::Intro)
            .add_section(SectionKind::Verse)
            .add_section(SectionKind::Outro)
            .remove_section(1)
            .unwrap();

        assert_eq!(doc.sections[0].kind, SectionKind::Intro);
        assert_eq!(doc.sections[1].kind, SectionKind::Outro);
    }

    #[test]
    fn test_out_of_range_index() {
        let doc = ProDocument::default().add_section(SectionKind::Verse);
        assert!(matches!(
            doc.remove_section(1),
            Err(SongbookError::SectionOutOfRange { index: 1, len: 1 })
        ));
        assert!(doc.update_section(3, "x").is_err());
    }

    #[test]
    fn test_tempo_coerced_not_clamped() {
        let doc = ProDocument::default();
        assert_eq!(doc.with_field(ProField::Tempo, "300").unwrap().tempo, 300);
        assert_eq!(doc.with_field(ProField::Tempo, "87.6").unwrap().tempo, 87);
        assert!(doc.with_field(ProField::Tempo, "allegro").is_err());
    }

    #[test]
    fn test_edit_choice_fields() {
        let doc = ProDocument::default()
            .with_field(ProField::Style, "k-pop")
            .unwrap()
            .with_field(ProField::TimeSig, "6/8")
            .unwrap()
            .with_field(ProField::Key, "c#m")
            .unwrap();
        assert_eq!(doc.style, Style::KPop);
        assert_eq!(doc.time_sig, TimeSignature::SixEight);
        assert_eq!(doc.key, MusicalKey::CSharpMinor);
    }

    #[test]
    fn test_edit_isolated() {
        let before = ProDocument::default().add_section(SectionKind::Bridge);
        let after = before.with_field(ProField::Notes, "modulate up").unwrap();
        assert_eq!(
            ProDocument {
                notes: before.notes.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_json_round_trip_keeps_section_order() {
        let doc = ProDocument::default()
            .add_section(SectionKind::Outro)
            .add_section(SectionKind::Intro)
            .add_section(SectionKind::Other("Tag".to_string()));
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"timeSig\":\"4/4\""));

        let back: ProDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_fractional_stored_tempo_keeps_the_rest() {
        let doc: ProDocument = serde_json::from_str(
            r#"{"title":"Rain","tempo":87.5,"key":"H","notes":"keep me",
                "sections":[{"type":"Verse","content":"v"},{"type":"Chorus","content":"c"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.title, "Rain");
        assert_eq!(doc.tempo, 87);
        assert_eq!(doc.key, MusicalKey::C);
        assert_eq!(doc.notes, "keep me");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[1].kind, SectionKind::Chorus);
    }

    #[test]
    fn test_unreadable_section_dropped_alone() {
        let doc: ProDocument = serde_json::from_str(
            r#"{"tempo":"","sections":[{"type":"Intro"},7,{"type":"Outro","content":"fade"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.tempo, 0);
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].content, "");
        assert_eq!(doc.sections[1].content, "fade");

        let doc: ProDocument = serde_json::from_str(r#"{"sections":"none","tempo":null}"#).unwrap();
        assert!(doc.sections.is_empty());
        assert_eq!(doc.tempo, 100);
    }
}
