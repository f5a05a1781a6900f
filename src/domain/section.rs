//! Song sections and their starter templates

use serde::{Deserialize, Serialize};
use std::fmt;

// Built-in starter text for each known section kind
const INTRO_TEMPLATE: &str = "[Intro]\n(บรรยายบรรยากาศ / Riff / Motif)";
const VERSE_TEMPLATE: &str = "[Verse]\nเล่าเรื่องราว หลักฐาน ความรู้สึก";
const PRE_CHORUS_TEMPLATE: &str = "[Pre-Chorus]\nสร้างแรงดัน สะพานไปฮุค";
const CHORUS_TEMPLATE: &str = "[Chorus]\nใจความหลัก / ฮุค / ท่อนจำ";
const BRIDGE_TEMPLATE: &str = "[Bridge]\nมุมมองใหม่ คีย์/คอร์ดที่ต่างออกไป";
const SOLO_TEMPLATE: &str = "[Solo]\nไลน์เครื่องดนตรี โชว์ธีม";
const BREAK_TEMPLATE: &str = "[Break]\nพัก/หยุด เพื่อสร้างไดนามิก";
const OUTRO_TEMPLATE: &str = "[Outro]\nปิดเพลง จาง/สรุปธีม";

/// Kind of a song section. Labels outside the known set are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Bridge,
    Solo,
    Break,
    Outro,
    Other(String),
}

impl SectionKind {
    /// The known kinds, in the order the form offers them
    pub const KNOWN: [SectionKind; 8] = [
        SectionKind::Intro,
        SectionKind::Verse,
        SectionKind::PreChorus,
        SectionKind::Chorus,
        SectionKind::Bridge,
        SectionKind::Solo,
        SectionKind::Break,
        SectionKind::Outro,
    ];

    pub fn label(&self) -> &str {
        match self {
            SectionKind::Intro => "Intro",
            SectionKind::Verse => "Verse",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Chorus => "Chorus",
            SectionKind::Bridge => "Bridge",
            SectionKind::Solo => "Solo",
            SectionKind::Break => "Break",
            SectionKind::Outro => "Outro",
            SectionKind::Other(label) => label,
        }
    }

    /// Starter content for a new section of this kind (empty for unknown kinds)
    pub fn template(&self) -> &'static str {
        match self {
            SectionKind::Intro => INTRO_TEMPLATE,
            SectionKind::Verse => VERSE_TEMPLATE,
            SectionKind::PreChorus => PRE_CHORUS_TEMPLATE,
            SectionKind::Chorus => CHORUS_TEMPLATE,
            SectionKind::Bridge => BRIDGE_TEMPLATE,
            SectionKind::Solo => SOLO_TEMPLATE,
            SectionKind::Break => BREAK_TEMPLATE,
            SectionKind::Outro => OUTRO_TEMPLATE,
            SectionKind::Other(_) => "",
        }
    }

    /// Resolve a user-typed label, matching known kinds case-insensitively.
    /// `prechorus` and `pre chorus` are accepted for Pre-Chorus.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect::<String>()
            .to_lowercase();

        SectionKind::KNOWN
            .iter()
            .find(|kind| kind.label().replace('-', "").to_lowercase() == normalized)
            .cloned()
            .unwrap_or_else(|| SectionKind::Other(trimmed.to_string()))
    }
}

impl From<String> for SectionKind {
    fn from(label: String) -> Self {
        // Stored labels are matched exactly so unknown spellings survive a reload
        SectionKind::KNOWN
            .iter()
            .find(|kind| kind.label() == label)
            .cloned()
            .unwrap_or(SectionKind::Other(label))
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labeled block of lyrics or structure inside a song sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub content: String,
}

impl Section {
    /// Create a section pre-filled with the template for its kind
    pub fn new(kind: SectionKind) -> Self {
        let content = kind.template().to_string();
        Section { kind, content }
    }
}
