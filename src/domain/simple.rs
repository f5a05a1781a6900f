//! Simple note: song header plus free-text lyrics

use crate::domain::choices::FontFamily;
use crate::domain::document::{
    coerce_integer, lenient_choice, lenient_image, lenient_integer_or, lenient_text, now_datetime,
    parse_choice, parse_datetime, Document,
};
use crate::error::{Result, SongbookError};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

const DEFAULT_FONT_SIZE: i64 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleDocument {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub datetime: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub font_family: FontFamily,
    #[serde(deserialize_with = "lenient_font_size")]
    pub font_size: i64,
    #[serde(deserialize_with = "lenient_text")]
    pub body: String,
    #[serde(deserialize_with = "lenient_image")]
    pub image_data_url: Option<String>,
}

fn lenient_font_size<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_integer_or(deserializer, DEFAULT_FONT_SIZE)
}

impl Default for SimpleDocument {
    fn default() -> Self {
        SimpleDocument {
            title: String::new(),
            author: String::new(),
            location: String::new(),
            datetime: now_datetime(),
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            body: String::new(),
            image_data_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleField {
    Title,
    Author,
    Location,
    Datetime,
    FontFamily,
    FontSize,
    Body,
}

impl SimpleField {
    pub fn name(&self) -> &'static str {
        match self {
            SimpleField::Title => "title",
            SimpleField::Author => "author",
            SimpleField::Location => "location",
            SimpleField::Datetime => "datetime",
            SimpleField::FontFamily => "font-family",
            SimpleField::FontSize => "font-size",
            SimpleField::Body => "body",
        }
    }
}

impl FromStr for SimpleField {
    type Err = SongbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "title" => Ok(SimpleField::Title),
            "author" => Ok(SimpleField::Author),
            "location" => Ok(SimpleField::Location),
            "datetime" => Ok(SimpleField::Datetime),
            "font-family" | "fontfamily" => Ok(SimpleField::FontFamily),
            "font-size" | "fontsize" => Ok(SimpleField::FontSize),
            "body" | "lyrics" => Ok(SimpleField::Body),
            _ => Err(SongbookError::InvalidField(s.to_string())),
        }
    }
}

impl Document for SimpleDocument {
    type Field = SimpleField;

    const STORAGE_KEY: &'static str = "simpleData";

    fn title(&self) -> &str {
        &self.title
    }

    fn with_field(&self, field: SimpleField, raw: &str) -> Result<Self> {
        let mut next = self.clone();
        match field {
            SimpleField::Title => next.title = raw.to_string(),
            SimpleField::Author => next.author = raw.to_string(),
            SimpleField::Location => next.location = raw.to_string(),
            SimpleField::Datetime => next.datetime = parse_datetime(raw)?,
            SimpleField::FontFamily => next.font_family = parse_choice(field.name(), raw)?,
            SimpleField::FontSize => next.font_size = coerce_integer(field.name(), raw)?,
            SimpleField::Body => next.body = raw.to_string(),
        }
        Ok(next)
    }

    fn with_image(&self, image_data_url: Option<String>) -> Self {
        SimpleDocument {
            image_data_url,
            ..self.clone()
        }
    }

    fn image_data_url(&self) -> Option<&str> {
        self.image_data_url.as_deref()
    }
}
