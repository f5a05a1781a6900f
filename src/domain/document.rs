//! Behaviour shared by the simple and pro note documents

use crate::error::{Result, SongbookError};
use chrono::{Local, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::str::FromStr;

/// Minute-precision local timestamp, as produced by a datetime-local input
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A note document that can be edited field by field and stored in a slot.
pub trait Document:
    Clone + Debug + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
    /// Editable scalar fields of this document
    type Field: Copy + Debug + FromStr<Err = SongbookError>;

    /// Storage slot holding this document
    const STORAGE_KEY: &'static str;

    /// Title shown in exports (may be empty)
    fn title(&self) -> &str;

    /// Return a copy with one field replaced by the parsed `raw` value
    fn with_field(&self, field: Self::Field, raw: &str) -> Result<Self>;

    /// Return a copy with the attached image replaced wholesale
    fn with_image(&self, image_data_url: Option<String>) -> Self;

    fn image_data_url(&self) -> Option<&str>;
}

/// Current local time truncated to minutes
pub fn now_datetime() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}

/// Accept a blank value or a minute-precision local timestamp
pub fn parse_datetime(raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .map_err(|e| SongbookError::invalid_value("datetime", format!("'{}' ({})", value, e)))
}

/// Coerce numeric input to an integer without clamping.
/// Blank input is zero and fractional input is truncated toward zero.
pub fn coerce_integer(field: &str, raw: &str) -> Result<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(0);
    }

    if let Ok(n) = value.parse::<i64>() {
        return Ok(n);
    }

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n.trunc() as i64),
        _ => Err(SongbookError::invalid_value(
            field,
            format!("'{}' is not a number", value),
        )),
    }
}

/// Parse a labeled choice, reporting failures against the field name
pub(crate) fn parse_choice<T: FromStr<Err = String>>(field: &str, raw: &str) -> Result<T> {
    T::from_str(raw).map_err(|reason| SongbookError::invalid_value(field, reason))
}

// Stored documents degrade field by field: a value a typed field cannot hold
// falls back to that field's default instead of failing the whole document.

/// Stored text; numbers and booleans keep their text form, anything else is empty
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Stored integer, coerced the same way as typed input
pub(crate) fn lenient_integer_or<'de, D>(
    deserializer: D,
    fallback: i64,
) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let coerced = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(text) => coerce_integer("", text).ok(),
        _ => None,
    };

    Ok(coerced.unwrap_or_else(|| {
        log::warn!("Stored value {} is not a number, using {}", value, fallback);
        fallback
    }))
}

/// Stored choice label; unknown labels read as the choice's default
pub(crate) fn lenient_choice<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => label.parse().unwrap_or_else(|_| {
            log::warn!("Stored choice '{}' is not recognised, using the default", label);
            T::default()
        }),
        _ => T::default(),
    })
}

/// Stored image; only a non-empty string counts as attached
pub(crate) fn lenient_image<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) if !url.is_empty() => Some(url),
        _ => None,
    })
}
