//! Forgiving readers for optional scalar fields.
//!
//! A value of the wrong JSON type falls back to the field's default instead
//! of failing the whole entry. Used with `#[serde(deserialize_with = ...)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `true`/`false`, or the strings `"true"`/`"false"` in any case.
pub fn bool_or_default<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    })
}

/// A string, or a number rendered as one.
pub fn string_or_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Any non-null value as text; strings as-is, everything else as JSON.
pub fn any_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
