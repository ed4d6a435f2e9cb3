//! # Configuration Messages
//!
//! The JSON object the web layer sends with `update`:
//!
//! ```text
//! {
//!   "title":   string?,
//!   "nav":     "none" | "back" | "menu" | "close"?,
//!   "actions": [ ItemSpec ]?,
//!   "menu":    [ ItemSpec ]?,
//!   "tabs":    [ ItemSpec ]?
//! }
//! ```
//!
//! The container shape is validated up front; a sub-array that is present but
//! not an array fails the whole message. Scalars are forgiving: a numeric
//! `title` is used as text, and a non-string `nav` is kept as text so it
//! fails later as an unknown keyword. Entries inside the arrays stay raw
//! so a single bad entry can be skipped without losing its neighbours.

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::error::ChromeError;
use crate::core::item::ItemSpec;
use crate::core::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct ConfigMessage {
    /// Title text; ignored when empty unless the update is forced.
    #[serde(default, deserialize_with = "lenient::string_or_default")]
    #[schemars(with = "Option<String>")]
    pub title: Option<String>,
    /// Navigation affordance keyword, case-insensitive. Defaults to "none".
    #[serde(default, deserialize_with = "lenient::any_as_string")]
    #[schemars(with = "Option<String>")]
    pub nav: Option<String>,
    /// Action-bar buttons.
    #[serde(default)]
    #[schemars(with = "Option<Vec<ItemSpec>>")]
    pub actions: Option<Vec<Value>>,
    /// Overflow menu rows, in display order.
    #[serde(default)]
    #[schemars(with = "Option<Vec<ItemSpec>>")]
    pub menu: Option<Vec<Value>>,
    /// Tab strip entries.
    #[serde(default)]
    #[schemars(with = "Option<Vec<ItemSpec>>")]
    pub tabs: Option<Vec<Value>>,
}

impl ConfigMessage {
    pub fn from_value(value: &Value) -> Result<Self, ChromeError> {
        if !value.is_object() {
            return Err(ChromeError::ConfigParse(format!(
                "configuration must be an object, got {value}"
            )));
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChromeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// The title, treating an empty string as absent.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// JSON Schema describing [`ConfigMessage`].
pub fn config_schema() -> RootSchema {
    schemars::schema_for!(ConfigMessage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_all_absent() {
        let msg = ConfigMessage::from_value(&json!({})).unwrap();
        assert_eq!(msg, ConfigMessage::default());
        assert!(msg.title().is_none());
    }

    #[test]
    fn test_entries_stay_raw() {
        let msg = ConfigMessage::from_value(&json!({
            "title": "Home",
            "menu": [{ "label": "A" }, "garbage", { "nolabel": true }]
        }))
        .unwrap();
        assert_eq!(msg.title(), Some("Home"));
        assert_eq!(msg.menu.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_non_array_container_rejected() {
        let err = ConfigMessage::from_value(&json!({ "menu": { "label": "A" } })).unwrap_err();
        assert!(matches!(err, ChromeError::ConfigParse(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(ConfigMessage::from_value(&json!([1, 2])).is_err());
        assert!(ConfigMessage::from_json_str("not json").is_err());
    }

    #[test]
    fn test_numeric_title_read_as_text() {
        let msg = ConfigMessage::from_value(&json!({ "title": 42, "menu": [{ "label": "A" }] }))
            .unwrap();
        assert_eq!(msg.title(), Some("42"));
        assert_eq!(msg.menu.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_unusable_title_treated_as_absent() {
        let msg = ConfigMessage::from_value(&json!({ "title": ["x"] })).unwrap();
        assert!(msg.title().is_none());
    }

    #[test]
    fn test_non_string_nav_kept_as_text() {
        let msg = ConfigMessage::from_value(&json!({ "nav": 5 })).unwrap();
        assert_eq!(msg.nav.as_deref(), Some("5"));
        let msg = ConfigMessage::from_value(&json!({ "nav": null })).unwrap();
        assert!(msg.nav.is_none());
    }

    #[test]
    fn test_empty_title_treated_as_absent() {
        let msg = ConfigMessage::from_value(&json!({ "title": "" })).unwrap();
        assert!(msg.title().is_none());
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_value(config_schema()).unwrap();
        let props = &schema["properties"];
        for field in ["title", "nav", "actions", "menu", "tabs"] {
            assert!(props.get(field).is_some(), "missing {field}");
        }
        assert!(schema["definitions"].get("ItemSpec").is_some());
    }
}
