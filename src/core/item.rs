//! # Actionable Items
//!
//! One button, menu row, or tab, normalized from its raw JSON entry.
//!
//! ```text
//! { "label": "Save", "icon": "img/save.png", "callback": "MenuClick4" }
//!        │
//!        ▼  ActionableItem::from_json(value, assets)
//! ActionableItem
//! ├── title: "Save"            // registry key, never empty
//! ├── disabled / selected      // default false
//! ├── callback_id: "MenuClick4"
//! ├── icon: Option<Icon>       // None if missing or unreadable
//! ├── flags: DisplayFlags      // set by the reconciler
//! └── order: i32               // set by the reconciler
//! ```

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use log::debug;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::bridge::assets::AssetContext;
use crate::core::error::ChromeError;
use crate::core::lenient;

/// Raw shape of one entry in `actions`, `menu` or `tabs`.
///
/// Only `label` is strict. Optional fields of the wrong type, or `null`,
/// read as absent.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ItemSpec {
    /// Display label; also the registry key.
    pub label: String,
    /// Render the entry greyed out.
    #[serde(default, deserialize_with = "lenient::bool_or_default")]
    #[schemars(with = "Option<bool>")]
    pub disabled: Option<bool>,
    /// Tabs only: make this the active tab.
    #[serde(default, deserialize_with = "lenient::bool_or_default")]
    #[schemars(with = "Option<bool>")]
    pub selected: Option<bool>,
    /// Callback identifier to notify when the entry is activated.
    #[serde(default, deserialize_with = "lenient::string_or_default")]
    #[schemars(with = "Option<String>")]
    pub callback: Option<String>,
    /// Asset name, relative to the content root.
    #[serde(default, deserialize_with = "lenient::string_or_default")]
    #[schemars(with = "Option<String>")]
    pub icon: Option<String>,
}

bitflags! {
    /// Rendering hints for where an item may be shown. Empty means "never".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u32 {
        const IF_ROOM = 1;
        const ALWAYS = 2;
        const WITH_TEXT = 4;
        const COLLAPSE_ACTION_VIEW = 8;
    }
}

/// Decoded icon bytes plus the asset name they came from.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub data: Arc<[u8]>,
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionableItem {
    title: String,
    disabled: bool,
    selected: bool,
    callback_id: String,
    icon: Option<Icon>,
    flags: DisplayFlags,
    order: i32,
}

impl ActionableItem {
    /// Builds an item from one JSON entry.
    ///
    /// Fails with `ConfigParse` when the entry is not an object or `label` is
    /// missing, not a string, or empty. A missing or unreadable icon is not an
    /// error; the item is built without one.
    pub fn from_json(value: &Value, assets: &AssetContext) -> Result<Self, ChromeError> {
        if !value.is_object() {
            return Err(ChromeError::ConfigParse(format!(
                "item must be an object, got {value}"
            )));
        }
        let spec = ItemSpec::deserialize(value)?;
        Self::from_spec(spec, assets)
    }

    pub fn from_spec(spec: ItemSpec, assets: &AssetContext) -> Result<Self, ChromeError> {
        if spec.label.is_empty() {
            return Err(ChromeError::ConfigParse("item label is empty".into()));
        }

        let icon = spec
            .icon
            .filter(|name| !name.is_empty())
            .and_then(|name| match assets.load(&name) {
                Ok(bytes) => Some(Icon {
                    name,
                    data: bytes.into(),
                }),
                Err(e) => {
                    debug!("Icon '{}' for '{}' not loaded: {}", name, spec.label, e);
                    None
                }
            });

        Ok(Self {
            title: spec.label,
            disabled: spec.disabled.unwrap_or(false),
            selected: spec.selected.unwrap_or(false),
            callback_id: spec.callback.unwrap_or_default(),
            icon,
            flags: DisplayFlags::empty(),
            order: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Empty when no callback is wired.
    pub fn callback_id(&self) -> &str {
        &self.callback_id
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.flags = flags;
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
