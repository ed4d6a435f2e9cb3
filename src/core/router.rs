//! # Callback Router
//!
//! Turns native interaction events back into keep-alive results on the
//! callback identifier the web layer supplied. A callback identifier can
//! receive any number of results; each activation produces one.

use log::{debug, warn};

use crate::bridge::{PluginResult, ResultSink};
use crate::core::registry::ItemRegistry;

/// A user interaction reported by the native chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeEvent {
    /// A menu row or action-bar button was tapped; identified by its title.
    MenuItemActivated { title: String },
    /// Tabs carry the callback they were bound to when created.
    TabSelected { callback_id: String },
    TabReselected { callback_id: String },
    TabUnselected { callback_id: String },
}

/// What routing an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    Emitted(String),
    Ignored,
    /// Menu title not in the registry (changed between menu build and click).
    Unknown(String),
}

pub fn route(event: &ChromeEvent, registry: &ItemRegistry, sink: &dyn ResultSink) -> Routed {
    match event {
        ChromeEvent::MenuItemActivated { title } => match registry.lookup(title) {
            Some(item) => emit(item.callback_id(), sink),
            None => {
                warn!("Selected unknown menu item: {}", title);
                Routed::Unknown(title.clone())
            }
        },
        ChromeEvent::TabSelected { callback_id } | ChromeEvent::TabReselected { callback_id } => {
            emit(callback_id, sink)
        }
        ChromeEvent::TabUnselected { .. } => Routed::Ignored,
    }
}

fn emit(callback_id: &str, sink: &dyn ResultSink) -> Routed {
    if callback_id.is_empty() {
        debug!("No callback wired, nothing to emit");
        return Routed::Ignored;
    }
    sink.emit_result(callback_id, PluginResult::keep_alive());
    Routed::Emitted(callback_id.to_string())
}
