//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::bridge::assets::{AssetContext, DEFAULT_CONTENT_ROOT, MemoryAssets};
use crate::bridge::{PluginResult, ResultSink};
use crate::core::item::ActionableItem;
use crate::render::{MenuEntry, RenderSurface, TabSpec};

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetTitle(String),
    SetBackAffordance(bool),
    Hide,
    Show,
    ClearMenu,
    AddMenuEntry(MenuEntry),
    AddTab(TabSpec),
    SetTabbedNavigation,
}

/// A surface that remembers every call, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RenderSurface for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.calls.push(SurfaceCall::SetTitle(title.to_string()));
    }

    fn set_back_affordance(&mut self, enabled: bool) {
        self.calls.push(SurfaceCall::SetBackAffordance(enabled));
    }

    fn hide(&mut self) {
        self.calls.push(SurfaceCall::Hide);
    }

    fn show(&mut self) {
        self.calls.push(SurfaceCall::Show);
    }

    fn clear_menu(&mut self) {
        self.calls.push(SurfaceCall::ClearMenu);
    }

    fn add_menu_entry(&mut self, entry: &MenuEntry) {
        self.calls.push(SurfaceCall::AddMenuEntry(entry.clone()));
    }

    fn add_tab(&mut self, tab: &TabSpec) {
        self.calls.push(SurfaceCall::AddTab(tab.clone()));
    }

    fn set_tabbed_navigation_mode(&mut self) {
        self.calls.push(SurfaceCall::SetTabbedNavigation);
    }
}

/// A sink that keeps every emitted result.
#[derive(Debug, Default)]
pub struct RecordingSink {
    results: Mutex<Vec<(String, PluginResult)>>,
}

impl RecordingSink {
    pub fn results(&self) -> Vec<(String, PluginResult)> {
        self.results.lock().unwrap().clone()
    }
}

impl ResultSink for RecordingSink {
    fn emit_result(&self, callback_id: &str, result: PluginResult) {
        self.results
            .lock()
            .unwrap()
            .push((callback_id.to_string(), result));
    }
}

/// In-memory package with a couple of icons under the default content root.
pub fn test_assets() -> AssetContext {
    let assets = MemoryAssets::new()
        .with("www/img/home.png", b"home-png".to_vec())
        .with("www/img/share.png", b"share-png".to_vec());
    AssetContext::new(Arc::new(assets), DEFAULT_CONTENT_ROOT)
}

/// Builds a plain item with the given title and callback.
pub fn item(title: &str, callback: &str) -> ActionableItem {
    ActionableItem::from_json(&json!({ "label": title, "callback": callback }), &test_assets())
        .unwrap()
}
