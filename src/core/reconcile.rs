//! # Reconciler
//!
//! Applies one configuration message to a [`Chrome`] and queues the render
//! commands that bring the native chrome in line with it.
//!
//! ```text
//! 1. title     (if non-empty, or forced)
//! 2. nav       (bad keyword aborts here)
//! 3. clear     (forced only)
//! 4. actions   → registry, IF_ROOM | WITH_TEXT
//! 5. menu      → registry, order = index
//! 6. tabs      → AddTab commands, then tabbed mode
//! 7. RebuildMenu
//! ```
//!
//! Updates are not transactional: if step 2 fails, the title set in step 1
//! stays. Bad entries inside an array are logged and skipped.

use log::{debug, info, warn};
use serde_json::Value;

use crate::bridge::assets::AssetContext;
use crate::core::error::ChromeError;
use crate::core::item::{ActionableItem, DisplayFlags};
use crate::core::message::ConfigMessage;
use crate::core::nav::NavMode;
use crate::core::state::Chrome;
use crate::render::{RenderCommand, RenderQueue, TabSpec};

pub fn reconcile(
    chrome: &mut Chrome,
    message: &ConfigMessage,
    force: bool,
    assets: &AssetContext,
    queue: &RenderQueue,
) -> Result<(), ChromeError> {
    info!("Reconciling chrome (force={})", force);

    if let Some(title) = message.title() {
        set_title(chrome, title, queue);
    } else if force {
        set_title(chrome, "", queue);
    }

    let nav = NavMode::resolve(message.nav.as_deref())?;
    chrome.state.nav = nav;
    queue.post(RenderCommand::SetBackAffordance(nav.shows_affordance()));

    if force {
        debug!("Forced update: clearing {} registry items", chrome.registry.len());
        chrome.registry.clear();
    }

    if let Some(actions) = &message.actions {
        for (i, entry) in actions.iter().enumerate() {
            if let Some(mut item) = build_entry("actions", i, entry, assets) {
                item.set_flags(DisplayFlags::IF_ROOM | DisplayFlags::WITH_TEXT);
                chrome.registry.upsert(item);
            }
        }
    }

    if let Some(menu) = &message.menu {
        for (i, entry) in menu.iter().enumerate() {
            if let Some(mut item) = build_entry("menu", i, entry, assets) {
                item.set_order(i32::try_from(i).unwrap_or(i32::MAX));
                chrome.registry.upsert(item);
            }
        }
    }

    if let Some(tabs) = &message.tabs {
        for (i, entry) in tabs.iter().enumerate() {
            if let Some(item) = build_entry("tabs", i, entry, assets) {
                queue.post(RenderCommand::AddTab(TabSpec::from(&item)));
            }
        }
        if !tabs.is_empty() {
            chrome.state.tabbed = true;
            queue.post(RenderCommand::SetTabbedNavigation);
        }
    }

    queue.post(RenderCommand::RebuildMenu(chrome.registry.menu_entries()));
    Ok(())
}

fn set_title(chrome: &mut Chrome, title: &str, queue: &RenderQueue) {
    chrome.state.title = title.to_string();
    queue.post(RenderCommand::SetTitle(title.to_string()));
}

fn build_entry(
    array: &str,
    index: usize,
    entry: &Value,
    assets: &AssetContext,
) -> Option<ActionableItem> {
    match ActionableItem::from_json(entry, assets) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Skipping {}[{}]: {}", array, index, e);
            None
        }
    }
}
