//! # Render Adapter Boundary
//!
//! The core never paints anything. It posts [`RenderCommand`]s to a
//! [`RenderQueue`] and moves on; the [`Painter`] on the owner thread drains
//! them into whatever [`RenderSurface`] the host was built with (a native
//! action bar, a test recorder, the CLI's printing surface).
//!
//! ```text
//!   reconcile()                       owner thread
//!  ┌───────────┐   RenderCommand   ┌──────────┐   trait calls   ┌───────────────┐
//!  │   core    │ ────────────────▶ │ Painter  │ ──────────────▶ │ RenderSurface │
//!  └───────────┘   (fire & forget) └──────────┘                 └───────────────┘
//! ```

use std::sync::mpsc;

use log::{debug, warn};

use crate::core::item::{ActionableItem, DisplayFlags, Icon};

/// One row of the native menu / action bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub order: i32,
    pub title: String,
    pub flags: DisplayFlags,
    pub enabled: bool,
    pub icon: Option<Icon>,
}

impl From<&ActionableItem> for MenuEntry {
    fn from(item: &ActionableItem) -> Self {
        Self {
            order: item.order(),
            title: item.title().to_string(),
            flags: item.flags(),
            enabled: !item.is_disabled(),
            icon: item.icon().cloned(),
        }
    }
}

/// A tab to materialize, bound to the callback that its selection fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub title: String,
    pub icon: Option<Icon>,
    pub selected: bool,
    pub callback_id: String,
}

impl From<&ActionableItem> for TabSpec {
    fn from(item: &ActionableItem) -> Self {
        Self {
            title: item.title().to_string(),
            icon: item.icon().cloned(),
            selected: item.is_selected(),
            callback_id: item.callback_id().to_string(),
        }
    }
}

/// A mutation request for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    SetTitle(String),
    SetBackAffordance(bool),
    Hide,
    Show,
    /// Replace the whole menu with these entries, already in display order.
    RebuildMenu(Vec<MenuEntry>),
    AddTab(TabSpec),
    SetTabbedNavigation,
}

/// The native chrome the painter drives. Only ever called on the owner thread.
pub trait RenderSurface {
    fn set_title(&mut self, title: &str);
    fn set_back_affordance(&mut self, enabled: bool);
    fn hide(&mut self);
    fn show(&mut self);
    fn clear_menu(&mut self);
    fn add_menu_entry(&mut self, entry: &MenuEntry);
    /// Adds a tab; when `tab.selected` is set it also becomes the active tab.
    fn add_tab(&mut self, tab: &TabSpec);
    fn set_tabbed_navigation_mode(&mut self);
}

/// Sending half of the render command queue.
#[derive(Debug, Clone)]
pub struct RenderQueue {
    tx: mpsc::Sender<RenderCommand>,
}

impl RenderQueue {
    pub fn post(&self, command: RenderCommand) {
        debug!("Queueing render command: {:?}", command);
        if self.tx.send(command).is_err() {
            warn!("Failed to queue render command: painter dropped");
        }
    }
}

/// Receiving half of the render command queue.
#[derive(Debug)]
pub struct Painter {
    rx: mpsc::Receiver<RenderCommand>,
}

/// Creates a connected queue/painter pair.
pub fn channel() -> (RenderQueue, Painter) {
    let (tx, rx) = mpsc::channel();
    (RenderQueue { tx }, Painter { rx })
}

impl Painter {
    /// Applies every pending command to `surface`, returning how many ran.
    pub fn flush(&self, surface: &mut dyn RenderSurface) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.rx.try_recv() {
            apply(surface, command);
            applied += 1;
        }
        applied
    }

    /// Removes pending commands without applying them.
    pub fn drain(&self) -> Vec<RenderCommand> {
        self.rx.try_iter().collect()
    }
}

fn apply(surface: &mut dyn RenderSurface, command: RenderCommand) {
    match command {
        RenderCommand::SetTitle(title) => surface.set_title(&title),
        RenderCommand::SetBackAffordance(enabled) => surface.set_back_affordance(enabled),
        RenderCommand::Hide => surface.hide(),
        RenderCommand::Show => surface.show(),
        RenderCommand::RebuildMenu(entries) => {
            surface.clear_menu();
            for entry in &entries {
                surface.add_menu_entry(entry);
            }
        }
        RenderCommand::AddTab(tab) => surface.add_tab(&tab),
        RenderCommand::SetTabbedNavigation => surface.set_tabbed_navigation_mode(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, SurfaceCall};

    fn entry(order: i32, title: &str) -> MenuEntry {
        MenuEntry {
            order,
            title: title.into(),
            flags: DisplayFlags::empty(),
            enabled: true,
            icon: None,
        }
    }

    #[test]
    fn test_flush_applies_in_post_order() {
        let (queue, painter) = channel();
        queue.post(RenderCommand::SetTitle("Inbox".into()));
        queue.post(RenderCommand::Show);

        let mut surface = RecordingSurface::default();
        assert_eq!(painter.flush(&mut surface), 2);
        assert_eq!(
            surface.calls,
            vec![SurfaceCall::SetTitle("Inbox".into()), SurfaceCall::Show]
        );
        assert_eq!(painter.flush(&mut surface), 0);
    }

    #[test]
    fn test_rebuild_menu_clears_then_adds() {
        let (queue, painter) = channel();
        queue.post(RenderCommand::RebuildMenu(vec![entry(0, "A"), entry(1, "B")]));

        let mut surface = RecordingSurface::default();
        painter.flush(&mut surface);
        assert_eq!(
            surface.calls,
            vec![
                SurfaceCall::ClearMenu,
                SurfaceCall::AddMenuEntry(entry(0, "A")),
                SurfaceCall::AddMenuEntry(entry(1, "B")),
            ]
        );
    }

    #[test]
    fn test_post_after_painter_dropped_does_not_panic() {
        let (queue, painter) = channel();
        drop(painter);
        queue.post(RenderCommand::Hide);
    }
}
