//! # Chrome State
//!
//! Everything one chrome session knows, owned by a single thread.
//!
//! ```text
//! Chrome
//! ├── state: ChromeState
//! │   ├── title: String        // "" until first set
//! │   ├── nav: NavMode         // None
//! │   ├── visible: bool        // false until shown
//! │   └── tabbed: bool         // tab strip requested
//! └── registry: ItemRegistry   // menu + action-bar items by title
//! ```
//!
//! State changes only happen through `action::update` and `reconcile`.

use crate::core::nav::NavMode;
use crate::core::registry::ItemRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub title: String,
    pub nav: NavMode,
    pub visible: bool,
    pub tabbed: bool,
}

#[derive(Debug, Default)]
pub struct Chrome {
    pub state: ChromeState,
    pub registry: ItemRegistry,
}

impl Chrome {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_new_defaults() {
        let chrome = Chrome::new();
        assert_eq!(chrome.state.title, "");
        assert_eq!(chrome.state.nav, NavMode::None);
        assert!(!chrome.state.visible);
        assert!(!chrome.state.tabbed);
        assert!(chrome.registry.is_empty());
    }
}
