//! # Item Registry
//!
//! Title-keyed store of the actionable items currently shown in the menu and
//! action bar. Map order is irrelevant; display order comes from each item's
//! `order`, ties broken by title.

use std::collections::HashMap;

use crate::core::item::ActionableItem;
use crate::render::MenuEntry;

#[derive(Debug, Default, Clone)]
pub struct ItemRegistry {
    items: HashMap<String, ActionableItem>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`, replacing any previous item with the same title.
    pub fn upsert(&mut self, item: ActionableItem) -> Option<ActionableItem> {
        self.items.insert(item.title().to_string(), item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn lookup(&self, title: &str) -> Option<&ActionableItem> {
        self.items.get(title)
    }

    /// Snapshot of all items in display order.
    pub fn all(&self) -> impl Iterator<Item = &ActionableItem> + '_ {
        let mut items: Vec<&ActionableItem> = self.items.values().collect();
        items.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.title().cmp(b.title()))
        });
        items.into_iter()
    }

    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.all().map(MenuEntry::from).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;

    fn titles(registry: &ItemRegistry) -> Vec<&str> {
        registry.all().map(|i| i.title()).collect()
    }

    #[test]
    fn test_upsert_overwrites_same_title() {
        let mut registry = ItemRegistry::new();
        assert!(registry.upsert(item("Save", "cb1")).is_none());
        let old = registry.upsert(item("Save", "cb2")).expect("replaced");

        assert_eq!(old.callback_id(), "cb1");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("Save").unwrap().callback_id(), "cb2");
    }

    #[test]
    fn test_all_sorts_by_order_then_title() {
        let mut registry = ItemRegistry::new();
        for (title, order) in [("C", 0), ("A", 2), ("B", 1), ("Z", 0)] {
            let mut it = item(title, "");
            it.set_order(order);
            registry.upsert(it);
        }
        assert_eq!(titles(&registry), vec!["C", "Z", "B", "A"]);
    }

    #[test]
    fn test_clear_empties() {
        let mut registry = ItemRegistry::new();
        registry.upsert(item("A", ""));
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.lookup("A").is_none());
        assert_eq!(registry.all().count(), 0);
    }

    #[test]
    fn test_menu_entries_reflect_items() {
        let mut registry = ItemRegistry::new();
        let mut it = item("Delete", "cb");
        it.set_order(3);
        registry.upsert(it);

        let entries = registry.menu_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Delete");
        assert_eq!(entries[0].order, 3);
        assert!(entries[0].enabled);
    }
}
