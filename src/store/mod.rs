//! In-memory shopping item store.
//!
//! The store owns the ordered item list, the id counter and the id of the
//! item currently open in the inline editor. Every mutation builds a new
//! list and swaps it in place of the old one; readers only ever see a
//! complete list.

mod error;
mod item;

pub use error::StoreError;
pub use item::{ItemId, ShoppingItem};

/// Quantity applied when an edited quantity does not parse.
pub const FALLBACK_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<ShoppingItem>,
    next_id: u64,
    editing: Option<ItemId>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            editing: None,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities, saturating at `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(u64::from(item.quantity)))
    }

    /// Id of the item shown as an editor row, if any.
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing == Some(id)
    }

    /// Append a new item.
    ///
    /// Rejects blank names and quantities that are not non-negative whole
    /// numbers. Ids come from a counter that deletions never rewind.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Result<ItemId, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::BlankName);
        }
        let quantity = parse_quantity(quantity_text).ok_or_else(|| {
            StoreError::InvalidQuantity {
                input: quantity_text.to_string(),
            }
        })?;

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(ShoppingItem::new(id, name, quantity));
        self.items = items;
        Ok(id)
    }

    /// Open `id` in the editor, closing any other editor. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: ItemId) {
        if self.get(id).is_some() {
            self.editing = Some(id);
        }
    }

    /// Close the editor and write the edited values to `id`.
    ///
    /// A quantity that does not parse becomes [`FALLBACK_QUANTITY`].
    pub fn commit_edit(&mut self, id: ItemId, name: &str, quantity_text: &str) {
        self.editing = None;
        if self.get(id).is_none() {
            return;
        }
        let quantity = parse_quantity(quantity_text).unwrap_or(FALLBACK_QUANTITY);
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    ShoppingItem::new(id, name, quantity)
                } else {
                    item.clone()
                }
            })
            .collect();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove the first item with `id`. Returns the removed item.
    pub fn delete(&mut self, id: ItemId) -> Option<ShoppingItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items[position].clone();
        self.items = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != position)
            .map(|(_, item)| item.clone())
            .collect();
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(removed)
    }
}

fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[(&str, &str)]) -> ItemStore {
        let mut store = ItemStore::new();
        for (name, quantity) in names {
            store.add(name, quantity).unwrap();
        }
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.editing(), None);
        assert_eq!(store.total_quantity(), 0);
    }

    #[test]
    fn add_first_item() {
        let mut store = ItemStore::new();
        let id = store.add("Milk", "2").unwrap();
        assert_eq!(id, ItemId(1));
        assert_eq!(store.items(), &[ShoppingItem::new(ItemId(1), "Milk", 2)]);
        assert!(!store.is_editing(id));
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let store = store_with(&[("Milk", "2"), ("Eggs", "3")]);
        let ids: Vec<_> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut store = store_with(&[("Milk", "2")]);
        assert_eq!(store.add("   ", "1"), Err(StoreError::BlankName));
        assert_eq!(store.add("", "1"), Err(StoreError::BlankName));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_unparsable_quantity() {
        let mut store = ItemStore::new();
        for bad in ["", "abc", "-1", "2.5"] {
            assert_eq!(
                store.add("Milk", bad),
                Err(StoreError::InvalidQuantity {
                    input: bad.to_string()
                })
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_trims_quantity() {
        let mut store = ItemStore::new();
        store.add("Milk", " 4 ").unwrap();
        assert_eq!(store.items()[0].quantity, 4);
    }

    #[test]
    fn rejected_add_does_not_consume_id() {
        let mut store = ItemStore::new();
        let _ = store.add("Milk", "x");
        assert_eq!(store.add("Milk", "1").unwrap(), ItemId(1));
    }

    #[test]
    fn ids_stay_unique_after_delete() {
        let mut store = store_with(&[("Milk", "2"), ("Eggs", "3")]);
        store.delete(ItemId(1));
        let id = store.add("Bread", "1").unwrap();
        assert_eq!(id, ItemId(3));

        let mut ids: Vec<_> = store.items().iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn begin_edit_selects_single_item() {
        let mut store = store_with(&[("Milk", "2"), ("Eggs", "3"), ("Bread", "1")]);
        store.begin_edit(ItemId(3));
        store.begin_edit(ItemId(1));
        assert_eq!(store.editing(), Some(ItemId(1)));
        assert!(store.is_editing(ItemId(1)));
        assert!(!store.is_editing(ItemId(2)));
        assert!(!store.is_editing(ItemId(3)));
    }

    #[test]
    fn begin_edit_unknown_id_is_noop() {
        let mut store = store_with(&[("Milk", "2")]);
        store.begin_edit(ItemId(1));
        store.begin_edit(ItemId(42));
        assert_eq!(store.editing(), Some(ItemId(1)));
    }

    #[test]
    fn commit_edit_falls_back_to_one() {
        let mut store = store_with(&[("Milk", "2"), ("Eggs", "3")]);
        store.begin_edit(ItemId(1));
        store.commit_edit(ItemId(1), "Milk2", "abc");
        assert_eq!(store.get(ItemId(1)), Some(&ShoppingItem::new(ItemId(1), "Milk2", 1)));
        assert_eq!(store.get(ItemId(2)), Some(&ShoppingItem::new(ItemId(2), "Eggs", 3)));
        assert_eq!(store.editing(), None);
    }

    #[test]
    fn commit_edit_applies_quantity() {
        let mut store = store_with(&[("Milk", "2")]);
        store.begin_edit(ItemId(1));
        store.commit_edit(ItemId(1), "Oat milk", "6");
        assert_eq!(store.items()[0].quantity, 6);
        assert_eq!(store.items()[0].name, "Oat milk");
    }

    #[test]
    fn commit_edit_unknown_id_only_closes_editor() {
        let mut store = store_with(&[("Milk", "2")]);
        store.begin_edit(ItemId(1));
        store.commit_edit(ItemId(9), "Other", "5");
        assert_eq!(store.editing(), None);
        assert_eq!(store.items(), &[ShoppingItem::new(ItemId(1), "Milk", 2)]);
    }

    #[test]
    fn delete_removes_only_target() {
        let mut store = store_with(&[("Milk", "2"), ("Eggs", "3")]);
        let removed = store.delete(ItemId(2));
        assert_eq!(removed.map(|item| item.name), Some("Eggs".to_string()));
        assert_eq!(store.items(), &[ShoppingItem::new(ItemId(1), "Milk", 2)]);
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut store = store_with(&[("Milk", "2")]);
        let before = store.clone();
        assert_eq!(store.delete(ItemId(5)), None);
        assert_eq!(store, before);
    }

    #[test]
    fn delete_clears_editor_of_removed_item() {
        let mut store = store_with(&[("Milk", "2"), ("Eggs", "3")]);
        store.begin_edit(ItemId(2));
        store.delete(ItemId(1));
        assert_eq!(store.editing(), Some(ItemId(2)));
        store.delete(ItemId(2));
        assert_eq!(store.editing(), None);
    }

    #[test]
    fn total_quantity_sums_items() {
        let store = store_with(&[("Milk", "2"), ("Eggs", "12")]);
        assert_eq!(store.total_quantity(), 14);
    }
}
