//! List Entity
//!
//! A named, ordered collection of items with a display expansion flag.

use serde::{Deserialize, Serialize};

use super::entity::{position_of, Entity};
use super::item::Item;

/// A named checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Identifier, unique among lists
    pub id: u64,
    pub title: String,
    /// Whether the item body is shown
    #[serde(default = "default_true")]
    pub expanded: bool,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<Item>,
}

fn default_true() -> bool {
    true
}

impl List {
    /// Create a new, expanded, empty list
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            expanded: true,
            items: Vec::new(),
        }
    }

    pub fn item_index(&self, item_id: u64) -> Option<usize> {
        position_of(&self.items, item_id)
    }

    pub fn item(&self, item_id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item ids in display order
    pub fn item_ids(&self) -> Vec<u64> {
        self.items.iter().map(|i| i.id).collect()
    }
}

impl Entity for List {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = List::new(3, "Groceries");
        assert_eq!(list.id(), 3);
        assert!(list.expanded);
        assert!(list.is_empty());
    }

    #[test]
    fn test_item_lookup() {
        let mut list = List::new(1, "L");
        list.items.push(Item::new(10, "a"));
        list.items.push(Item::new(11, "b"));
        assert_eq!(list.item_index(11), Some(1));
        assert_eq!(list.item(10).map(|i| i.text.as_str()), Some("a"));
        assert!(list.item(12).is_none());
    }

    #[test]
    fn test_expanded_defaults_true() {
        let list: List = serde_json::from_str(r#"{"id":1,"title":"t"}"#).unwrap();
        assert!(list.expanded);
        assert!(list.items.is_empty());
    }
}
