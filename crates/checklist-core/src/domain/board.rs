//! Board
//!
//! The ordered sequence of lists. This is the unit of persistence: it is
//! read once at startup and written in full after every mutation.

use serde::{Deserialize, Serialize};

use super::entity::{position_of, DomainError, DomainResult};
use super::item::{Item, ItemRef};
use super::list::List;

/// All lists in display order. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    pub fn new(lists: Vec<List>) -> Self {
        Self { lists }
    }

    /// Built-in dataset used when nothing usable is stored
    pub fn default_dataset() -> Self {
        let mut list = List::new(1, "List1");
        list.items = vec![
            Item::new(101, "Item1"),
            Item {
                completed: true,
                ..Item::new(102, "Item2")
            },
            Item::new(103, "Item3"),
        ];
        Self::new(vec![list])
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list_index(&self, list_id: u64) -> Option<usize> {
        position_of(&self.lists, list_id)
    }

    pub fn list(&self, list_id: u64) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    fn list_mut(&mut self, list_id: u64) -> DomainResult<&mut List> {
        self.lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))
    }

    pub fn item(&self, item: ItemRef) -> Option<&Item> {
        self.list(item.list_id).and_then(|l| l.item(item.item_id))
    }

    fn item_mut(&mut self, item: ItemRef) -> DomainResult<&mut Item> {
        self.list_mut(item.list_id)?
            .item_mut(item.item_id)
            .ok_or_else(|| not_found_item(item))
    }

    /// Largest id on the board (lists and items), used to seed id generation
    pub fn max_id(&self) -> u64 {
        self.lists
            .iter()
            .flat_map(|l| std::iter::once(l.id).chain(l.items.iter().map(|i| i.id)))
            .max()
            .unwrap_or(0)
    }

    /// Append a list at the end
    pub fn add_list(&mut self, list: List) -> DomainResult<()> {
        if self.list_index(list.id).is_some() {
            return Err(DomainError::Conflict(format!("list {} already exists", list.id)));
        }
        self.lists.push(list);
        Ok(())
    }

    /// Remove a list together with all of its items
    pub fn remove_list(&mut self, list_id: u64) -> DomainResult<List> {
        let index = self
            .list_index(list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))?;
        Ok(self.lists.remove(index))
    }

    /// Append an item to a list and expand that list
    pub fn add_item(&mut self, list_id: u64, item: Item) -> DomainResult<()> {
        let list = self.list_mut(list_id)?;
        if list.item_index(item.id).is_some() {
            return Err(DomainError::Conflict(format!(
                "item {} already exists in list {}",
                item.id, list_id
            )));
        }
        list.items.push(item);
        list.expanded = true;
        Ok(())
    }

    pub fn remove_item(&mut self, item: ItemRef) -> DomainResult<Item> {
        let list = self.list_mut(item.list_id)?;
        let index = list.item_index(item.item_id).ok_or_else(|| not_found_item(item))?;
        Ok(list.items.remove(index))
    }

    /// Returns the new completion state
    pub fn toggle_completed(&mut self, item: ItemRef) -> DomainResult<bool> {
        Ok(self.item_mut(item)?.toggle_completed())
    }

    /// Returns the new expansion state
    pub fn toggle_expanded(&mut self, list_id: u64) -> DomainResult<bool> {
        let list = self.list_mut(list_id)?;
        list.expanded = !list.expanded;
        Ok(list.expanded)
    }

    pub fn set_expanded(&mut self, list_id: u64, expanded: bool) -> DomainResult<()> {
        self.list_mut(list_id)?.expanded = expanded;
        Ok(())
    }

    pub fn set_link(&mut self, item: ItemRef, link: impl Into<String>) -> DomainResult<()> {
        self.item_mut(item)?.link = link.into();
        Ok(())
    }

    /// Move a list to the slot in front of `drop_index`.
    ///
    /// `drop_index` counts slots in the pre-move sequence (0..=len), so when the
    /// list moves down it is shifted by one to account for its own removal.
    /// Returns the index the list ends up at.
    pub fn move_list(&mut self, list_id: u64, drop_index: usize) -> DomainResult<usize> {
        let from = self
            .list_index(list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))?;
        let list = self.lists.remove(from);
        let adjusted = if from < drop_index { drop_index - 1 } else { drop_index };
        let at = adjusted.min(self.lists.len());
        self.lists.insert(at, list);
        Ok(at)
    }

    /// Move an item to the target item's index in the target's list.
    ///
    /// Both indices are resolved before the source is removed, which gives
    /// insert-before semantics when moving up or across lists.
    pub fn move_item(&mut self, source: ItemRef, target: ItemRef) -> DomainResult<()> {
        let source_list = self
            .list_index(source.list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", source.list_id)))?;
        let target_list = self
            .list_index(target.list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", target.list_id)))?;

        let source_index = self.lists[source_list]
            .item_index(source.item_id)
            .ok_or_else(|| not_found_item(source))?;
        let target_index = self.lists[target_list]
            .item_index(target.item_id)
            .ok_or_else(|| not_found_item(target))?;

        let already_there = self.lists[target_list].item_index(source.item_id).is_some();
        if source_list != target_list && already_there {
            return Err(DomainError::Conflict(format!(
                "item {} already exists in list {}",
                source.item_id, target.list_id
            )));
        }

        let item = self.lists[source_list].items.remove(source_index);
        let items = &mut self.lists[target_list].items;
        let at = target_index.min(items.len());
        items.insert(at, item);
        Ok(())
    }
}

fn not_found_item(item: ItemRef) -> DomainError {
    DomainError::NotFound(format!("item {} in list {}", item.item_id, item.list_id))
}
