//! Item Entity
//!
//! A single checklist entry. Items always live inside a List.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::LINK_PLACEHOLDER;

/// A checklist entry with an optional link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within the owning list
    pub id: u64,
    /// Item text content
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
    /// URL attached to the item, empty when unset
    #[serde(default)]
    pub link: String,
}

impl Item {
    /// Create a new, uncompleted item without a link
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            link: String::new(),
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }

    /// Value pre-filled in the link editor
    pub fn link_or_placeholder(&self) -> &str {
        if self.has_link() {
            &self.link
        } else {
            LINK_PLACEHOLDER
        }
    }

    /// Flip completion, returning the new state
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

impl Entity for Item {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fully qualified item identity (item ids may repeat across lists)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub list_id: u64,
    pub item_id: u64,
}

impl ItemRef {
    pub fn new(list_id: u64, item_id: u64) -> Self {
        Self { list_id, item_id }
    }
}
