//! Store Commands
//!
//! Request/response values for every user-facing mutation. Text that comes
//! from a prompt is an `Option`: `None` means the prompt was dismissed.

use crate::domain::ItemRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new, expanded, empty list
    AddList { title: Option<String> },
    /// Remove a list and all its items
    DeleteList { list_id: u64, confirmed: bool },
    /// Append an item to a list (and expand it)
    AddItem { list_id: u64, text: Option<String> },
    DeleteItem { item: ItemRef, confirmed: bool },
    ToggleCompleted { item: ItemRef },
    ToggleExpanded { list_id: u64 },
    /// Replace an item's link; `Some("")` clears it
    SetLink { item: ItemRef, link: Option<String> },
}

/// What a dispatched command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board was mutated and persisted
    Applied,
    /// Input was dismissed or empty; nothing changed
    Cancelled,
    /// Confirmation was refused; nothing changed
    Declined,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        *self == Outcome::Applied
    }
}

/// Prompt answer that should be acted on. An empty answer counts as cancel.
pub(crate) fn answered(input: Option<String>) -> Option<String> {
    input.filter(|s| !s.is_empty())
}
