//! Reorder Engine
//!
//! One state value covers both drag kinds:
//! `Idle -> List|Item -> (hover)* -> drop? -> end -> Idle`.

use std::borrow::Cow;

use log::debug;

use super::geometry::{nearest, Point, Rect};
use crate::domain::{Board, DomainError, DomainResult, ItemRef};

/// Transient drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A list is being dragged between the drop zones
    List {
        list_id: u64,
        /// Expansion before the drag collapsed it
        was_expanded: bool,
        /// Highlighted drop zone (slot index 0..=len)
        nearest_zone: Option<usize>,
    },
    /// An item is being dragged over other item rows
    Item {
        source: ItemRef,
        /// Highlighted row
        nearest: Option<ItemRef>,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn dragging_list(&self) -> Option<u64> {
        match self {
            DragState::List { list_id, .. } => Some(*list_id),
            _ => None,
        }
    }

    pub fn dragging_item(&self) -> Option<ItemRef> {
        match self {
            DragState::Item { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn highlighted_zone(&self) -> Option<usize> {
        match self {
            DragState::List { nearest_zone, .. } => *nearest_zone,
            _ => None,
        }
    }

    pub fn highlighted_item(&self) -> Option<ItemRef> {
        match self {
            DragState::Item { nearest, .. } => *nearest,
            _ => None,
        }
    }
}

/// Drives [`DragState`] transitions and applies drops to a [`Board`]
#[derive(Debug, Default)]
pub struct ReorderEngine {
    state: DragState,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    fn ensure_idle(&self) -> DomainResult<()> {
        if self.state.is_idle() {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!("drag already in progress: {:?}", self.state)))
        }
    }

    // ========================
    // List dragging
    // ========================

    /// Remember the list and its expansion, then collapse it while dragging
    pub fn begin_list_drag(&mut self, board: &mut Board, list_id: u64) -> DomainResult<()> {
        self.ensure_idle()?;
        let was_expanded = board
            .list(list_id)
            .map(|l| l.expanded)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))?;
        board.set_expanded(list_id, false)?;
        self.state = DragState::List {
            list_id,
            was_expanded,
            nearest_zone: None,
        };
        debug!("[DND] list drag start: list={} was_expanded={}", list_id, was_expanded);
        Ok(())
    }

    /// Highlight the drop zone nearest to the pointer.
    ///
    /// Returns true when the highlighted zone changed.
    pub fn hover_list<I>(&mut self, pointer: Point, zones: I) -> bool
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let DragState::List { nearest_zone, .. } = &mut self.state else {
            return false;
        };
        let found = nearest(pointer, zones);
        if found == *nearest_zone {
            return false;
        }
        *nearest_zone = found;
        true
    }

    /// Move the dragged list to the highlighted zone, or to `nominal` when
    /// nothing is highlighted. Returns the list's new index.
    pub fn drop_list(
        &mut self,
        board: &mut Board,
        nominal: Option<usize>,
    ) -> DomainResult<Option<usize>> {
        let DragState::List { list_id, nearest_zone, .. } = &mut self.state else {
            return Ok(None);
        };
        let list_id = *list_id;
        let Some(drop_index) = nearest_zone.take().or(nominal) else {
            return Ok(None);
        };
        let at = board.move_list(list_id, drop_index)?;
        debug!("[DND] list drop: list={} zone={} -> index {}", list_id, drop_index, at);
        Ok(Some(at))
    }

    /// Restore the dragged list's expansion and return to idle.
    ///
    /// Returns true when the board was changed.
    pub fn end_list_drag(&mut self, board: &mut Board) -> bool {
        let DragState::List { list_id, was_expanded, .. } = self.state else {
            return false;
        };
        self.state = DragState::Idle;
        match board.list(list_id) {
            Some(list) if list.expanded != was_expanded => {
                board.set_expanded(list_id, was_expanded).is_ok()
            }
            _ => false,
        }
    }

    // ========================
    // Item dragging
    // ========================

    pub fn begin_item_drag(&mut self, board: &Board, source: ItemRef) -> DomainResult<()> {
        self.ensure_idle()?;
        if board.item(source).is_none() {
            return Err(DomainError::NotFound(format!(
                "item {} in list {}",
                source.item_id, source.list_id
            )));
        }
        self.state = DragState::Item { source, nearest: None };
        debug!("[DND] item drag start: {:?}", source);
        Ok(())
    }

    /// Highlight the item row nearest to the pointer, skipping the dragged row.
    ///
    /// Returns true when the highlighted row changed.
    pub fn hover_item<I>(&mut self, pointer: Point, rows: I) -> bool
    where
        I: IntoIterator<Item = (ItemRef, Rect)>,
    {
        let DragState::Item { source, nearest: highlighted } = &mut self.state else {
            return false;
        };
        let source = *source;
        let found = nearest(pointer, rows.into_iter().filter(|(row, _)| *row != source));
        if found == *highlighted {
            return false;
        }
        *highlighted = found;
        true
    }

    /// Move the dragged item in front of the highlighted row, or `nominal`
    /// when nothing is highlighted. Returns the row it was dropped on.
    pub fn drop_item(
        &mut self,
        board: &mut Board,
        nominal: Option<ItemRef>,
    ) -> DomainResult<Option<ItemRef>> {
        let DragState::Item { source, nearest } = &mut self.state else {
            return Ok(None);
        };
        let source = *source;
        let Some(target) = nearest.take().or(nominal) else {
            return Ok(None);
        };
        board.move_item(source, target)?;
        debug!("[DND] item drop: {:?} -> {:?}", source, target);
        Ok(Some(target))
    }

    pub fn end_item_drag(&mut self) {
        if matches!(self.state, DragState::Item { .. }) {
            self.state = DragState::Idle;
        }
    }

    /// The board as it should be persisted: a list collapsed for dragging
    /// keeps its pre-drag expansion.
    pub fn persistable<'a>(&self, board: &'a Board) -> Cow<'a, Board> {
        let DragState::List { list_id, was_expanded, .. } = self.state else {
            return Cow::Borrowed(board);
        };
        match board.list(list_id) {
            Some(list) if list.expanded != was_expanded => {
                let mut snapshot = board.clone();
                // Cannot fail: the list was just found.
                let _ = snapshot.set_expanded(list_id, was_expanded);
                Cow::Owned(snapshot)
            }
            _ => Cow::Borrowed(board),
        }
    }
}
