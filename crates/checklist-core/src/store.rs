//! Checklist Store
//!
//! Single owner of the board, the drag state, the id generator and the
//! theme. Every mutation goes through `&mut self` and ends with a full
//! write of the board.

use log::info;

use crate::command::{answered, Command, Outcome};
use crate::config::StoreConfig;
use crate::domain::{Board, DomainResult, IdGenerator, Item, ItemRef, List, Theme};
use crate::reorder::{DragState, Point, Rect, ReorderEngine};
use crate::repository::{BoardRepository, KeyValueStorage};

pub struct ChecklistStore<S> {
    board: Board,
    engine: ReorderEngine,
    ids: IdGenerator,
    theme: Theme,
    repo: BoardRepository<S>,
}

impl<S: KeyValueStorage> ChecklistStore<S> {
    /// Load persisted state from `storage` using the default keys
    pub fn open(storage: S) -> Self {
        Self::open_with_config(storage, StoreConfig::default())
    }

    pub fn open_with_config(storage: S, config: StoreConfig) -> Self {
        let repo = BoardRepository::with_config(storage, config);
        let board = repo.load();
        let theme = repo.load_theme();
        info!("Store opened: {} lists, theme={}", board.len(), theme.as_str());
        Self {
            ids: IdGenerator::seeded(board.max_id()),
            board,
            engine: ReorderEngine::new(),
            theme,
            repo,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> DragState {
        self.engine.state()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        self.repo.storage()
    }

    fn persist(&self) -> DomainResult<()> {
        self.repo.save(&self.engine.persistable(&self.board))?;
        Ok(())
    }

    /// Apply a command and persist the board.
    ///
    /// On a storage failure the in-memory change stays and the error is
    /// returned for the caller to report.
    pub fn dispatch(&mut self, command: Command) -> DomainResult<Outcome> {
        match command {
            Command::AddList { title } => {
                let Some(title) = answered(title) else {
                    return Ok(Outcome::Cancelled);
                };
                let id = self.ids.next_id()?;
                self.board.add_list(List::new(id, title))?;
            }
            Command::DeleteList { list_id, confirmed } => {
                if !confirmed {
                    return Ok(Outcome::Declined);
                }
                self.board.remove_list(list_id)?;
            }
            Command::AddItem { list_id, text } => {
                let Some(text) = answered(text) else {
                    return Ok(Outcome::Cancelled);
                };
                let id = self.ids.next_id()?;
                self.board.add_item(list_id, Item::new(id, text))?;
            }
            Command::DeleteItem { item, confirmed } => {
                if !confirmed {
                    return Ok(Outcome::Declined);
                }
                self.board.remove_item(item)?;
            }
            Command::ToggleCompleted { item } => {
                self.board.toggle_completed(item)?;
            }
            Command::ToggleExpanded { list_id } => {
                self.board.toggle_expanded(list_id)?;
            }
            Command::SetLink { item, link } => {
                let Some(link) = link else {
                    return Ok(Outcome::Cancelled);
                };
                self.board.set_link(item, link)?;
            }
        }
        self.persist()?;
        Ok(Outcome::Applied)
    }

    pub fn toggle_theme(&mut self) -> DomainResult<Theme> {
        self.theme = self.theme.toggled();
        self.repo.save_theme(self.theme)?;
        Ok(self.theme)
    }

    // ========================
    // List dragging
    // ========================

    /// Collapses the list in memory only; persisted snapshots keep its
    /// pre-drag expansion
    pub fn begin_list_drag(&mut self, list_id: u64) -> DomainResult<()> {
        self.engine.begin_list_drag(&mut self.board, list_id)
    }

    pub fn hover_list<I>(&mut self, pointer: Point, zones: I) -> bool
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        self.engine.hover_list(pointer, zones)
    }

    pub fn drop_list(&mut self, nominal: Option<usize>) -> DomainResult<Option<usize>> {
        let moved = self.engine.drop_list(&mut self.board, nominal)?;
        if moved.is_some() {
            self.persist()?;
        }
        Ok(moved)
    }

    /// Restore expansion, persist, and clear the drag whether or not a drop happened
    pub fn end_list_drag(&mut self) -> DomainResult<()> {
        if self.engine.state().dragging_list().is_none() {
            return Ok(());
        }
        self.engine.end_list_drag(&mut self.board);
        self.persist()
    }

    // ========================
    // Item dragging
    // ========================

    pub fn begin_item_drag(&mut self, source: ItemRef) -> DomainResult<()> {
        self.engine.begin_item_drag(&self.board, source)
    }

    pub fn hover_item<I>(&mut self, pointer: Point, rows: I) -> bool
    where
        I: IntoIterator<Item = (ItemRef, Rect)>,
    {
        self.engine.hover_item(pointer, rows)
    }

    pub fn drop_item(&mut self, nominal: Option<ItemRef>) -> DomainResult<Option<ItemRef>> {
        let target = self.engine.drop_item(&mut self.board, nominal)?;
        if target.is_some() {
            self.persist()?;
        }
        Ok(target)
    }

    pub fn end_item_drag(&mut self) {
        self.engine.end_item_drag();
    }
}
