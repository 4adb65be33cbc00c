//! Board Repository
//!
//! Reads and writes the whole board (and the theme preference) through a
//! key/value storage backend.

use log::{debug, info, warn};

use super::{KeyValueStorage, StorageResult};
use crate::config::StoreConfig;
use crate::domain::{Board, Theme};

pub struct BoardRepository<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStorage> BoardRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the board, falling back to the built-in dataset when the stored
    /// value is absent, unreadable or malformed
    pub fn load(&self) -> Board {
        match self.storage.get(&self.config.data_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Board>(&raw) {
                Ok(board) => {
                    debug!("Loaded {} lists from '{}'", board.len(), self.config.data_key);
                    board
                }
                Err(e) => {
                    warn!("Stored board is malformed, using defaults: {}", e);
                    Board::default_dataset()
                }
            },
            Ok(None) => {
                info!("No stored board under '{}', using defaults", self.config.data_key);
                Board::default_dataset()
            }
            Err(e) => {
                warn!("Failed to read stored board, using defaults: {}", e);
                Board::default_dataset()
            }
        }
    }

    /// Write the whole board
    pub fn save(&self, board: &Board) -> StorageResult<()> {
        let json = serde_json::to_string(board)?;
        self.storage.set(&self.config.data_key, &json)
    }

    pub fn load_theme(&self) -> Theme {
        match self.storage.get(&self.config.theme_key) {
            Ok(Some(raw)) => Theme::from_str(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.storage.set(&self.config.theme_key, theme.as_str())
    }
}
