//! Checklist Core
//!
//! Layered architecture:
//! - domain: lists, items and the board they live on
//! - reorder: drag state machine and nearest-target geometry
//! - repository: key/value storage abstraction and board persistence
//! - command / store: request/response interface over the single store owner

pub mod command;
pub mod config;
pub mod domain;
pub mod reorder;
pub mod repository;
pub mod store;

pub use command::{Command, Outcome};
pub use config::StoreConfig;
pub use domain::{Board, DomainError, DomainResult, Item, ItemRef, List, Theme};
pub use reorder::{DragState, Point, Rect};
pub use repository::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::ChecklistStore;
