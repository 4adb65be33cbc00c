//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO dependencies on storage or UI (except serde for serialization).

mod entity;
mod item;
mod list;
mod board;
mod theme;
mod id;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, ItemRef};
pub use list::List;
pub use board::Board;
pub use theme::Theme;
pub use id::IdGenerator;
