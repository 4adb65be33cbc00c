//! UI Components
//!
//! Reusable Leptos components.

mod header_bar;
mod list_board;
mod list_card;
mod item_row;
mod drop_zone;
mod delete_confirm_button;

pub use header_bar::HeaderBar;
pub use list_board::ListBoard;
pub use list_card::ListCard;
pub use item_row::ItemRow;
pub use drop_zone::DropZone;
pub use delete_confirm_button::DeleteConfirmButton;
