//! User Actions
//!
//! Gather input through browser dialogs and dispatch store commands,
//! organized by domain.

mod dialog;
mod list;
mod item;

pub use list::*;
pub use item::*;

use crate::context::AppContext;

pub fn toggle_theme(ctx: AppContext) {
    ctx.toggle_theme();
}
