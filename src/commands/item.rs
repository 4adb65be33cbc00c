//! Item Actions

use checklist_core::{Command, ItemRef};

use super::dialog;
use crate::context::AppContext;

pub fn add_item(ctx: AppContext, list_id: u64) {
    let Some(title) = ctx.with_store(|s| s.board().list(list_id).map(|l| l.title.clone())) else {
        return;
    };
    let text = dialog::prompt(&format!("Add new item to \"{}\":", title));
    ctx.dispatch(Command::AddItem { list_id, text });
}

pub fn toggle_completed(ctx: AppContext, item: ItemRef) {
    ctx.dispatch(Command::ToggleCompleted { item });
}

pub fn delete_item(ctx: AppContext, item: ItemRef, confirmed: bool) {
    ctx.dispatch(Command::DeleteItem { item, confirmed });
}

/// Edit the link, pre-filled with the current one
pub fn edit_link(ctx: AppContext, item: ItemRef) {
    let current = ctx.with_store(|s| {
        s.board()
            .item(item)
            .map(|i| i.link_or_placeholder().to_string())
    });
    let Some(current) = current else {
        return;
    };
    let link = dialog::prompt_with_default("Enter URL:", &current);
    ctx.dispatch(Command::SetLink { item, link });
}

/// Follow the link, or edit it when unset
pub fn open_link(ctx: AppContext, item: ItemRef) {
    let Some(link) = ctx.with_store(|s| s.board().item(item).map(|i| i.link.clone())) else {
        return;
    };
    if link.is_empty() {
        edit_link(ctx, item);
    } else {
        dialog::open_in_new_tab(&link);
    }
}
