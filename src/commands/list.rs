//! List Actions

use checklist_core::Command;

use super::dialog;
use crate::context::AppContext;

pub fn add_list(ctx: AppContext) {
    let title = dialog::prompt("Enter new list name:");
    ctx.dispatch(Command::AddList { title });
}

pub fn toggle_expanded(ctx: AppContext, list_id: u64) {
    ctx.dispatch(Command::ToggleExpanded { list_id });
}

pub fn delete_list(ctx: AppContext, list_id: u64, confirmed: bool) {
    ctx.dispatch(Command::DeleteList { list_id, confirmed });
}
