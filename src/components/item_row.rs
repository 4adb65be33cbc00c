//! Item Row Component
//!
//! A single item: completion toggle, text, delete and link controls.

use leptos::prelude::*;

use checklist_core::{DragState, Item, ItemRef};
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn ItemRow(
    list_id: u64,
    item: Item,
    drag: DragState,
    item_dnd: DndSignals<ItemRef>,
) -> impl IntoView {
    let ctx = use_app_context();

    let item_ref = ItemRef::new(list_id, item.id);
    let on_mousedown = make_on_mousedown(item_dnd, item_ref);

    let mut class = String::from("item");
    if item.completed { class.push_str(" completed"); }
    if drag.dragging_item() == Some(item_ref) { class.push_str(" dragging"); }
    if drag.highlighted_item() == Some(item_ref) { class.push_str(" drag-over"); }

    view! {
        <div
            class=class
            data-list-id=list_id.to_string()
            data-item-id=item.id.to_string()
            on:mousedown=on_mousedown
        >
            <div
                class="item-left"
                on:click=move |_| {
                    if item_dnd.suppress_click() { return; }
                    commands::toggle_completed(ctx, item_ref);
                }
            >
                <div class="status-circle"></div>
                <div class="item-text">{item.text}</div>
            </div>
            <div class="item-right">
                <DeleteConfirmButton
                    button_class="delete-item-btn"
                    title="Delete Item"
                    on_answer=Callback::new(move |confirmed: bool| commands::delete_item(ctx, item_ref, confirmed))
                />
                <div class="smart-link-group">
                    <div class="link-action" title=item.link.clone() on:click=move |_| commands::open_link(ctx, item_ref)>
                        "🔗 Link"
                    </div>
                    <div
                        class="link-edit"
                        title="Edit Link URL"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            commands::edit_link(ctx, item_ref);
                        }
                    >
                        "✎"
                    </div>
                </div>
            </div>
        </div>
    }
}
