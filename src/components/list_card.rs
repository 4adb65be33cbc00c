//! List Card Component
//!
//! One list: header with expand toggle and actions, then its items.

use leptos::prelude::*;

use checklist_core::{DragState, ItemRef, List};
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::commands;
use crate::components::{DeleteConfirmButton, ItemRow};
use crate::context::use_app_context;

#[component]
pub fn ListCard(
    list: List,
    drag: DragState,
    list_dnd: DndSignals<u64>,
    item_dnd: DndSignals<ItemRef>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = list.id;
    let expanded = list.expanded;
    let on_mousedown = make_on_mousedown(list_dnd, id);

    let container_class = if drag.dragging_list() == Some(id) {
        "list-container dragging"
    } else {
        "list-container"
    };

    let body = if list.items.is_empty() {
        view! { <div class="empty-msg">"No items yet..."</div> }.into_any()
    } else {
        list.items
            .into_iter()
            .map(|item| view! { <ItemRow list_id=id item=item drag=drag item_dnd=item_dnd /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class=container_class on:mousedown=on_mousedown>
            <div class="list-header">
                <div
                    class="list-header-left"
                    on:click=move |_| {
                        if list_dnd.suppress_click() { return; }
                        commands::toggle_expanded(ctx, id);
                    }
                >
                    <span class=if expanded { "arrow rotated" } else { "arrow" }>"▶"</span>
                    <span class="list-title">{list.title}</span>
                </div>
                <div class="list-header-right">
                    <button
                        class="btn-icon"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            commands::add_item(ctx, id);
                        }
                    >
                        "+ Add Entry"
                    </button>
                    <DeleteConfirmButton
                        button_class="delete-list-btn"
                        title="Delete List"
                        on_answer=Callback::new(move |confirmed: bool| commands::delete_list(ctx, id, confirmed))
                    />
                </div>
            </div>
            <div class=if expanded { "list-items open" } else { "list-items" }>
                {body}
            </div>
        </div>
    }
}
