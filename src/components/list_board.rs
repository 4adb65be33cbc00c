//! List Board Component
//!
//! Renders every list between drop zones and wires both drag kinds
//! (whole lists, single items) to the store's reorder engine.
//! Uses leptos-dragdrop with explicit DropZones between lists.

use leptos::prelude::*;
use log::{error, warn};

use checklist_core::ItemRef;
use leptos_dragdrop::*;

use crate::components::{DropZone, ListCard};
use crate::context::use_app_context;
use crate::targets;

#[component]
pub fn ListBoard() -> impl IntoView {
    let ctx = use_app_context();

    // Create DnD signals
    let list_dnd = create_dnd_signals::<u64>();
    let item_dnd = create_dnd_signals::<ItemRef>();

    bind_global_handlers(
        list_dnd,
        move |list_id, _| {
            if let Some(Err(e)) = ctx.update_store(|s| s.begin_list_drag(list_id)) {
                warn!("[DND] list drag refused: {}", e);
            }
        },
        move |_, pointer| {
            let zones = targets::zones();
            ctx.maybe_update_store(|s| s.hover_list(targets::point(pointer), zones));
        },
        move |list_id, pointer| {
            let nominal = targets::zone_under(pointer);
            ctx.update_store(|s| {
                if let Err(e) = s.drop_list(nominal) {
                    error!("[DND] list {} drop failed: {}", list_id, e);
                }
                if let Err(e) = s.end_list_drag() {
                    error!("[DND] list {} drag end failed: {}", list_id, e);
                }
            });
        },
    );

    bind_global_handlers(
        item_dnd,
        move |item, _| {
            if let Some(Err(e)) = ctx.update_store(|s| s.begin_item_drag(item)) {
                warn!("[DND] item drag refused: {}", e);
            }
        },
        move |_, pointer| {
            let rows = targets::item_rows();
            ctx.maybe_update_store(|s| s.hover_item(targets::point(pointer), rows));
        },
        move |item, pointer| {
            let nominal = targets::item_under(pointer);
            ctx.update_store(|s| {
                if let Err(e) = s.drop_item(nominal) {
                    error!("[DND] item {:?} drop failed: {}", item, e);
                }
                s.end_item_drag();
            });
        },
    );

    // Re-rendered from the store on every change
    let board_view = move || {
        let (board, drag) = ctx.snapshot();
        let len = board.len();
        let cards = board
            .lists()
            .iter()
            .enumerate()
            .map(|(index, list)| {
                let highlighted = drag.highlighted_zone() == Some(index);
                view! {
                    <DropZone index=index highlighted=highlighted />
                    <ListCard list=list.clone() drag=drag list_dnd=list_dnd item_dnd=item_dnd />
                }
            })
            .collect_view();
        let trailing_highlighted = drag.highlighted_zone() == Some(len);
        view! {
            {cards}
            <DropZone index=len highlighted=trailing_highlighted />
        }
    };

    view! {
        <main id="app" class="board">
            {board_view}
        </main>
    }
}
