//! Drop Zone Component
//!
//! A horizontal line between lists marking where a dragged list can land.

use leptos::prelude::*;

/// Drop zone in front of the list at `index` (or trailing when `index == len`)
#[component]
pub fn DropZone(
    /// Slot index the dragged list is inserted at
    index: usize,
    /// Nearest zone to the pointer during a list drag
    highlighted: bool,
) -> impl IntoView {
    view! {
        <div
            class=if highlighted { "list-drop-zone drag-over" } else { "list-drop-zone" }
            data-drop-index=index.to_string()
        />
    }
}
