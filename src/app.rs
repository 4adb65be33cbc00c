//! Checklist Frontend App
//!
//! Opens the persisted store, provides it to all children and keeps the
//! body's theme class in sync.

use leptos::prelude::*;

use checklist_core::ChecklistStore;

use crate::components::{HeaderBar, ListBoard};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(ChecklistStore::open(BrowserStorage));
    let ctx = AppContext::new(store);
    provide_context(ctx);

    Effect::new(move |_| {
        let dark = ctx.theme().is_dark();
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force("dark-mode", dark);
        }
    });

    view! {
        <div class="container">
            <HeaderBar />
            <ListBoard />
        </div>
    }
}
