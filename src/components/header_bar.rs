//! Header Bar Component
//!
//! App title with the "new list" and theme controls.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <h1>"My Lists"</h1>
            <div class="header-controls">
                <button id="addListBtn" class="btn-primary" on:click=move |_| commands::add_list(ctx)>
                    "+ New List"
                </button>
                <button
                    id="themeToggle"
                    class="btn-icon"
                    title="Toggle theme"
                    on:click=move |_| commands::toggle_theme(ctx)
                >
                    {move || if ctx.theme().is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
