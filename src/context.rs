//! Application Context
//!
//! The checklist store lives in one reactive signal provided via the Leptos
//! Context API. Every handler goes through it, so mutations never interleave.

use leptos::prelude::*;
use log::{debug, error, info};

use checklist_core::{Board, ChecklistStore, Command, DragState, Outcome, Theme};

use crate::storage::BrowserStorage;

pub type AppStore = ChecklistStore<BrowserStorage>;

/// App-wide store handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: RwSignal<AppStore>,
}

impl AppContext {
    pub fn new(store: RwSignal<AppStore>) -> Self {
        Self { store }
    }

    /// Board and drag state to render from (tracked)
    pub fn snapshot(&self) -> (Board, DragState) {
        self.store.with(|s| (s.board().clone(), s.drag()))
    }

    pub fn theme(&self) -> Theme {
        self.store.with(|s| s.theme())
    }

    /// Read the store without subscribing
    pub fn with_store<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        self.store.with_untracked(f)
    }

    /// Mutate the store and notify
    pub fn update_store<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> Option<R> {
        self.store.try_update(f)
    }

    /// Mutate the store, notifying only when `f` reports a change
    pub fn maybe_update_store(&self, f: impl FnOnce(&mut AppStore) -> bool) {
        self.store.maybe_update(f);
    }

    /// Dispatch a command and report what happened
    pub fn dispatch(&self, command: Command) {
        let label = format!("{:?}", command);
        let mut result = None;
        self.store.maybe_update(|s| {
            let r = s.dispatch(command);
            let changed = !matches!(r, Ok(Outcome::Cancelled) | Ok(Outcome::Declined));
            result = Some(r);
            changed
        });
        match result {
            Some(Ok(Outcome::Applied)) => debug!("[CMD] {} applied", label),
            Some(Ok(outcome)) => info!("[CMD] {} {:?}", label, outcome),
            Some(Err(e)) => error!("[CMD] {} failed: {}", label, e),
            None => {}
        }
    }

    pub fn toggle_theme(&self) {
        if let Some(Err(e)) = self.store.try_update(|s| s.toggle_theme()) {
            error!("[THEME] failed to save preference: {}", e);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
