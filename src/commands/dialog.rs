//! Browser Dialogs
//!
//! `None` from a prompt means the user dismissed it.

use log::warn;

pub fn prompt(message: &str) -> Option<String> {
    let window = web_sys::window()?;
    window.prompt_with_message(message).unwrap_or_else(|e| {
        warn!("[DIALOG] prompt failed: {:?}", e);
        None
    })
}

pub fn prompt_with_default(message: &str, default: &str) -> Option<String> {
    let window = web_sys::window()?;
    window
        .prompt_with_message_and_default(message, default)
        .unwrap_or_else(|e| {
            warn!("[DIALOG] prompt failed: {:?}", e);
            None
        })
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("[DIALOG] failed to open {}: {:?}", url, e);
    }
}
