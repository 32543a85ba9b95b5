//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use tracing::debug;

use crate::navigation::Screen;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Screen asked for by the user or the URL hash (None = root) - read
    pub requested_screen: ReadSignal<Option<Screen>>,
    /// Screen asked for by the user or the URL hash - write
    set_requested_screen: WriteSignal<Option<Screen>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        requested_screen: (ReadSignal<Option<Screen>>, WriteSignal<Option<Screen>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            requested_screen: requested_screen.0,
            set_requested_screen: requested_screen.1,
        }
    }

    /// Trigger a reload of entries/users
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch screen and push the matching hash
    pub fn navigate(&self, screen: Screen) {
        debug!(?screen, "navigate");
        self.set_requested_screen.set(Some(screen));
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(screen.hash());
        }
    }

    /// Record a screen without touching history (hash changes and redirects)
    pub fn sync_screen(&self, screen: Option<Screen>) {
        self.set_requested_screen.set(screen);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Current `location.hash`, empty outside a browser
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Rewrite the hash for a redirect without adding a history entry
pub fn replace_hash(screen: Screen) {
    let Some(window) = web_sys::window() else { return };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(screen.hash()));
    }
}
