//! Browser localStorage access
//!
//! Missing storage (private mode, non-browser target) behaves as empty.

use tracing::warn;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";
pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            warn!(key, "failed to write localStorage");
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn token() -> Option<String> {
    get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}
