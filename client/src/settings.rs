use gloo_storage::{LocalStorage, Storage};

use crate::config::LARGE_ONLY_KEY;

/// Persisted "exclude small battles" toggle; missing or unreadable means off.
pub fn load_large_only() -> bool {
    LocalStorage::get::<bool>(LARGE_ONLY_KEY).unwrap_or(false)
}

pub fn save_large_only(large_only: bool) {
    if let Err(e) = LocalStorage::set(LARGE_ONLY_KEY, large_only) {
        web_sys::console::warn_1(&format!("failed to persist {LARGE_ONLY_KEY}: {e}").into());
    }
}
