//! Store Commands for Jotpad
//!
//! Provides the two Tauri commands bridging the webview to the store:
//! - store_save: one-way write, no acknowledgment
//! - store_load: request/response read

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tauri::State;

use crate::store::{Store, DEFAULT_KEY};

/// Application state containing the store
///
/// The two bridge operations are plain methods so they stay testable
/// without a Tauri runtime; the commands below are thin adapters over them.
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Save semantics: write `value` through to disk, swallowing failures.
    ///
    /// The save channel is one-way; a failed write leaves the in-memory
    /// value in place and is only logged.
    pub fn notify(&self, key: &str, value: Value) {
        if let Err(e) = self.store.lock().set(key, value) {
            tracing::warn!(key, error = %e, "save failed");
        }
    }

    /// Load semantics: current value under `key`, with the store's `"text"`
    /// key fallback.
    pub fn request(&self, key: &str) -> Option<Value> {
        self.store.lock().get(key)
    }
}

/// Save `content` under `key` (fire-and-forget)
#[tauri::command]
pub fn store_save(state: State<'_, StoreState>, key: Option<String>, content: Value) {
    state.notify(key.as_deref().unwrap_or(DEFAULT_KEY), content);
}

/// Load the value stored under `key`
#[tauri::command]
pub fn store_load(state: State<'_, StoreState>, key: Option<String>) -> Option<Value> {
    state.request(key.as_deref().unwrap_or(DEFAULT_KEY))
}
