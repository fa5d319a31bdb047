//! Persistent Key-Value Store for Jotpad
//!
//! Provides JSON-backed persistence with:
//! - Defaults merged under persisted content at construction
//! - get/set over arbitrary JSON values
//! - Full-snapshot rewrite of the backing file on every mutation

mod storage;


pub use storage::{merge_defaults, Store, StoreConfig, StoreError, StoreResult, DEFAULT_KEY};
