//! Jotpad - minimal desktop scratchpad shell
//!
//! This crate provides the core functionality for Jotpad including:
//! - A JSON-file-backed key-value store with defaults merged at startup
//! - The save/load command bridge between the host process and the webview

pub mod commands;
pub mod store;

// Re-export commonly used items
pub use store::{Store, StoreConfig, StoreError, StoreResult};
