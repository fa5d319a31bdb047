//! Tauri IPC Commands for Jotpad
//!
//! Commands for frontend-backend communication:
//! - store_save: one-way save message (fire-and-forget)
//! - store_load: request/response load

pub mod store;


pub use store::*;
