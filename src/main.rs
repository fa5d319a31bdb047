//! Jotpad - minimal desktop scratchpad shell
//!
//! Main entry point for the Tauri application.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use serde_json::json;

use jotpad::commands::{__cmd__store_load, __cmd__store_save, store_load, store_save, StoreState};
use jotpad::{Store, StoreConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Jotpad...");

    let mut defaults = serde_json::Map::new();
    defaults.insert("text".to_string(), json!("Write something!"));

    // One store per process, created before the window exists
    let store = match Store::new(StoreConfig {
        config_name: "storage".to_string(),
        defaults,
        data_dir: None,
    }) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .manage(StoreState::new(store))
        .invoke_handler(tauri::generate_handler![store_save, store_load])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
