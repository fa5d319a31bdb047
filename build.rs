//! Build script for Jotpad
//!
//! Runs the Tauri build step that embeds `tauri.conf.json` and the
//! bundled `ui/` assets.

fn main() {
    tauri_build::build();

    println!("cargo:rerun-if-changed=ui/");
    println!("cargo:rerun-if-changed=build.rs");
}
