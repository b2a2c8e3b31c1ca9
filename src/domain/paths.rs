//! Project-relative paths of the files the generator reads and writes.

use super::PlatformTarget;

/// Directory holding the Tauri project.
pub const TAURI_DIR: &str = "src-tauri";

/// `src-tauri/pake.json`
pub fn pake_config() -> String {
    format!("{}/pake.json", TAURI_DIR)
}

/// `src-tauri/tauri.conf.json`
pub fn tauri_config() -> String {
    format!("{}/tauri.conf.json", TAURI_DIR)
}

/// `src-tauri/tauri.<os>.conf.json`
pub fn overlay_config(target: PlatformTarget) -> String {
    format!("{}/tauri.{}.conf.json", TAURI_DIR, target.label())
}

/// Path of a file inside the Tauri project, given relative to `src-tauri/`.
pub fn in_tauri_dir(relative: &str) -> String {
    format!("{}/{}", TAURI_DIR, relative)
}
