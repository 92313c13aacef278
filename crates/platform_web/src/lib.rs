//! Browser host services for the desktop shell.
//!
//! This crate wraps the browser capabilities the shell depends on behind
//! Rust-friendly types: localStorage-backed preference, shortcut, and file
//! stores, UI sound playback, and viewport/environment queries. Every
//! wrapper carries a non-WASM fallback so the pure shell core stays testable
//! on the host target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod env;
pub mod files;
pub mod generative;
pub mod prefs;
pub mod shortcuts;

pub use audio::{play_sound, SoundEffect};
pub use env::{random_unit, unix_time_ms_now, viewport_size};
pub use files::{delete_file, list_files, save_file, VirtualFile, FILE_DRAG_MIME};
pub use generative::{generative_backend, BackendError, GenerativeBackend};
pub use prefs::{load_local_pref, save_local_pref};
pub use shortcuts::{
    add_shortcut, delete_shortcut, load_shortcuts, KeyChord, ShortcutAction, ShortcutBinding,
};
