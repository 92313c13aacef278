//! Virtual file store backing the file-manager application.
//!
//! Files are name-keyed documents in a single localStorage list. The desktop
//! accepts drops of these records through the custom drag MIME type.

use serde::{Deserialize, Serialize};

use crate::env::unix_time_ms_now;
use crate::prefs::{load_local_pref, save_local_pref};

const STORAGE_KEY: &str = "glassdesk.files.v1";

/// Drag-and-drop MIME type for file records dragged out of the file manager.
pub const FILE_DRAG_MIME: &str = "application/x-glassdesk-file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One stored document.
pub struct VirtualFile {
    /// Unique file name, extension included.
    pub name: String,
    /// Document body.
    pub content: String,
    /// Last modification time in unix milliseconds.
    pub modified_ms: u64,
}

/// Lists every stored file, oldest first.
pub fn list_files() -> Vec<VirtualFile> {
    load_local_pref(STORAGE_KEY).unwrap_or_default()
}

/// Creates or replaces the file with the given name.
///
/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn save_file(name: &str, content: &str) -> Result<(), String> {
    let mut all = list_files();
    let record = VirtualFile {
        name: name.to_string(),
        content: content.to_string(),
        modified_ms: unix_time_ms_now(),
    };
    match all.iter_mut().find(|file| file.name == name) {
        Some(existing) => *existing = record,
        None => all.push(record),
    }
    save_local_pref(STORAGE_KEY, &all)
}

/// Deletes the file with the given name, if present.
///
/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn delete_file(name: &str) -> Result<(), String> {
    let all: Vec<VirtualFile> = list_files()
        .into_iter()
        .filter(|file| file.name != name)
        .collect();
    save_local_pref(STORAGE_KEY, &all)
}
