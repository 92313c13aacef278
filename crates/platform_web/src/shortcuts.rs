//! Persisted keyboard-shortcut definitions.
//!
//! Shortcut records are stored as a single localStorage list and matched
//! against keydown events by full modifier+key signature. The shell consults
//! this store on every keydown; it does not own shortcut editing, which the
//! shortcuts app performs through the same helpers.

use serde::{Deserialize, Serialize};

use crate::prefs::{load_local_pref, save_local_pref};

const STORAGE_KEY: &str = "glassdesk.shortcuts.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Modifier+key signature a shortcut binds to.
pub struct KeyChord {
    /// Control key held.
    pub ctrl: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Shift key held.
    pub shift: bool,
    /// Meta/Command key held.
    pub meta: bool,
    /// Main key value, compared case-insensitively.
    pub key: String,
}

impl KeyChord {
    /// Returns whether this chord matches the given event signature.
    pub fn matches(&self, ctrl: bool, alt: bool, shift: bool, meta: bool, key: &str) -> bool {
        self.ctrl == ctrl
            && self.alt == alt
            && self.shift == shift
            && self.meta == meta
            && self.key.eq_ignore_ascii_case(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
/// Action performed when a shortcut fires.
pub enum ShortcutAction {
    /// Open (or focus) the named application.
    OpenApp {
        /// Registry display name of the application.
        app_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One persisted shortcut record.
pub struct ShortcutBinding {
    /// Stable record id.
    pub id: String,
    /// Bound key signature.
    pub keys: KeyChord,
    /// Action to perform.
    pub action: ShortcutAction,
}

/// Loads every persisted shortcut, oldest first.
pub fn load_shortcuts() -> Vec<ShortcutBinding> {
    load_local_pref(STORAGE_KEY).unwrap_or_default()
}

/// Appends a shortcut unless a record with the same id already exists.
///
/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn add_shortcut(binding: ShortcutBinding) -> Result<(), String> {
    let mut all = load_shortcuts();
    if all.iter().any(|existing| existing.id == binding.id) {
        return Ok(());
    }
    all.push(binding);
    save_local_pref(STORAGE_KEY, &all)
}

/// Removes the shortcut with the given id, if present.
///
/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn delete_shortcut(id: &str) -> Result<(), String> {
    let all: Vec<ShortcutBinding> = load_shortcuts()
        .into_iter()
        .filter(|binding| binding.id != id)
        .collect();
    save_local_pref(STORAGE_KEY, &all)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chord(key: &str) -> KeyChord {
        KeyChord {
            ctrl: true,
            alt: false,
            shift: false,
            meta: false,
            key: key.to_string(),
        }
    }

    #[test]
    fn chord_match_is_case_insensitive_on_key() {
        let chord = chord("K");
        assert!(chord.matches(true, false, false, false, "k"));
        assert!(chord.matches(true, false, false, false, "K"));
    }

    #[test]
    fn chord_match_requires_exact_modifiers() {
        let chord = chord("k");
        assert!(!chord.matches(false, false, false, false, "k"));
        assert!(!chord.matches(true, true, false, false, "k"));
        assert!(!chord.matches(true, false, false, true, "k"));
    }

    #[test]
    fn binding_round_trips_through_serde() {
        let binding = ShortcutBinding {
            id: "ctrl-k".to_string(),
            keys: chord("k"),
            action: ShortcutAction::OpenApp {
                app_name: "Assistant".to_string(),
            },
        };

        let raw = serde_json::to_string(&binding).expect("serialize");
        assert!(raw.contains("\"type\":\"OPEN_APP\""));
        let back: ShortcutBinding = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, binding);
    }
}
