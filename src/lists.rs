//! Saved name lists
//!
//! Persisted to LocalStorage as a JSON object mapping a title to its names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ListsError;
use crate::roster::Roster;

/// Named lists, ordered by title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedLists {
    lists: BTreeMap<String, Vec<String>>,
}

impl SavedLists {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "wheel_of_names_lists";

    pub fn new() -> Self {
        Self::default()
    }

    /// Save the roster under `title`, replacing any list with that title.
    /// Returns true if an existing list was overwritten.
    pub fn save_roster(&mut self, title: &str, roster: &Roster) -> Result<bool, ListsError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ListsError::EmptyTitle);
        }
        let replaced = self
            .lists
            .insert(title.to_string(), roster.names().to_vec())
            .is_some();
        log::info!("Saved list {:?} ({} names)", title, roster.len());
        Ok(replaced)
    }

    /// Names stored under `title`
    pub fn get(&self, title: &str) -> Result<&[String], ListsError> {
        self.lists
            .get(title.trim())
            .map(Vec::as_slice)
            .ok_or_else(|| ListsError::UnknownList(title.to_string()))
    }

    /// Replace the roster's names with the list stored under `title`
    pub fn load_into(&self, title: &str, roster: &mut Roster) -> Result<(), ListsError> {
        let names = self.get(title)?;
        roster.replace(names);
        log::info!("Loaded list {:?} ({} names)", title, roster.len());
        Ok(())
    }

    pub fn delete(&mut self, title: &str) -> Result<Vec<String>, ListsError> {
        self.lists
            .remove(title.trim())
            .ok_or_else(|| ListsError::UnknownList(title.to_string()))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, ListsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ListsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load saved lists from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(lists) => {
                        log::info!("Loaded {} saved lists", lists.len());
                        return lists;
                    }
                    Err(e) => log::warn!("Ignoring stored lists: {}", e),
                }
            }
        }

        log::info!("No saved lists found, starting fresh");
        Self::new()
    }

    /// Save lists to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Saved lists stored ({} lists)", self.lists.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let mut lists = SavedLists::new();
        let roster = Roster::from_names(["Alice", "Bob"]);
        assert!(!lists.save_roster("Team", &roster).unwrap());
        assert!(lists.save_roster(" Team ", &roster).unwrap());
        assert_eq!(lists.len(), 1);

        let mut other = Roster::from_names(["Zed"]);
        lists.load_into("Team", &mut other).unwrap();
        assert_eq!(other.names(), roster.names());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut lists = SavedLists::new();
        assert!(matches!(
            lists.save_roster("  ", &Roster::new()),
            Err(ListsError::EmptyTitle)
        ));
    }

    #[test]
    fn test_unknown_list() {
        let mut lists = SavedLists::new();
        let mut roster = Roster::new();
        assert!(matches!(
            lists.load_into("nope", &mut roster),
            Err(ListsError::UnknownList(_))
        ));
        assert!(lists.delete("nope").is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut lists = SavedLists::new();
        lists.save_roster("b", &Roster::from_names(["x", "y"])).unwrap();
        lists.save_roster("a", &Roster::from_names(["z"])).unwrap();

        let json = lists.to_json().unwrap();
        assert_eq!(json, r#"{"a":["z"],"b":["x","y"]}"#);
        assert_eq!(SavedLists::from_json(&json).unwrap(), lists);
        assert_eq!(lists.titles().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SavedLists::from_json(r#"{"a": 3}"#),
            Err(ListsError::Parse(_))
        ));
    }

    #[test]
    fn test_delete() {
        let mut lists = SavedLists::new();
        lists.save_roster("a", &Roster::from_names(["z"])).unwrap();
        assert_eq!(lists.delete("a").unwrap(), vec!["z".to_string()]);
        assert!(lists.is_empty());
    }
}
