//! The list of names on the wheel
//!
//! Order matters: name `i` owns segment `i`. The wheel itself accepts
//! duplicates; rejecting them is a roster policy, on by default.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Deserialized rosters go through [`Roster::add`], so stored data gets the
/// same trimming and rejection as typed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredRoster")]
pub struct Roster {
    names: Vec<String>,
    /// Refuse a name that is already present
    reject_duplicates: bool,
}

/// Unvalidated wire form of a [`Roster`]
#[derive(Deserialize)]
struct StoredRoster {
    names: Vec<String>,
    #[serde(default = "default_reject_duplicates")]
    reject_duplicates: bool,
}

fn default_reject_duplicates() -> bool {
    true
}

impl From<StoredRoster> for Roster {
    fn from(stored: StoredRoster) -> Self {
        let mut roster = Roster::new().with_duplicate_policy(stored.reject_duplicates);
        roster.extend(stored.names);
        roster
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Empty roster that rejects duplicates
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            reject_duplicates: true,
        }
    }

    /// Empty roster that accepts repeated names
    pub fn allowing_duplicates() -> Self {
        Self {
            names: Vec::new(),
            reject_duplicates: false,
        }
    }

    pub fn with_duplicate_policy(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }

    /// Build a roster from raw names, skipping rejected ones
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        roster.extend(names);
        roster
    }

    /// Add a name (trimmed). Returns its index.
    pub fn add(&mut self, raw: &str) -> Result<usize, RosterError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RosterError::Empty);
        }
        if self.reject_duplicates && self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(self.names.len() - 1)
    }

    /// Add every acceptable name, logging the rejected ones
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if let Err(e) = self.add(name.as_ref()) {
                log::warn!("Skipping name: {}", e);
            }
        }
    }

    /// Replace the whole list (e.g. when loading a saved list)
    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.clear();
        self.extend(names);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    /// Remove the first entry equal to `label`
    pub fn remove_label(&mut self, label: &str) -> bool {
        match self.names.iter().position(|n| n == label) {
            Some(i) => {
                self.names.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("  Alice \t"), Ok(0));
        assert_eq!(roster.get(0), Some("Alice"));
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut roster = Roster::new();
        assert_eq!(roster.add(""), Err(RosterError::Empty));
        assert_eq!(roster.add("   "), Err(RosterError::Empty));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_duplicate_policy() {
        let mut roster = Roster::new();
        roster.add("Bob").unwrap();
        assert_eq!(roster.add(" Bob "), Err(RosterError::Duplicate("Bob".into())));

        let mut roster = Roster::allowing_duplicates();
        roster.add("Bob").unwrap();
        assert_eq!(roster.add("Bob"), Ok(1));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::from_names(["Alice", "Bob", "Carol"]);
        assert_eq!(roster.remove_at(1), Some("Bob".to_string()));
        assert_eq!(roster.remove_at(5), None);
        assert!(roster.remove_label("Alice"));
        assert!(!roster.remove_label("Alice"));
        assert_eq!(roster.names(), ["Carol".to_string()]);
    }

    #[test]
    fn test_replace_skips_invalid() {
        let mut roster = Roster::from_names(["Zed"]);
        roster.replace(["Alice", "", "Alice", "Bob"]);
        assert_eq!(roster.iter().collect::<Vec<_>>(), vec!["Alice", "Bob"]);

        roster.clear();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_deserialize_validates_names() {
        let roster: Roster =
            serde_json::from_str(r#"{"names": ["  Alice ", "", "Alice", "Bob"]}"#).unwrap();
        assert_eq!(roster.names(), ["Alice".to_string(), "Bob".to_string()]);

        let roster: Roster =
            serde_json::from_str(r#"{"names": ["Bob", "Bob"], "reject_duplicates": false}"#)
                .unwrap();
        assert_eq!(roster.len(), 2);

        let json = serde_json::to_string(&Roster::from_names(["Carol"])).unwrap();
        let roster: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster.get(0), Some("Carol"));
    }
}
