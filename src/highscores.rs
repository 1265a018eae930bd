//! Best score per difficulty mode
//!
//! One integer per mode, stored as a string under `"<namespace>.<mode>"`.
//! Missing or garbled values read as 0.

use std::collections::HashMap;

use crate::sim::Mode;

/// Key-value persistence for best scores
pub trait HighScoreStore {
    /// Best score recorded for `mode` (0 when absent or unreadable)
    fn get(&self, mode: Mode) -> u32;

    /// Overwrite the best score for `mode`
    fn set(&mut self, mode: Mode, score: u32);

    /// Write `score` only if it beats the stored value; returns whether it did
    fn save_if_higher(&mut self, mode: Mode, score: u32) -> bool {
        let stored = self.get(mode);
        if score > stored {
            self.set(mode, score);
            log::info!("New {} high score: {} (was {})", mode, score, stored);
            true
        } else {
            false
        }
    }
}

/// Storage key for a mode
pub fn storage_key(namespace: &str, mode: Mode) -> String {
    format!("{}.{}", namespace, mode.as_str())
}

/// Parse a stored value, treating anything malformed as "no high score"
pub fn parse_score(raw: Option<&str>) -> u32 {
    match raw {
        None => 0,
        Some(text) => text.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring malformed stored high score {:?}", text);
            0
        }),
    }
}

/// In-process store with string values, mirroring browser storage semantics
#[derive(Debug, Clone)]
pub struct MemoryStore {
    namespace: String,
    entries: HashMap<String, String>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(crate::consts::HIGH_SCORE_NAMESPACE)
    }
}

impl MemoryStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: HashMap::new(),
        }
    }

    /// Put a raw string under a key, bypassing validation
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self, mode: Mode) -> u32 {
        parse_score(self.raw(&storage_key(&self.namespace, mode)))
    }

    fn set(&mut self, mode: Mode, score: u32) {
        self.entries
            .insert(storage_key(&self.namespace, mode), score.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reads_zero() {
        let store = MemoryStore::default();
        for mode in Mode::ALL {
            assert_eq!(store.get(mode), 0);
        }
    }

    #[test]
    fn test_key_convention() {
        let mut store = MemoryStore::new("high_score");
        store.set(Mode::Hard, 12);
        assert_eq!(store.raw("high_score.hard"), Some("12"));
        assert_eq!(store.get(Mode::Hard), 12);
        assert_eq!(store.get(Mode::Easy), 0);
    }

    #[test]
    fn test_garbage_reads_zero() {
        let mut store = MemoryStore::default();
        store.insert_raw("high_score.easy", "lots");
        store.insert_raw("high_score.medium", "-3");
        store.insert_raw("high_score.hard", " 7 ");
        assert_eq!(store.get(Mode::Easy), 0);
        assert_eq!(store.get(Mode::Medium), 0);
        assert_eq!(store.get(Mode::Hard), 7);
    }

    #[test]
    fn test_save_if_higher() {
        let mut store = MemoryStore::default();
        assert!(!store.save_if_higher(Mode::Easy, 0));
        assert!(store.is_empty());
        assert!(store.save_if_higher(Mode::Easy, 5));
        assert!(!store.save_if_higher(Mode::Easy, 3));
        assert!(!store.save_if_higher(Mode::Easy, 5));
        assert_eq!(store.get(Mode::Easy), 5);
    }
}
