//! Persisted rarity cache.
//!
//! A plain JSON object mapping card uuid to a resolved rarity string.
//! Explicit store object with a `load -> get/insert* -> flush` lifecycle
//! instead of hidden module state, so the backfill is testable with a
//! temp file. The file is not transactional; last writer wins on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::RarityError;

pub struct RarityCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl RarityCache {
    /// Read the cache file; a missing file is an empty cache.
    ///
    /// # Errors
    ///
    /// Returns `RarityError` for unreadable files or malformed JSON.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RarityError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(RarityError::Io(error)),
        };
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Prior resolution for this identifier, if any.
    #[must_use]
    pub fn get(&self, uuid: &str) -> Option<&str> {
        self.entries.get(uuid).map(String::as_str)
    }

    /// Record a resolution. No-op (and no rewrite on flush) when the cached
    /// value already matches.
    pub fn insert(&mut self, uuid: &str, rarity: &str) {
        if self.entries.get(uuid).is_some_and(|existing| existing == rarity) {
            return;
        }
        self.entries.insert(uuid.to_string(), rarity.to_string());
        self.dirty = true;
    }

    /// Rewrite the cache file if anything changed since load.
    ///
    /// # Errors
    ///
    /// Returns `RarityError` when the file cannot be written.
    pub fn flush(&mut self) -> Result<(), RarityError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "rarity cache flushed");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::RarityCache;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = RarityCache::load(dir.path().join("rarity.json")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_flush_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.json");

        let mut cache = RarityCache::load(&path).unwrap();
        cache.insert("u1", "mythic");
        cache.insert("u2", "common");
        cache.flush().unwrap();

        let reloaded = RarityCache::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("u1"), Some("mythic"));
        assert_eq!(reloaded.get("u2"), Some("common"));
    }

    #[test]
    fn flush_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.json");

        let mut cache = RarityCache::load(&path).unwrap();
        cache.flush().unwrap();
        assert!(!path.exists(), "clean cache must not create a file");

        cache.insert("u1", "rare");
        cache.flush().unwrap();
        assert!(path.exists());

        // Re-inserting the same value leaves the cache clean.
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        cache.insert("u1", "rare");
        cache.flush().unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(RarityCache::load(&path).is_err());
    }
}
