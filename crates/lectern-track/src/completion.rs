//! Persisted completion tracking.

use std::io;
use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::warn;

/// File name of the completion store inside the data directory.
pub const STORE_FILE: &str = "completed.json";

/// The set of course paths the user has marked completed.
///
/// Entries are tree paths, kept in insertion order and persisted as a JSON
/// array. The set is independent of any tree instance: paths from earlier
/// trees are tolerated and never purged, so marks survive a course being
/// reorganized.
#[derive(Debug, Default)]
pub struct CompletionSet {
    entries: IndexSet<String>,
    store_path: Option<PathBuf>,
}

impl CompletionSet {
    /// Create an in-memory set with no backing store.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Default store location under the user data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("lectern").join(STORE_FILE))
    }

    /// Load from the default store location.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Self::in_memory(),
        }
    }

    /// Load from a specific store file.
    ///
    /// A missing file or malformed content yields an empty set; the store
    /// is rewritten on the next change.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexSet<String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("discarding corrupt completion store {}: {e}", path.display());
                    IndexSet::new()
                }
            },
            Err(_) => IndexSet::new(),
        };
        Self {
            entries,
            store_path: Some(path),
        }
    }

    /// Toggle a path; returns whether it is now completed.
    ///
    /// Adds the path if absent, removes it if present. The path is not
    /// validated against any tree. The store is re-saved after every
    /// change; a failed save is logged and the in-memory set stays
    /// authoritative for the session.
    pub fn toggle(&mut self, path: &str) -> bool {
        let completed = if self.entries.shift_remove(path) {
            false
        } else {
            self.entries.insert(path.to_string());
            true
        };
        if let Err(e) = self.save() {
            warn!("could not save completion store: {e}");
        }
        completed
    }

    /// Check if a path is marked completed.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    /// Number of completed entries, including stale ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is marked completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Write the set to its backing store, if any.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = &self.store_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_involution() {
        let mut set = CompletionSet::in_memory();
        assert!(set.toggle("mod1/a.mp4"));
        assert!(set.contains("mod1/a.mp4"));
        assert!(!set.toggle("mod1/a.mp4"));
        assert!(!set.contains("mod1/a.mp4"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = CompletionSet::in_memory();
        set.toggle("c.mp4");
        set.toggle("a.mp4");
        set.toggle("b.mp4");
        let order: Vec<&str> = set.iter().collect();
        assert_eq!(order, ["c.mp4", "a.mp4", "b.mp4"]);
    }

    #[test]
    fn test_round_trip_through_store() {
        let temp = TempDir::new().unwrap();
        let store = temp.path().join("completed.json");

        let mut set = CompletionSet::load_from(&store);
        set.toggle("intro.mp4");
        set.toggle("mod1/a.mp4");

        let reloaded = CompletionSet::load_from(&store);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("intro.mp4"));
        assert!(reloaded.contains("mod1/a.mp4"));
    }

    #[test]
    fn test_missing_store_loads_empty() {
        let temp = TempDir::new().unwrap();
        let set = CompletionSet::load_from(temp.path().join("nope.json"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_corrupt_store_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = temp.path().join("completed.json");
        std::fs::write(&store, "{not json").unwrap();

        let set = CompletionSet::load_from(&store);
        assert!(set.is_empty());
    }

    #[test]
    fn test_corrupt_store_overwritten_on_next_change() {
        let temp = TempDir::new().unwrap();
        let store = temp.path().join("completed.json");
        std::fs::write(&store, "42").unwrap();

        let mut set = CompletionSet::load_from(&store);
        set.toggle("intro.mp4");

        let reloaded = CompletionSet::load_from(&store);
        assert_eq!(reloaded.iter().collect::<Vec<_>>(), ["intro.mp4"]);
    }
}
