use super::KeyValueStore;
use crate::error::{FolioError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const PREFS_FILENAME: &str = "prefs.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PREFS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let file = self.path();
        if !file.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(file).map_err(FolioError::Io)?;
        let entries = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(entries)
    }

    /// Entries to write over, and whether the file on disk was unreadable.
    /// A corrupt file is replaced rather than blocking every write.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(FolioError::Serialization(e)) => {
                warn!(path = %self.path().display(), error = %e, "discarding unreadable preferences");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries).map_err(FolioError::Serialization)?;
        fs::write(self.path(), content).map_err(FolioError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let (mut entries, discarded) = self.load_for_write()?;
        if entries.remove(key).is_some() || discarded {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("themeMode").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.set("themeMode", "dark").unwrap();
        store.set("colorScheme", "teal").unwrap();

        let reopened = FileStore::new(dir.path().join("nested"));
        assert_eq!(reopened.get("themeMode").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("colorScheme").unwrap().as_deref(), Some("teal"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILENAME), "not json").unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.get("themeMode"),
            Err(FolioError::Serialization(_))
        ));
    }

    #[test]
    fn writes_replace_a_corrupt_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILENAME), "{not json").unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("themeMode", "dark").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn remove_clears_a_corrupt_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PREFS_FILENAME), "{not json").unwrap();
        let mut store = FileStore::new(dir.path());

        store.remove("hasSeenWelcomePopup").unwrap();

        assert_eq!(store.get("hasSeenWelcomePopup").unwrap(), None);
    }
}
