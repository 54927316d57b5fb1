use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::FolioError;

    /// A store pre-seeded with the given entries.
    pub fn seeded(entries: &[(&str, &str)]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (key, value) in entries {
            store.entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// A store whose every operation fails, like disabled browser storage.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Err(FolioError::Store(format!("storage unavailable reading '{key}'")))
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(FolioError::Store(format!("storage unavailable writing '{key}'")))
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            Err(FolioError::Store(format!("storage unavailable removing '{key}'")))
        }
    }
}
