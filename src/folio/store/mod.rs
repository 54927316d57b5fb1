//! # Storage Layer
//!
//! Preferences persist through the [`KeyValueStore`] trait: opaque string keys mapped to
//! plain string values. The preference layer treats every call as best-effort, so
//! backends report failures through [`Result`] and never panic.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - all keys in one JSON object, `prefs.json`, inside the data dir
//!   - the file is created on first write
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!   - no persistence
//!   - fixtures (including an always-failing store) behind the `test_utils` feature
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── prefs.json     # {"themeMode": "dark", "hasSeenWelcomePopup": "true", ...}
//! └── config.json    # client configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for preference storage.
pub trait KeyValueStore {
    /// Reads a key. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
