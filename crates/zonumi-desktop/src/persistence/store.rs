//! Position store: window layout persistence

use crate::error::DesktopResult;
use crate::window::WindowLayout;
use super::{decode_layout, encode_layout, Storage};

/// Storage key for the window layout snapshot
pub const WINDOW_POSITION_STORAGE_KEY: &str = "zonumi.window-positions.v1";

/// Reads and writes the window layout under a fixed key
#[derive(Debug)]
pub struct PositionStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> PositionStore<S> {
    /// Create a store using the default key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, WINDOW_POSITION_STORAGE_KEY)
    }

    /// Create a store using a custom key
    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored layout merged over defaults
    ///
    /// `None` if nothing is stored, storage cannot be read, or the snapshot
    /// is unparsable.
    pub fn load(&self) -> Option<WindowLayout> {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => decode_layout(&raw),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(%err, "window snapshot unreadable");
                None
            }
        }
    }

    /// Load the stored layout, or registry defaults
    pub fn load_or_default(&self) -> WindowLayout {
        self.load().unwrap_or_default()
    }

    /// Write the whole layout
    pub fn save(&mut self, layout: &WindowLayout) -> DesktopResult<()> {
        let json = encode_layout(layout)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;
    use crate::persistence::MemoryStorage;
    use crate::window::{WindowId, WindowState};

    #[test]
    fn test_load_absent() {
        let store = PositionStore::new(MemoryStorage::new());
        assert!(store.load().is_none());
        assert_eq!(store.load_or_default(), WindowLayout::defaults());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = PositionStore::new(MemoryStorage::new());
        let mut layout = WindowLayout::defaults();
        layout.set(WindowId::Experience, WindowState::new(320.0, 140.5, 42));

        store.save(&layout).unwrap();
        assert_eq!(store.load().unwrap(), layout);
    }

    #[test]
    fn test_load_garbage() {
        let storage = MemoryStorage::new().with_entry(WINDOW_POSITION_STORAGE_KEY, "not json");
        let store = PositionStore::new(storage);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_unavailable_storage() {
        let mut store = PositionStore::new(MemoryStorage::unavailable());
        assert!(store.load().is_none());

        let err = store.save(&WindowLayout::defaults()).unwrap_err();
        assert!(matches!(err, DesktopError::Storage(_)));
    }

    #[test]
    fn test_custom_key() {
        let mut store = PositionStore::with_key(MemoryStorage::new(), "other.key");
        store.save(&WindowLayout::defaults()).unwrap();

        assert_eq!(store.key(), "other.key");
        assert!(store.storage().raw("other.key").is_some());
        assert!(store.storage().raw(WINDOW_POSITION_STORAGE_KEY).is_none());
    }
}
