use std::{cell::Cell, collections::HashMap};

use super::{ProgressStorage, StorageKey};

/// In-memory `ProgressStorage`, keeping count of every call made to it.
#[derive(Default)]
pub(crate) struct MemoryStorage {
    items: HashMap<String, String>,
    get_calls: Cell<usize>,
    set_calls: usize,
    remove_calls: usize,
}

impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Peek at the stored value without counting it as a call.
    pub(crate) fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }

    pub(crate) fn set_calls(&self) -> usize {
        self.set_calls
    }

    pub(crate) fn remove_calls(&self) -> usize {
        self.remove_calls
    }

    pub(crate) fn call_count(&self) -> usize {
        self.get_calls.get() + self.set_calls + self.remove_calls
    }
}

impl ProgressStorage for MemoryStorage {
    fn get_item(&self, key: &StorageKey) -> Option<String> {
        self.get_calls.set(self.get_calls.get() + 1);
        self.items.get(key.as_str()).cloned()
    }

    fn set_item(&mut self, key: &StorageKey, value: &str) {
        self.set_calls += 1;
        self.items.insert(key.as_str().to_owned(), value.to_owned());
    }

    fn remove_item(&mut self, key: &StorageKey) {
        self.remove_calls += 1;
        self.items.remove(key.as_str());
    }
}
