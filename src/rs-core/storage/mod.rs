use std::fmt;

use crate::bindings::{jsStorageGetItem, jsStorageRemoveItem, jsStorageSetItem};
use crate::utils::parse::read_leading_integer;

#[cfg(test)]
pub(crate) mod memory;

/// Synchronous key/value storage in which playback positions are persisted.
///
/// Failures of the underlying storage are not reported: they are left to
/// propagate to the host environment.
pub(crate) trait ProgressStorage {
    /// Returns the value stored under `key`, `None` if there's none.
    fn get_item(&self, key: &StorageKey) -> Option<String>;

    /// Store `value` under `key`, replacing the previous value if one.
    fn set_item(&mut self, key: &StorageKey, value: &str);

    /// Remove the value stored under `key` if one.
    fn remove_item(&mut self, key: &StorageKey);
}

/// Key identifying the saved position of a single media in the storage.
///
/// It is the concatenation of the configured namespace and of the video
/// identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StorageKey(String);

impl StorageKey {
    pub(crate) fn new(namespace: &str, video_id: &str) -> Self {
        let mut key = String::with_capacity(namespace.len() + video_id.len());
        key.push_str(namespace);
        key.push_str(video_id);
        Self(key)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a playback position, in seconds, the way it is written in the
/// storage.
pub(crate) fn format_position(position: f64) -> String {
    position.to_string()
}

/// Parse a value read from the storage into the position, in seconds, at which
/// playback should resume.
///
/// Only the integer part is considered. Returns `None` if the value does not
/// start with a strictly positive integer.
pub(crate) fn parse_resume_position(value: &str) -> Option<u64> {
    match read_leading_integer(value) {
        Some(position) if position > 0 => Some(position as u64),
        _ => None,
    }
}

/// `ProgressStorage` implementation relying on the page's `localStorage`.
pub(crate) struct JsLocalStorage {}

impl JsLocalStorage {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ProgressStorage for JsLocalStorage {
    fn get_item(&self, key: &StorageKey) -> Option<String> {
        jsStorageGetItem(key.as_str())
    }

    fn set_item(&mut self, key: &StorageKey, value: &str) {
        jsStorageSetItem(key.as_str(), value);
    }

    fn remove_item(&mut self, key: &StorageKey) {
        jsStorageRemoveItem(key.as_str());
    }
}
