// ABOUTME: Key-value persistence abstraction used by every FitTrack collaborator
// ABOUTME: Trait plus in-memory and JSON-file backends and typed JSON helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! FitTrack persists everything as JSON documents under a handful of string
//! keys (see [`fittrack_core::constants::storage_keys`]). The [`KeyValueStore`]
//! trait is the only thing the profile, food and log stores depend on, so any
//! backend that can get/set strings will do.

/// JSON document on disk
pub mod file;
/// Concurrent in-process map
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use fittrack_core::errors::{AppResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Opaque string key-value persistence
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Insert or replace a value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete a value; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;

    /// All keys currently present, sorted
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Read and deserialize a JSON document
///
/// # Errors
///
/// Returns a storage error if the backend fails, or a serialization error if the
/// stored document does not match `T`
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        debug!(key, "No stored document");
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)?;
    debug!(key, bytes = raw.len(), "Loaded stored document");
    Ok(Some(value))
}

/// Read a JSON document, falling back when it is absent or unreadable
///
/// Corrupt documents are logged and replaced by the fallback rather than
/// surfacing an error. Read paths only: a mutation built on the fallback
/// would overwrite the damaged document, so writers load with [`load_json`].
///
/// # Errors
///
/// Returns a storage error only if the backend itself fails
pub fn load_json_or_else<T, F>(store: &dyn KeyValueStore, key: &str, fallback: F) -> AppResult<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match load_json(store, key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Ok(fallback()),
        Err(e) if e.code == ErrorCode::SerializationError => {
            warn!(key, error = %e, "Stored document is corrupt, using fallback");
            Ok(fallback())
        }
        Err(e) => Err(e),
    }
}

/// Serialize and write a JSON document
///
/// # Errors
///
/// Returns a serialization or storage error
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    debug!(key, bytes = raw.len(), "Saving document");
    store.set(key, raw)
}
