//! Session cache for CMS payloads.
//!
//! Content is stored in sessionStorage as JSON. It is cleared when the tab
//! closes, so a new visit always sees fresh content while navigating back
//! and forth within one visit costs no extra requests.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Read a cached value. Missing keys and stale shapes both yield `None`.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = dom::session_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "discarding stale cache entry");
            remove(key);
            None
        }
    }
}

/// Store a value.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Drop a cached value.
pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}
