use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Encoding failed with: {0}")]
    Encode(String),

    #[error("Decoding failed with: {0}")]
    Decode(String),

    #[error("{0}")]
    Backend(String),
}

pub(crate) fn serialize_value<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))
}

pub(crate) fn deserialize_value<T: DeserializeOwned>(value: &str) -> Result<T, Error> {
    serde_json::from_str(value).map_err(|e| Error::Decode(e.to_string()))
}

/// A string key-value surface, the shape of browser local storage.
///
/// Every method takes `&self`; implementations use interior mutability.
/// Values are opaque text; callers own the encoding.
pub trait SnapshotStore: Debug + Send + Sync + 'static {
    /// Gets the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Removes `key` along with its value.
    ///
    /// Returns `true` if the key existed.
    fn remove(&self, key: &str) -> Result<bool, Error>;
}
