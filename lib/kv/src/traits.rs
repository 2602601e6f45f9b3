use crate::error::KVError;

/// KVStore provides a key-value storage interface for JSON documents.
///
/// Keys follow a namespaced convention: `social:user:alice`,
/// `social:dislike:alice:t42`, etc. Values are opaque bytes to this layer;
/// the typed document layer above encodes/decodes them.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair, overwriting any existing value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), KVError>;

    /// Scan all keys matching a prefix. Returns sorted (key, value) pairs.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>;
}
