use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use tuiter_core::ServiceError;
use tuiter_kv::KVStore;

/// A model persisted as a JSON document in the KV store.
///
/// Documents live under `{kv_prefix}{key_value}`. Hooks run inside
/// [`KvOps::save_new`] / [`KvOps::save`] so callers never stamp ids or
/// timestamps themselves.
pub trait KvModel: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Key namespace for this model, e.g. `"social:tuit:"`.
    fn kv_prefix() -> &'static str;

    /// The document key within the namespace (usually the id).
    fn key_value(&self) -> String;

    /// Called before the first save. Stamp ids and created/updated times here.
    fn before_create(&mut self) {}

    /// Called before every subsequent save.
    fn before_update(&mut self) {}
}

/// Typed CRUD operations for one model over a shared KV store.
pub struct KvOps<T: KvModel> {
    kv: Arc<dyn KVStore>,
    _marker: PhantomData<T>,
}

impl<T: KvModel> Clone for KvOps<T> {
    fn clone(&self) -> Self {
        Self {
            kv: self.kv.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: KvModel> KvOps<T> {
    pub fn new(kv: Arc<dyn KVStore>) -> Self {
        Self {
            kv,
            _marker: PhantomData,
        }
    }

    fn full_key(key: &str) -> String {
        format!("{}{}", T::kv_prefix(), key)
    }

    fn encode(item: &T) -> Result<Vec<u8>, ServiceError> {
        serde_json::to_vec(item).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<T, ServiceError> {
        serde_json::from_slice(bytes).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// Get a document by key. Returns None if it does not exist.
    pub fn get(&self, key: &str) -> Result<Option<T>, ServiceError> {
        let bytes = self
            .kv
            .get(&Self::full_key(key))
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        bytes.as_deref().map(Self::decode).transpose()
    }

    /// Insert a new document. Runs `before_create`, then fails with
    /// Conflict if a document with the same key already exists.
    pub fn save_new(&self, mut item: T) -> Result<T, ServiceError> {
        item.before_create();
        let key = Self::full_key(&item.key_value());
        let existing = self
            .kv
            .get(&key)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!("key already exists: {}", key)));
        }
        self.kv
            .set(&key, &Self::encode(&item)?)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(item)
    }

    /// Overwrite an existing document. Runs `before_update`, fails with
    /// NotFound if the document is absent.
    pub fn save(&self, mut item: T) -> Result<T, ServiceError> {
        item.before_update();
        let key = Self::full_key(&item.key_value());
        let existing = self
            .kv
            .get(&key)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if existing.is_none() {
            return Err(ServiceError::NotFound(format!("no such key: {}", key)));
        }
        self.kv
            .set(&key, &Self::encode(&item)?)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(item)
    }

    /// Delete a document by key. Fails with NotFound if it is absent.
    pub fn delete(&self, key: &str) -> Result<(), ServiceError> {
        let full = Self::full_key(key);
        let existing = self
            .kv
            .get(&full)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if existing.is_none() {
            return Err(ServiceError::NotFound(format!("no such key: {}", full)));
        }
        self.kv
            .delete(&full)
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    /// List all documents of this model, in key order.
    pub fn list(&self) -> Result<Vec<T>, ServiceError> {
        let pairs = self
            .kv
            .scan(T::kv_prefix())
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        pairs.iter().map(|(_, v)| Self::decode(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tuiter_kv::RedbStore;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl KvModel for Note {
        fn kv_prefix() -> &'static str {
            "test:note:"
        }
        fn key_value(&self) -> String {
            self.id.clone()
        }
        fn before_create(&mut self) {
            if self.id.is_empty() {
                self.id = "generated".into();
            }
        }
    }

    fn test_ops() -> KvOps<Note> {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let kv: Arc<dyn KVStore> = Arc::new(RedbStore::open(tmp.path()).unwrap());
        std::mem::forget(tmp);
        KvOps::new(kv)
    }

    #[test]
    fn save_new_and_get() {
        let ops = test_ops();
        let note = ops.save_new(Note { id: "n1".into(), text: "hi".into() }).unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(ops.get("n1").unwrap(), Some(note));
        assert_eq!(ops.get("n2").unwrap(), None);
    }

    #[test]
    fn save_new_runs_before_create() {
        let ops = test_ops();
        let note = ops.save_new(Note { id: String::new(), text: "x".into() }).unwrap();
        assert_eq!(note.id, "generated");
    }

    #[test]
    fn save_new_duplicate_conflicts() {
        let ops = test_ops();
        ops.save_new(Note { id: "n1".into(), text: "a".into() }).unwrap();
        let err = ops.save_new(Note { id: "n1".into(), text: "b".into() }).unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
        // The original document is untouched.
        assert_eq!(ops.get("n1").unwrap().unwrap().text, "a");
    }

    #[test]
    fn save_missing_is_not_found() {
        let ops = test_ops();
        let err = ops.save(Note { id: "nope".into(), text: "x".into() }).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn save_overwrites() {
        let ops = test_ops();
        ops.save_new(Note { id: "n1".into(), text: "old".into() }).unwrap();
        ops.save(Note { id: "n1".into(), text: "new".into() }).unwrap();
        assert_eq!(ops.get("n1").unwrap().unwrap().text, "new");
    }

    #[test]
    fn delete_missing_is_not_found() {
        let ops = test_ops();
        let err = ops.delete("ghost").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn list_returns_all_in_key_order() {
        let ops = test_ops();
        ops.save_new(Note { id: "b".into(), text: "2".into() }).unwrap();
        ops.save_new(Note { id: "a".into(), text: "1".into() }).unwrap();
        let all = ops.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }
}
