//! In-memory document store.

use crate::traits::{DocumentStore, StoreResult};
use dashmap::DashMap;

/// Concurrent in-memory `DocumentStore`.
///
/// Documents live in a sharded map, so reads and writes from many threads
/// proceed without a global lock. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<String, Vec<u8>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a document, returning its bytes if it existed
    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.documents.remove(key).map(|(_, bytes)| bytes)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn put(&self, key: &str, bytes: Vec<u8>) -> StoreResult<()> {
        self.documents.insert(key.to_string(), bytes);
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.documents.get(key).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_get() {
        let store = InMemoryDocumentStore::new();
        store.put("a", b"{}".to_vec()).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(store.get("b").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = InMemoryDocumentStore::new();
        store.put("a", b"1".to_vec()).unwrap();
        store.put("a", b"2".to_vec()).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store = InMemoryDocumentStore::new();
        store.put("a", b"1".to_vec()).unwrap();

        assert_eq!(store.remove("a"), Some(b"1".to_vec()));
        assert_eq!(store.remove("a"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(InMemoryDocumentStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        store
                            .put(&format!("{}-{}", t, i), vec![t as u8])
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        assert_eq!(store.get("3-99").unwrap(), Some(vec![3]));
    }
}
