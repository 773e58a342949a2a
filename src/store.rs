//! In-memory key-value storage shared by both roles.
//!
//! The leader and every follower each own one `KvStore`; there is no shared
//! memory between processes. All coordination happens through replication
//! calls, so whatever lands here last for a key wins, regardless of the
//! order the leader sent the writes in.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Last-write-wins map from key to value.
///
/// A plain `Mutex` makes each `put`/`get` atomic, which is the only
/// guarantee the replication engine needs: single-writer-at-a-time per
/// operation, no ordering across keys. `BTreeMap` keeps snapshot output
/// deterministic for the debug endpoint.
#[derive(Default)]
pub struct KvStore {
    data: Mutex<BTreeMap<String, String>>,
}

impl KvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(BTreeMap::new()),
        }
    }

    /// Stores a value, unconditionally overwriting any previous one.
    pub fn put(&self, key: String, value: String) {
        self.data.lock().unwrap().insert(key, value);
    }

    /// Returns the current value for `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }

    /// Returns an immutable copy of every entry.
    ///
    /// Clones the whole map so the lock is released before the caller
    /// iterates. Used by the debug endpoint and by consistency checks in
    /// tests; store sizes in this system are tiny.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.data.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let store = KvStore::new();
        store.put("k".to_string(), "v1".to_string());
        store.put("k".to_string(), "v2".to_string());
        assert_eq!(store.get("k"), Some("v2".to_string()));
    }

    #[test]
    fn missing_key_reads_none() {
        let store = KvStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let store = KvStore::new();
        store.put("a".to_string(), "1".to_string());
        let snapshot = store.snapshot();
        store.put("b".to_string(), "2".to_string());

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("a"), Some(&"1".to_string()));
        assert_eq!(store.snapshot().len(), 2);
    }
}
