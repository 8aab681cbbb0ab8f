//! In-memory ledger backed by an ordered map.
//!
//! Cheaply cloneable via `Arc`; all clones share the same data.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Ledger, LedgerError};

/// An in-memory [`Ledger`]. Scans return keys in ascending order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        if key.is_empty() {
            return Err(LedgerError::InvalidKey {
                key: key.to_string(),
                reason: "key must not be empty",
            });
        }
        self.inner.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        Ok(self
            .inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_is_none() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.get("absent").unwrap(), None);
        assert!(!ledger.contains("absent").unwrap());
    }

    #[test]
    fn put_replaces_value() {
        let ledger = InMemoryLedger::new();
        ledger.put("k", b"one").unwrap();
        ledger.put("k", b"two").unwrap();
        assert_eq!(ledger.get("k").unwrap().as_deref(), Some(&b"two"[..]));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn empty_key_rejected() {
        let ledger = InMemoryLedger::new();
        assert!(matches!(
            ledger.put("", b"x"),
            Err(LedgerError::InvalidKey { .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn scan_is_key_ordered() {
        let ledger = InMemoryLedger::new();
        ledger.put("b", b"2").unwrap();
        ledger.put("a", b"1").unwrap();
        ledger.put("c", b"3").unwrap();
        let keys: Vec<String> = ledger.scan_all().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryLedger::new();
        let b = a.clone();
        a.put("k", b"v").unwrap();
        assert!(b.contains("k").unwrap());
    }
}
