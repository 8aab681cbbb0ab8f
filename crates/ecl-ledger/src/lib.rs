//! # ecl-ledger — Keyed Record Store
//!
//! The contract core reads and writes whole records by key and never looks
//! inside the store. This crate defines that seam:
//!
//! - [`Ledger`]: `get` / `put` / `scan_all` over opaque byte values.
//! - [`InMemoryLedger`] (`memory.rs`): ordered map behind a lock, for tests
//!   and embedding.
//! - [`FileLedger`] (`file.rs`): one `<key>.json` file per record in a state
//!   directory, used by the `ecl` binary.
//!
//! ## Crate Policy
//!
//! - Values are opaque bytes; encoding belongs to the caller.
//! - A missing key is `Ok(None)`, never an error. Errors are reserved for
//!   failures of the store itself.
//! - Concurrency control beyond a single atomic `put` is the responsibility
//!   of the store deployment, not of callers.

pub mod error;
pub mod file;
pub mod memory;

pub use error::LedgerError;
pub use file::FileLedger;
pub use memory::InMemoryLedger;

use std::sync::Arc;

/// A keyed store of opaque record values.
pub trait Ledger: Send + Sync {
    /// Fetch the value stored under `key`. `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store could not be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not acceptable to the store or the
    /// write failed. A failed write leaves the previous value in place.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Every `(key, value)` pair in the store.
    ///
    /// Ordering is stable across calls against unchanged state; both
    /// bundled implementations return ascending key order.
    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError>;

    /// Whether a value exists under `key`.
    fn contains(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        (**self).put(key, value)
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        (**self).scan_all()
    }

    fn contains(&self, key: &str) -> Result<bool, LedgerError> {
        (**self).contains(key)
    }
}

impl<L: Ledger + ?Sized> Ledger for Arc<L> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        (**self).put(key, value)
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        (**self).scan_all()
    }

    fn contains(&self, key: &str) -> Result<bool, LedgerError> {
        (**self).contains(key)
    }
}
