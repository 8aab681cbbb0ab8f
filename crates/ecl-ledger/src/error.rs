//! # Ledger Errors
//!
//! Failures of the store itself. "Key not present" is not an error; see
//! [`Ledger::get`](crate::Ledger::get).

use thiserror::Error;

/// A store operation failed.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The key cannot be used with this store.
    #[error("invalid ledger key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Filesystem failure in a file-backed store.
    #[error("ledger io error on {key:?}: {source}")]
    Io {
        /// The key being accessed, or the state directory for scans.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be reached or refused the operation.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
