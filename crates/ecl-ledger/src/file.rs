//! # File-Backed Ledger
//!
//! Stores each record as `<key>.json` inside a state directory. Writes go
//! to a hidden temporary file first and are renamed into place, so a
//! reader never sees a half-written record.
//!
//! Keys double as file names and are checked so they cannot escape the
//! state directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Ledger, LedgerError};

const EXTENSION: &str = "json";

/// A [`Ledger`] persisted as one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileLedger {
    dir: PathBuf,
}

impl FileLedger {
    /// Open (creating if needed) a ledger rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| LedgerError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The state directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, LedgerError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

/// Reject keys that are empty, hidden, or could traverse out of the directory.
fn validate_key(key: &str) -> Result<(), LedgerError> {
    let reason = if key.is_empty() {
        Some("key must not be empty")
    } else if key.contains('/') || key.contains('\\') || key.contains('\0') {
        Some("key contains path separator characters")
    } else if key.starts_with('.') {
        Some("key must not start with '.'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(LedgerError::InvalidKey {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

impl Ledger for FileLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let path = self.record_path(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LedgerError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        let path = self.record_path(key)?;
        let tmp = self.dir.join(format!(".{key}.{EXTENSION}.tmp"));
        let io_err = |source| LedgerError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::write(&tmp, value).map_err(io_err)?;
        if let Err(source) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(source));
        }
        tracing::trace!(key, path = %path.display(), "ledger record written");
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        let dir_err = |source| LedgerError::Io {
            key: self.dir.display().to_string(),
            source,
        };
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(dir_err)? {
            let path = entry.map_err(dir_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping ledger file with non-UTF-8 name");
                continue;
            };
            if key.starts_with('.') {
                continue;
            }
            let bytes = std::fs::read(&path).map_err(|source| LedgerError::Io {
                key: key.to_string(),
                source,
            })?;
            records.push((key.to_string(), bytes));
        }
        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }
}
