//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! ledger_dir: /var/lib/ecl/ledger
//! policy:
//!   extension_window_months: 3
//! ```
//!
//! The ledger directory is resolved in order: `--ledger-dir`, then
//! `ECL_LEDGER_DIR`, then `ledger_dir` from this file, then
//! [`DEFAULT_LEDGER_DIR`]. The first two are both handled by clap.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use ecl_contracts::RegistryPolicy;

/// Ledger directory used when nothing else names one.
pub const DEFAULT_LEDGER_DIR: &str = ".ecl/ledger";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EclConfig {
    pub ledger_dir: Option<PathBuf>,
    pub policy: RegistryPolicy,
}

impl EclConfig {
    /// Read a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// `--config` if given, otherwise defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the ledger directory. `from_cli` is the flag or environment
    /// value as parsed by clap.
    pub fn resolve_ledger_dir(&self, from_cli: Option<&Path>) -> PathBuf {
        from_cli
            .map(Path::to_path_buf)
            .or_else(|| self.ledger_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = EclConfig::from_yaml(
            "ledger_dir: /tmp/ledger\npolicy:\n  extension_window_months: 6\n",
        )
        .unwrap();
        assert_eq!(cfg.ledger_dir, Some(PathBuf::from("/tmp/ledger")));
        assert_eq!(cfg.policy.extension_window_months, 6);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let cfg = EclConfig::from_yaml("ledger_dir: data\n").unwrap();
        assert_eq!(cfg.policy, RegistryPolicy::default());
        assert_eq!(EclConfig::from_yaml("").unwrap(), EclConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(EclConfig::from_yaml("ledger_directory: data\n").is_err());
    }

    #[test]
    fn ledger_dir_precedence() {
        let cfg = EclConfig {
            ledger_dir: Some(PathBuf::from("from-config")),
            ..EclConfig::default()
        };
        assert_eq!(
            cfg.resolve_ledger_dir(Some(Path::new("from-flag"))),
            PathBuf::from("from-flag")
        );
        assert_eq!(cfg.resolve_ledger_dir(None), PathBuf::from("from-config"));
        assert_eq!(
            EclConfig::default().resolve_ledger_dir(None),
            PathBuf::from(DEFAULT_LEDGER_DIR)
        );
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecl.yaml");
        std::fs::write(&path, "policy:\n  extension_window_months: 1\n").unwrap();
        let cfg = EclConfig::load_optional(Some(&path)).unwrap();
        assert_eq!(cfg.policy.extension_window_months, 1);

        let missing = dir.path().join("absent.yaml");
        let err = EclConfig::load(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }
}
