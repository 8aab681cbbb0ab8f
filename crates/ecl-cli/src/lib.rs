//! # ecl-cli — Employment Contract Ledger Command-Line Interface
//!
//! Provides the `ecl` binary over a directory-backed ledger.
//!
//! ## Subcommands
//!
//! - `ecl create | read | exists | update | approve | terminate | extend | list`
//!   for contract operations (`contract.rs`).
//! - `ecl dispute issue | update | close | respond`: disputes (`dispute.rs`).
//! - `ecl history`: per-party counters (`history.rs`).
//!
//! ```bash
//! ecl create --file contract.json
//! ecl approve --id C1
//! ecl dispute issue --id C1 --content "late payment"
//! ecl history --party EE-42 --role employee
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic; handlers delegate
//!   to `ecl-contracts`.
//! - Results go to stdout as pretty JSON. Logs go to stderr.

pub mod config;
pub mod contract;
pub mod dispute;
pub mod history;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use ecl_contracts::{ContractRegistry, RegistryPolicy};
use ecl_ledger::FileLedger;

/// Registry over a file ledger rooted at `ledger_dir`, using the system clock.
pub fn open_registry(ledger_dir: &Path, policy: RegistryPolicy) -> Result<ContractRegistry<FileLedger>> {
    let ledger = FileLedger::open(ledger_dir)
        .with_context(|| format!("failed to open ledger at {}", ledger_dir.display()))?;
    Ok(ContractRegistry::new(ledger).with_policy(policy))
}

/// Write `value` to `out` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
