//! # Contract Subcommands
//!
//! - `create` / `update`: take a contract submission from `--file` or `--json`.
//! - `read` / `exists`: look up one record.
//! - `approve` / `terminate`: status transitions.
//! - `extend`: move the end date of an Active contract.
//! - `list`: every record in the ledger.
//!
//! Mutations print the stored record after the change.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use ecl_contracts::{Contract, ContractRegistry};
use ecl_core::Clock;
use ecl_ledger::Ledger;

use crate::write_json;

/// A contract submission, either inline or from a file.
///
/// Single quotes are accepted in place of double quotes.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ContractInput {
    /// Path to a JSON file holding the contract.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// The contract as inline JSON.
    #[arg(long)]
    pub json: Option<String>,
}

impl ContractInput {
    pub fn load(&self) -> Result<Contract> {
        let text = match (&self.file, &self.json) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read contract file {}", path.display()))?,
            (None, Some(json)) => json.clone(),
            (None, None) => anyhow::bail!("one of --file or --json is required"),
        };
        Contract::from_submission(&text).context("invalid contract submission")
    }
}

#[derive(Subcommand, Debug)]
pub enum ContractCommand {
    /// Store a new contract in Pending status.
    Create(ContractInput),

    /// Show a contract.
    Read {
        /// Contract identifier.
        #[arg(long)]
        id: String,
    },

    /// Report whether a contract exists.
    Exists {
        /// Contract identifier.
        #[arg(long)]
        id: String,
    },

    /// Replace the terms of a contract that is not Terminated.
    Update(ContractInput),

    /// Approve a Pending contract (Pending → Active).
    Approve {
        /// Contract identifier.
        #[arg(long)]
        id: String,
    },

    /// Terminate a contract (Pending | Active → Terminated).
    Terminate {
        /// Contract identifier.
        #[arg(long)]
        id: String,
    },

    /// Extend an Active contract near the end of its term.
    Extend {
        /// Contract identifier.
        #[arg(long)]
        id: String,
        /// New end date, MM/DD/YYYY.
        #[arg(long)]
        to: String,
    },

    /// List every contract in the ledger.
    List,
}

/// Execute a contract subcommand.
pub fn run_contract<L: Ledger, C: Clock>(
    command: &ContractCommand,
    registry: &ContractRegistry<L, C>,
    out: &mut impl Write,
) -> Result<u8> {
    match command {
        ContractCommand::Create(input) => {
            let contract = input.load()?;
            let id = contract.id.to_string();
            registry
                .create(contract)
                .with_context(|| format!("failed to create contract {id}"))?;
            print_contract(registry, &id, out)
        }
        ContractCommand::Read { id } => print_contract(registry, id, out),
        ContractCommand::Exists { id } => {
            let exists = registry
                .exists(id)
                .with_context(|| format!("failed to look up contract {id}"))?;
            write_json(out, &json!({ "ID": id, "Exists": exists }))?;
            Ok(0)
        }
        ContractCommand::Update(input) => {
            let contract = input.load()?;
            let id = contract.id.to_string();
            registry
                .update(contract)
                .with_context(|| format!("failed to update contract {id}"))?;
            print_contract(registry, &id, out)
        }
        ContractCommand::Approve { id } => {
            registry
                .approve(id)
                .with_context(|| format!("failed to approve contract {id}"))?;
            print_contract(registry, id, out)
        }
        ContractCommand::Terminate { id } => {
            registry
                .terminate(id)
                .with_context(|| format!("failed to terminate contract {id}"))?;
            print_contract(registry, id, out)
        }
        ContractCommand::Extend { id, to } => {
            registry
                .extend(id, to)
                .with_context(|| format!("failed to extend contract {id}"))?;
            print_contract(registry, id, out)
        }
        ContractCommand::List => {
            let contracts = registry.get_all().context("failed to list contracts")?;
            write_json(out, &contracts)?;
            Ok(0)
        }
    }
}

fn print_contract<L: Ledger, C: Clock>(
    registry: &ContractRegistry<L, C>,
    id: &str,
    out: &mut impl Write,
) -> Result<u8> {
    let contract = registry
        .read(id)
        .with_context(|| format!("failed to read contract {id}"))?;
    write_json(out, &contract)?;
    Ok(0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ecl_contracts::{ContractError, ErrorKind};
    use ecl_core::{ContractDate, FixedClock};
    use ecl_ledger::FileLedger;

    pub(crate) const SUBMISSION: &str = "{'ID':'C1','Start date':'11/01/2026','End date':'12/15/2026',\
        'Employer':{'ID':'ER-7','Name':'Acme Ltd','Employer address and contact details':'1 Main St','Country':'AE'},\
        'Employee':{'ID':'EE-42','Name':'Dana Reyes','Employee address and contact details':'dana@example.com','Country':'PH'},\
        'Job':{'Position':'Site engineer','Level':'Senior','Description':'Runs the site'},\
        'Benefits':{'Currency':'AED','Salary':12000,'Annual increase':'5%','Annual leave':'30 days',\
        'Housing':0,'Allowances':0,'Other benefits':'Medical'}}";

    pub(crate) fn registry(dir: &std::path::Path) -> ContractRegistry<FileLedger, FixedClock> {
        let today = ContractDate::parse("10/17/2026").unwrap();
        ContractRegistry::with_clock(FileLedger::open(dir).unwrap(), FixedClock(today))
    }

    pub(crate) fn run(
        command: ContractCommand,
        reg: &ContractRegistry<FileLedger, FixedClock>,
    ) -> Result<serde_json::Value> {
        let mut out = Vec::new();
        run_contract(&command, reg, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    fn inline(json: &str) -> ContractInput {
        ContractInput {
            file: None,
            json: Some(json.to_string()),
        }
    }

    pub(crate) fn create_c1(reg: &ContractRegistry<FileLedger, FixedClock>) {
        run(ContractCommand::Create(inline(SUBMISSION)), reg).unwrap();
    }

    #[test]
    fn create_prints_pending_record() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        let value = run(ContractCommand::Create(inline(SUBMISSION)), &reg).unwrap();
        assert_eq!(value["ID"], "C1");
        assert_eq!(value["Status"], "Pending");
        assert!(dir.path().join("C1.json").is_file());
    }

    #[test]
    fn create_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(&dir.path().join("ledger"));
        let path = dir.path().join("c1.json");
        std::fs::write(&path, SUBMISSION).unwrap();
        let input = ContractInput {
            file: Some(path),
            json: None,
        };
        let value = run(ContractCommand::Create(input), &reg).unwrap();
        assert_eq!(value["Employee"]["Name"], "Dana Reyes");
    }

    #[test]
    fn duplicate_create_reports_kind() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        create_c1(&reg);
        let err = run(ContractCommand::Create(inline(SUBMISSION)), &reg).unwrap_err();
        assert!(err.to_string().contains("failed to create contract C1"));
        let cause = err.downcast_ref::<ContractError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn id_unusable_as_file_name_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(&dir.path().join("ledger"));
        for id in ["../C1", ".C1"] {
            let submission = SUBMISSION.replacen("'ID':'C1'", &format!("'ID':'{id}'"), 1);
            let err = run(ContractCommand::Create(inline(&submission)), &reg).unwrap_err();
            let cause = err.downcast_ref::<ContractError>().unwrap();
            assert_eq!(cause.kind(), ErrorKind::InvalidInput, "{id}");
        }
        assert!(!dir.path().join("C1.json").exists());
    }

    #[test]
    fn malformed_submission_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        let err = run(ContractCommand::Create(inline("{'ID': ")), &reg).unwrap_err();
        assert!(err.to_string().contains("invalid contract submission"));
    }

    #[test]
    fn exists_reports_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        let id = || "C1".to_string();
        let value = run(ContractCommand::Exists { id: id() }, &reg).unwrap();
        assert_eq!(value["Exists"], false);
        create_c1(&reg);
        let value = run(ContractCommand::Exists { id: id() }, &reg).unwrap();
        assert_eq!(value["Exists"], true);
    }

    #[test]
    fn approve_extend_terminate() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        create_c1(&reg);
        let id = || "C1".to_string();

        let value = run(ContractCommand::Approve { id: id() }, &reg).unwrap();
        assert_eq!(value["Status"], "Active");

        let value = run(
            ContractCommand::Extend {
                id: id(),
                to: "12/15/2027".to_string(),
            },
            &reg,
        )
        .unwrap();
        assert_eq!(value["End date"], "12/15/2027");

        let value = run(ContractCommand::Terminate { id: id() }, &reg).unwrap();
        assert_eq!(value["Status"], "Terminated");
        assert!(run(ContractCommand::Approve { id: id() }, &reg).is_err());
    }

    #[test]
    fn update_keeps_status() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        create_c1(&reg);
        run(ContractCommand::Approve { id: "C1".to_string() }, &reg).unwrap();
        let revised = SUBMISSION.replace("'Level':'Senior'", "'Level':'Principal'");
        let value = run(ContractCommand::Update(inline(&revised)), &reg).unwrap();
        assert_eq!(value["Job"]["Level"], "Principal");
        assert_eq!(value["Status"], "Active");
    }

    #[test]
    fn read_missing_fails() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        let err = run(ContractCommand::Read { id: "C9".to_string() }, &reg).unwrap_err();
        let cause = err.downcast_ref::<ContractError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn list_prints_array() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(dir.path());
        let value = run(ContractCommand::List, &reg).unwrap();
        assert_eq!(value, serde_json::json!([]));
        create_c1(&reg);
        let value = run(ContractCommand::List, &reg).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
