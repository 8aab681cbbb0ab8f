//! # History Subcommand
//!
//! `ecl history --party <id> --role employee|employer` prints the party's
//! counters. `--contracts` prints the matching records instead.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use ecl_contracts::{ContractRegistry, PartyRole};
use ecl_core::Clock;
use ecl_ledger::Ledger;

use crate::write_json;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Employee,
    Employer,
}

impl From<RoleArg> for PartyRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Employee => PartyRole::Employee,
            RoleArg::Employer => PartyRole::Employer,
        }
    }
}

/// Arguments for the `ecl history` subcommand.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Party identifier (employee or employer ID).
    #[arg(long)]
    pub party: String,
    /// Which side of the contract the party is on.
    #[arg(long, value_enum)]
    pub role: RoleArg,
    /// List the matching contracts instead of counting them.
    #[arg(long)]
    pub contracts: bool,
}

/// Execute the history subcommand.
pub fn run_history<L: Ledger, C: Clock>(
    args: &HistoryArgs,
    registry: &ContractRegistry<L, C>,
    out: &mut impl Write,
) -> Result<u8> {
    let role = PartyRole::from(args.role);
    let party = &args.party;
    if args.contracts {
        let contracts = registry
            .contracts_for(party, role)
            .with_context(|| format!("failed to list contracts for {role} {party}"))?;
        write_json(out, &contracts)?;
    } else {
        let aggregate = registry
            .view_history(party, role)
            .with_context(|| format!("failed to compute history for {role} {party}"))?;
        if aggregate.is_empty() {
            tracing::info!(party_id = %party, %role, "no contracts found for party");
        }
        write_json(out, &aggregate)?;
    }
    Ok(0)
}
