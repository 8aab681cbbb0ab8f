//! # Dispute Subcommand
//!
//! `ecl dispute issue | update | close | respond`. Each prints the affected
//! dispute as stored after the change.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ecl_contracts::{ContractError, ContractRegistry};
use ecl_core::{Clock, DisputeId};
use ecl_ledger::Ledger;

use crate::write_json;

/// Arguments for the `ecl dispute` subcommand.
#[derive(Args, Debug)]
pub struct DisputeArgs {
    #[command(subcommand)]
    pub command: DisputeCommand,
}

#[derive(Subcommand, Debug)]
pub enum DisputeCommand {
    /// Open a new dispute on a contract.
    Issue {
        /// Contract identifier.
        #[arg(long)]
        id: String,
        /// Description of the complaint.
        #[arg(long)]
        content: String,
    },

    /// Replace the content of an open dispute.
    Update {
        /// Contract identifier.
        #[arg(long)]
        id: String,
        /// Dispute identifier within the contract.
        #[arg(long)]
        dispute: String,
        #[arg(long)]
        content: String,
    },

    /// Close an open dispute.
    Close {
        /// Contract identifier.
        #[arg(long)]
        id: String,
        /// Dispute identifier within the contract.
        #[arg(long)]
        dispute: String,
    },

    /// Append a response to an open dispute.
    Respond {
        /// Contract identifier.
        #[arg(long)]
        id: String,
        /// Dispute identifier within the contract.
        #[arg(long)]
        dispute: String,
        #[arg(long)]
        content: String,
    },
}

/// Execute the dispute subcommand.
pub fn run_dispute<L: Ledger, C: Clock>(
    args: &DisputeArgs,
    registry: &ContractRegistry<L, C>,
    out: &mut impl Write,
) -> Result<u8> {
    let (id, dispute_id) = match &args.command {
        DisputeCommand::Issue { id, content } => {
            let dispute_id = registry
                .issue_dispute(id, content)
                .with_context(|| format!("failed to issue dispute on contract {id}"))?;
            (id, dispute_id)
        }
        DisputeCommand::Update {
            id,
            dispute,
            content,
        } => {
            registry
                .update_dispute(id, dispute, content)
                .with_context(|| format!("failed to update dispute {dispute} on contract {id}"))?;
            (id, DisputeId::new(dispute.as_str()))
        }
        DisputeCommand::Close { id, dispute } => {
            registry
                .close_dispute(id, dispute)
                .with_context(|| format!("failed to close dispute {dispute} on contract {id}"))?;
            (id, DisputeId::new(dispute.as_str()))
        }
        DisputeCommand::Respond {
            id,
            dispute,
            content,
        } => {
            let response_id = registry
                .respond_to_dispute(id, dispute, content)
                .with_context(|| format!("failed to respond to dispute {dispute} on contract {id}"))?;
            tracing::debug!(contract_id = %id, dispute_id = %dispute, %response_id, "response recorded");
            (id, DisputeId::new(dispute.as_str()))
        }
    };

    let contract = registry
        .read(id)
        .with_context(|| format!("failed to read contract {id}"))?;
    let dispute = contract
        .dispute(&dispute_id)
        .ok_or_else(|| ContractError::DisputeNotFound {
            contract_id: contract.id.clone(),
            dispute_id: dispute_id.clone(),
        })?;
    write_json(out, dispute)?;
    Ok(0)
}
