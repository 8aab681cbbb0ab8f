//! # Registry Errors
//!
//! Every operation of the registry reports failures as a [`ContractError`].
//! Callers that only need the category (for a status code or an exit code)
//! use [`ContractError::kind`].
//!
//! No error is ever retried internally, and an operation that returns an
//! error has written nothing.

use thiserror::Error;

use ecl_core::{ContractDate, ContractId, DisputeId, ValidationError};
use ecl_ledger::LedgerError;
use ecl_state::TransitionError;

/// The category of a [`ContractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing contract or dispute, or an undecodable stored record.
    NotFound,
    /// Duplicate contract ID on create.
    AlreadyExists,
    /// Empty mandatory field, zero salary, malformed date or submission.
    InvalidInput,
    /// Operation not allowed in the current status.
    StateConflict,
    /// Date ordering or extension window violation.
    TemporalConstraint,
    /// The ledger failed, as opposed to a key being absent.
    Ledger,
}

/// A date rule on creation or extension was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalViolation {
    /// A new contract must not end before today.
    #[error("end date {end_date} is in the past (today is {today})")]
    EndDateInPast {
        end_date: ContractDate,
        today: ContractDate,
    },

    /// The extended end date must be after today.
    #[error("cannot extend to {requested}: date is not after today ({today})")]
    ExtensionInPast {
        requested: ContractDate,
        today: ContractDate,
    },

    /// Extension cannot shorten the term.
    #[error("cannot extend to {requested}: would shorten the term ending {end_date}")]
    ExtensionShortensTerm {
        requested: ContractDate,
        end_date: ContractDate,
    },

    /// Extension is only allowed in the final months of the term.
    #[error(
        "not yet in extension window: term ends {end_date}, extensions open {window_months} months before the end date"
    )]
    OutsideExtensionWindow {
        end_date: ContractDate,
        window_months: u32,
    },
}

/// Errors returned by registry operations.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("contract {0} does not exist")]
    ContractNotFound(String),

    #[error("dispute {dispute_id} does not exist on contract {contract_id}")]
    DisputeNotFound {
        contract_id: ContractId,
        dispute_id: DisputeId,
    },

    /// The stored value under a key could not be decoded as a contract.
    #[error("stored record for contract {key} cannot be decoded: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("contract {0} already exists")]
    AlreadyExists(ContractId),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("state conflict: {0}")]
    StateConflict(#[from] TransitionError),

    #[error("temporal constraint: {0}")]
    Temporal(#[from] TemporalViolation),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// A record could not be encoded for storage.
    #[error("record encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ContractError {
    /// The error's category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ContractNotFound(_) | Self::DisputeNotFound { .. } | Self::Corrupt { .. } => {
                ErrorKind::NotFound
            }
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::InvalidInput(_) | Self::Ledger(LedgerError::InvalidKey { .. }) => {
                ErrorKind::InvalidInput
            }
            Self::StateConflict(_) => ErrorKind::StateConflict,
            Self::Temporal(_) => ErrorKind::TemporalConstraint,
            Self::Ledger(_) | Self::Encoding(_) => ErrorKind::Ledger,
        }
    }
}
