//! # Dispute Operations
//!
//! Disputes are stored inside their contract record, so every operation
//! here is a read-modify-write of the whole contract.
//!
//! ```text
//! issue ──▶ Active ──close──▶ Closed
//!             │  ▲
//!   update /  └──┘  respond
//! ```
//!
//! Dispute identifiers are the decimal position of the dispute in the
//! contract's list at the moment it was issued ("0", "1", ...). Disputes
//! are never removed, so positions stay unique within a contract. Response
//! identifiers follow the same rule inside their dispute.
//!
//! The status of the contract itself is not consulted: disputes can be
//! raised against Pending, Active or Terminated contracts alike.

use ecl_core::{Clock, DisputeId, ResponseId, ValidationError};
use ecl_ledger::Ledger;

use crate::error::ContractError;
use crate::model::{Contract, Dispute};
use crate::registry::{log_rejection, ContractRegistry};

impl<L: Ledger, C: Clock> ContractRegistry<L, C> {
    /// Append a new Active dispute and return its identifier.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `content` is empty.
    /// - `NotFound` if the contract does not exist.
    pub fn issue_dispute(&self, id: &str, content: &str) -> Result<DisputeId, ContractError> {
        self.issue_dispute_inner(id, content)
            .map_err(|e| log_rejection("issue dispute", id, e))
    }

    fn issue_dispute_inner(&self, id: &str, content: &str) -> Result<DisputeId, ContractError> {
        if content.is_empty() {
            return Err(ValidationError::empty("Dispute", "Content").into());
        }
        let mut contract = self.load(id)?;
        let dispute_id = DisputeId::from_position(contract.disputes.len());
        let dispute = Dispute::open(dispute_id.clone(), content, self.today())?;
        contract.disputes.push(dispute);

        self.store(&contract)?;
        tracing::info!(contract_id = %contract.id, %dispute_id, "dispute issued");
        Ok(dispute_id)
    }

    /// Replace the content of an Active dispute.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `content` is empty.
    /// - `NotFound` if the contract or dispute does not exist.
    /// - `StateConflict` if the dispute is Closed.
    pub fn update_dispute(
        &self,
        id: &str,
        dispute_id: &str,
        content: &str,
    ) -> Result<(), ContractError> {
        let today = self.today();
        self.modify_dispute(id, dispute_id, "update dispute", |dispute| {
            dispute.revise(content, today)
        })
    }

    /// Active → Closed.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contract or dispute does not exist.
    /// - `StateConflict` if the dispute is already Closed.
    pub fn close_dispute(&self, id: &str, dispute_id: &str) -> Result<(), ContractError> {
        let today = self.today();
        self.modify_dispute(id, dispute_id, "close dispute", |dispute| {
            dispute.close(today)
        })
    }

    /// Append a response to an Active dispute and return its identifier.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `content` is empty.
    /// - `NotFound` if the contract or dispute does not exist.
    /// - `StateConflict` if the dispute is Closed.
    pub fn respond_to_dispute(
        &self,
        id: &str,
        dispute_id: &str,
        content: &str,
    ) -> Result<ResponseId, ContractError> {
        let today = self.today();
        self.modify_dispute(id, dispute_id, "respond to dispute", |dispute| {
            dispute.respond(content, today)
        })
    }

    /// Load the contract, apply `f` to one of its disputes and store the
    /// result. Nothing is written if `f` fails.
    fn modify_dispute<T>(
        &self,
        id: &str,
        dispute_id: &str,
        op: &'static str,
        f: impl FnOnce(&mut Dispute) -> Result<T, ContractError>,
    ) -> Result<T, ContractError> {
        self.modify_dispute_inner(id, dispute_id, op, f)
            .map_err(|e| log_rejection(op, id, e))
    }

    fn modify_dispute_inner<T>(
        &self,
        id: &str,
        dispute_id: &str,
        op: &'static str,
        f: impl FnOnce(&mut Dispute) -> Result<T, ContractError>,
    ) -> Result<T, ContractError> {
        let mut contract = self.load(id)?;
        let dispute_id = DisputeId::new(dispute_id);
        let dispute = find_dispute(&mut contract, &dispute_id)?;
        let out = f(&mut *dispute)?;
        let status = dispute.status;

        self.store(&contract)?;
        tracing::info!(op, contract_id = %contract.id, %dispute_id, %status, "dispute modified");
        Ok(out)
    }
}

fn find_dispute<'a>(
    contract: &'a mut Contract,
    dispute_id: &DisputeId,
) -> Result<&'a mut Dispute, ContractError> {
    let contract_id = contract.id.clone();
    contract
        .dispute_mut(dispute_id)
        .ok_or_else(|| ContractError::DisputeNotFound {
            contract_id,
            dispute_id: dispute_id.clone(),
        })
}
