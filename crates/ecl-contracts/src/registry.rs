//! # Contract Registry
//!
//! Validates and mutates contract records in a [`Ledger`], keyed by
//! contract ID.
//!
//! Every mutating operation follows the same shape: read the current
//! record, validate, compute the complete new record, write it with a
//! single `put`. Validation always finishes before the write, so a
//! rejected operation leaves the stored record untouched. No state is
//! kept between calls; the registry can be rebuilt around the same ledger
//! at any time.
//!
//! ## Operations
//!
//! | Operation   | Requires                         | Effect                       |
//! |-------------|----------------------------------|------------------------------|
//! | `create`    | ID unused, valid terms and dates | stored as Pending, no disputes |
//! | `update`    | exists, not Terminated           | terms replaced, status and disputes kept |
//! | `approve`   | Pending                          | Active                       |
//! | `terminate` | not Terminated                   | Terminated                   |
//! | `extend`    | Active, inside extension window  | `End date` moved later       |
//!
//! Dispute operations live in `dispute.rs`, history in `history.rs`.

use ecl_core::{Clock, ContractDate, ContractId, SystemClock, ValidationError};
use ecl_ledger::Ledger;
use ecl_state::{ContractStatus, TransitionError};

use crate::codec;
use crate::error::{ContractError, ErrorKind, TemporalViolation};
use crate::model::{Contract, Terms};
use crate::policy::RegistryPolicy;

/// The contract registry over a ledger `L` and a clock `C`.
#[derive(Debug, Clone)]
pub struct ContractRegistry<L, C = SystemClock> {
    ledger: L,
    clock: C,
    policy: RegistryPolicy,
}

impl<L: Ledger> ContractRegistry<L, SystemClock> {
    /// A registry reading today's date from the system clock.
    pub fn new(ledger: L) -> Self {
        Self::with_clock(ledger, SystemClock)
    }
}

impl<L: Ledger, C: Clock> ContractRegistry<L, C> {
    /// A registry reading today's date from `clock`.
    pub fn with_clock(ledger: L, clock: C) -> Self {
        Self {
            ledger,
            clock,
            policy: RegistryPolicy::default(),
        }
    }

    /// Replace the registry policy.
    pub fn with_policy(mut self, policy: RegistryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn policy(&self) -> &RegistryPolicy {
        &self.policy
    }

    pub(crate) fn today(&self) -> ContractDate {
        self.clock.today()
    }

    // ── Contract operations ────────────────────────────────────────────

    /// Store a new contract.
    ///
    /// The candidate's `Status` and `Disputes` are discarded: every new
    /// contract is Pending with no disputes.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the ID is taken.
    /// - `InvalidInput` for an empty ID, any invalid substructure, or an
    ///   unparseable start or end date.
    /// - `TemporalConstraint` if the end date is before today.
    pub fn create(&self, candidate: Contract) -> Result<(), ContractError> {
        let key = candidate.id.as_str().to_string();
        self.create_inner(candidate)
            .map_err(|e| log_rejection("create", &key, e))
    }

    fn create_inner(&self, candidate: Contract) -> Result<(), ContractError> {
        let id = ContractId::new(candidate.id.as_str())?;
        if self.ledger.contains(id.as_str())? {
            return Err(ContractError::AlreadyExists(id));
        }

        let terms = candidate.validated_terms()?;
        parse_date_field("Start date", &candidate.start_date)?;
        let end_date = parse_date_field("End date", &candidate.end_date)?;
        let today = self.today();
        if end_date < today {
            return Err(TemporalViolation::EndDateInPast { end_date, today }.into());
        }

        let record = Contract {
            id,
            status: ContractStatus::Pending,
            disputes: Vec::new(),
            ..candidate
        }
        .with_terms(terms);
        self.store(&record)?;
        tracing::info!(contract_id = %record.id, status = %record.status, "contract created");
        Ok(())
    }

    /// Fetch a contract.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record exists or the stored value cannot be decoded.
    pub fn read(&self, id: &str) -> Result<Contract, ContractError> {
        self.load(id)
    }

    /// Whether a record exists under `id`. The record is not decoded.
    pub fn exists(&self, id: &str) -> Result<bool, ContractError> {
        Ok(self.ledger.contains(id)?)
    }

    /// Replace the terms and free-form fields of an existing contract.
    ///
    /// Dates are carried over without re-validation. `Status` and
    /// `Disputes` always come from the stored record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the contract does not exist.
    /// - `StateConflict` if it is Terminated.
    /// - `InvalidInput` if any substructure fails validation.
    pub fn update(&self, candidate: Contract) -> Result<(), ContractError> {
        let key = candidate.id.as_str().to_string();
        self.update_inner(candidate)
            .map_err(|e| log_rejection("update", &key, e))
    }

    fn update_inner(&self, candidate: Contract) -> Result<(), ContractError> {
        let existing = self.load(candidate.id.as_str())?;
        existing.status.require_updatable()?;
        let terms = candidate.validated_terms()?;

        let record = merge_for_update(existing, candidate, terms);
        self.store(&record)?;
        tracing::info!(contract_id = %record.id, "contract updated");
        Ok(())
    }

    /// Pending → Active.
    ///
    /// # Errors
    ///
    /// `StateConflict` naming the current status if not Pending.
    pub fn approve(&self, id: &str) -> Result<(), ContractError> {
        self.change_status(id, "approve", ContractStatus::approve)
    }

    /// Pending or Active → Terminated.
    ///
    /// # Errors
    ///
    /// `StateConflict` if already Terminated.
    pub fn terminate(&self, id: &str) -> Result<(), ContractError> {
        self.change_status(id, "terminate", ContractStatus::terminate)
    }

    /// Move the end date of an Active contract later.
    ///
    /// Allowed only when the current end date is within the policy's
    /// extension window of today. The new date must be after today and not
    /// before the current end date.
    ///
    /// # Errors
    ///
    /// - `StateConflict` if the contract is not Active.
    /// - `InvalidInput` if either date does not parse.
    /// - `TemporalConstraint` distinguishing a date in the past, a shortened
    ///   term, and a request made before the window opens.
    pub fn extend(&self, id: &str, new_end_date: &str) -> Result<(), ContractError> {
        self.extend_inner(id, new_end_date)
            .map_err(|e| log_rejection("extend", id, e))
    }

    fn extend_inner(&self, id: &str, new_end_date: &str) -> Result<(), ContractError> {
        let mut contract = self.load(id)?;
        contract.status.require_extendable()?;
        let requested = parse_date_field("End date", new_end_date)?;
        let end_date = parse_date_field("End date", &contract.end_date)?;
        check_extension(
            self.today(),
            end_date,
            requested,
            self.policy.extension_window_months,
        )?;

        contract.end_date = requested.format();
        self.store(&contract)?;
        tracing::info!(contract_id = %contract.id, end_date = %requested, "contract extended");
        Ok(())
    }

    /// Every contract in the ledger, in ledger scan order. A record with an
    /// unrecognised status is returned as Terminated.
    ///
    /// # Errors
    ///
    /// Fails on the first record that cannot be decoded.
    pub fn get_all(&self) -> Result<Vec<Contract>, ContractError> {
        self.ledger
            .scan_all()?
            .into_iter()
            .map(|(key, bytes)| {
                codec::decode_scanned(&key, &bytes).map_err(|e| {
                    tracing::warn!(key = %key, error = %e, "undecodable record in ledger scan");
                    e
                })
            })
            .collect()
    }

    // ── Internals ──────────────────────────────────────────────────────

    pub(crate) fn load(&self, id: &str) -> Result<Contract, ContractError> {
        match self.ledger.get(id)? {
            Some(bytes) => codec::decode(id, &bytes),
            None => Err(ContractError::ContractNotFound(id.to_string())),
        }
    }

    pub(crate) fn store(&self, contract: &Contract) -> Result<(), ContractError> {
        let bytes = codec::encode(contract)?;
        self.ledger.put(contract.id.as_str(), &bytes)?;
        Ok(())
    }

    fn change_status(
        &self,
        id: &str,
        op: &'static str,
        transition: fn(ContractStatus) -> Result<ContractStatus, TransitionError>,
    ) -> Result<(), ContractError> {
        self.change_status_inner(id, op, transition)
            .map_err(|e| log_rejection(op, id, e))
    }

    fn change_status_inner(
        &self,
        id: &str,
        op: &'static str,
        transition: fn(ContractStatus) -> Result<ContractStatus, TransitionError>,
    ) -> Result<(), ContractError> {
        let mut contract = self.load(id)?;
        let from = contract.status;
        contract.status = transition(from)?;
        self.store(&contract)?;
        tracing::info!(op, contract_id = %contract.id, %from, to = %contract.status, "contract status changed");
        Ok(())
    }
}

/// Build the record written by `update`: the candidate's free-form fields
/// and freshly validated terms, with status and disputes copied forward
/// from the stored record.
fn merge_for_update(existing: Contract, candidate: Contract, terms: Terms) -> Contract {
    Contract {
        id: existing.id,
        status: existing.status,
        disputes: existing.disputes,
        notes: candidate.notes,
        start_date: candidate.start_date,
        end_date: candidate.end_date,
        extension_details: candidate.extension_details,
        ..Contract::default()
    }
    .with_terms(terms)
}

/// Date rules for an extension, checked in order: the new date must be
/// after today, must not shorten the term, and the current end date must
/// fall on or before `today + window_months`.
pub fn check_extension(
    today: ContractDate,
    end_date: ContractDate,
    requested: ContractDate,
    window_months: u32,
) -> Result<(), TemporalViolation> {
    if requested <= today {
        return Err(TemporalViolation::ExtensionInPast { requested, today });
    }
    if requested < end_date {
        return Err(TemporalViolation::ExtensionShortensTerm {
            requested,
            end_date,
        });
    }
    let window_open = today
        .add_months(window_months)
        .map_or(true, |limit| limit >= end_date);
    if !window_open {
        return Err(TemporalViolation::OutsideExtensionWindow {
            end_date,
            window_months,
        });
    }
    Ok(())
}

pub(crate) fn parse_date_field(
    field: &'static str,
    value: &str,
) -> Result<ContractDate, ValidationError> {
    ContractDate::parse(value).map_err(|source| ValidationError::Date { field, source })
}

/// Log a rejected operation and hand the error back.
pub(crate) fn log_rejection(op: &'static str, id: &str, err: ContractError) -> ContractError {
    if err.kind() == ErrorKind::Ledger {
        tracing::warn!(op, contract_id = id, error = %err, "ledger failure");
    } else {
        tracing::debug!(op, contract_id = id, error = %err, "operation rejected");
    }
    err
}
