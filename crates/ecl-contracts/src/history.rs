//! # Party History
//!
//! Summary counters over every contract a party appears in, computed by a
//! full ledger scan. A party with no contracts gets all-zero counters, not
//! an error; check [`HistoryAggregate::is_empty`].

use serde::{Deserialize, Serialize};

use ecl_core::Clock;
use ecl_ledger::Ledger;
use ecl_state::{ContractStatus, DisputeStatus};

use crate::error::ContractError;
use crate::model::Contract;
use crate::registry::ContractRegistry;

/// Which side of a contract a party is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    Employee,
    Employer,
}

impl PartyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Employer => "Employer",
        }
    }

    /// Whether `contract` names `party_id` in this role.
    pub fn matches(&self, contract: &Contract, party_id: &str) -> bool {
        let id = match self {
            Self::Employee => &contract.employee.id,
            Self::Employer => &contract.employer.id,
        };
        id.as_str() == party_id
    }
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters describing a party's contracts and the disputes on them.
///
/// Serialized as a flat record of decimal strings:
/// `{"Contracts":"1","TerminatedContracts":"0",...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryAggregate {
    #[serde(with = "decimal")]
    pub contracts: u64,
    /// Anything not Active or Pending.
    #[serde(with = "decimal")]
    pub terminated_contracts: u64,
    #[serde(with = "decimal")]
    pub active_contracts: u64,
    #[serde(with = "decimal")]
    pub pending_contracts: u64,
    #[serde(with = "decimal")]
    pub disputes: u64,
    #[serde(with = "decimal")]
    pub open_disputes: u64,
    #[serde(with = "decimal")]
    pub closed_disputes: u64,
}

impl HistoryAggregate {
    pub fn from_contracts<'a>(contracts: impl IntoIterator<Item = &'a Contract>) -> Self {
        let mut agg = Self::default();
        for contract in contracts {
            agg.contracts += 1;
            match contract.status {
                ContractStatus::Active => agg.active_contracts += 1,
                ContractStatus::Pending => agg.pending_contracts += 1,
                ContractStatus::Terminated => agg.terminated_contracts += 1,
            }
            for dispute in &contract.disputes {
                agg.disputes += 1;
                match dispute.status {
                    DisputeStatus::Active => agg.open_disputes += 1,
                    DisputeStatus::Closed => agg.closed_disputes += 1,
                }
            }
        }
        agg
    }

    /// True when the party has no contracts at all.
    pub fn is_empty(&self) -> bool {
        self.contracts == 0
    }
}

impl<L: Ledger, C: Clock> ContractRegistry<L, C> {
    /// Every contract naming `party_id` in `role`, in ledger scan order.
    pub fn contracts_for(
        &self,
        party_id: &str,
        role: PartyRole,
    ) -> Result<Vec<Contract>, ContractError> {
        let mut contracts = self.get_all()?;
        contracts.retain(|c| role.matches(c, party_id));
        Ok(contracts)
    }

    /// Counters over every contract naming `party_id` in `role`.
    ///
    /// # Errors
    ///
    /// Fails if the ledger cannot be scanned or any record cannot be
    /// decoded.
    pub fn view_history(
        &self,
        party_id: &str,
        role: PartyRole,
    ) -> Result<HistoryAggregate, ContractError> {
        let contracts = self.contracts_for(party_id, role)?;
        let aggregate = HistoryAggregate::from_contracts(&contracts);
        tracing::debug!(party_id, %role, contracts = aggregate.contracts, "history computed");
        Ok(aggregate)
    }

    pub fn view_employee_history(
        &self,
        employee_id: &str,
    ) -> Result<HistoryAggregate, ContractError> {
        self.view_history(employee_id, PartyRole::Employee)
    }

    pub fn view_employer_history(
        &self,
        employer_id: &str,
    ) -> Result<HistoryAggregate, ContractError> {
        self.view_history(employer_id, PartyRole::Employer)
    }
}

/// Counters travel as decimal strings.
mod decimal {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
