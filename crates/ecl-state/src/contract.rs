//! # Contract Lifecycle
//!
//! ## States
//!
//! ```text
//! Pending ──approve()──▶ Active ──terminate()──▶ Terminated
//!    │                                              ▲
//!    └──────────────────terminate()─────────────────┘
//! ```
//!
//! `Terminated` is terminal. A contract may be extended only while
//! `Active` and updated in any non-terminal state.
//!
//! The direct `Pending → Terminated` edge lets a party withdraw a contract
//! that was never approved.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

const SUBJECT: &str = "contract";

/// The lifecycle status of a contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Created, awaiting approval.
    #[default]
    Pending,
    /// Approved and in force.
    Active,
    /// Ended (terminal).
    Terminated,
}

impl ContractStatus {
    /// The status name as stored in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Terminated => "Terminated",
        }
    }

    /// The status stored under `name`, if it is one of the three known ones.
    pub fn parse(name: &str) -> Option<Self> {
        [Self::Pending, Self::Active, Self::Terminated]
            .into_iter()
            .find(|status| status.as_str() == name)
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Valid target statuses from this status.
    pub fn valid_transitions(&self) -> &'static [ContractStatus] {
        match self {
            Self::Pending => &[Self::Active, Self::Terminated],
            Self::Active => &[Self::Terminated],
            Self::Terminated => &[],
        }
    }

    /// Pending → Active.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidTransition`] if the contract is already
    /// Active or Terminated.
    pub fn approve(self) -> Result<Self, TransitionError> {
        self.transition_to(Self::Active)
    }

    /// Pending or Active → Terminated.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidTransition`] if already Terminated.
    pub fn terminate(self) -> Result<Self, TransitionError> {
        self.transition_to(Self::Terminated)
    }

    /// Extensions are only accepted while Active.
    pub fn require_extendable(self) -> Result<(), TransitionError> {
        match self {
            Self::Active => Ok(()),
            _ => Err(self.not_permitted("extend")),
        }
    }

    /// Updates are accepted in every non-terminal status.
    pub fn require_updatable(self) -> Result<(), TransitionError> {
        if self.is_terminal() {
            return Err(self.not_permitted("update"));
        }
        Ok(())
    }

    fn transition_to(self, target: Self) -> Result<Self, TransitionError> {
        if !self.valid_transitions().contains(&target) {
            return Err(TransitionError::InvalidTransition {
                subject: SUBJECT,
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        Ok(target)
    }

    fn not_permitted(self, action: &'static str) -> TransitionError {
        TransitionError::NotPermitted {
            subject: SUBJECT,
            state: self.to_string(),
            action,
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
