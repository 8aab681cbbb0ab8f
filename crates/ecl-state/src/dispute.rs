//! # Dispute Lifecycle
//!
//! ```text
//! Active ──close()──▶ Closed
//! ```
//!
//! While Active a dispute's content may be replaced and responses may be
//! appended. Closed is terminal.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

const SUBJECT: &str = "dispute";

/// The lifecycle status of a dispute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisputeStatus {
    /// Open for updates and responses.
    #[default]
    Active,
    /// Resolved (terminal).
    Closed,
}

impl DisputeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Active → Closed.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidTransition`] if already Closed.
    pub fn close(self) -> Result<Self, TransitionError> {
        match self {
            Self::Active => Ok(Self::Closed),
            Self::Closed => Err(TransitionError::InvalidTransition {
                subject: SUBJECT,
                from: self.to_string(),
                to: Self::Closed.to_string(),
            }),
        }
    }

    /// Guard for content updates and responses.
    pub fn require_open(self, action: &'static str) -> Result<(), TransitionError> {
        match self {
            Self::Active => Ok(()),
            Self::Closed => Err(TransitionError::NotPermitted {
                subject: SUBJECT,
                state: self.to_string(),
                action,
            }),
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_once() {
        let closed = DisputeStatus::Active.close().unwrap();
        assert_eq!(closed, DisputeStatus::Closed);
        assert!(closed.is_terminal());
        assert!(closed.close().is_err());
    }

    #[test]
    fn closed_dispute_rejects_updates() {
        assert!(DisputeStatus::Active.require_open("respond").is_ok());
        let err = DisputeStatus::Closed.require_open("respond").unwrap_err();
        assert_eq!(err.to_string(), "cannot respond: dispute is Closed");
    }

    #[test]
    fn serializes_as_plain_name() {
        assert_eq!(
            serde_json::to_string(&DisputeStatus::Closed).unwrap(),
            "\"Closed\""
        );
    }
}
