//! # Transition Errors

use thiserror::Error;

/// A lifecycle guard rejected an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested status change is not an edge of the lifecycle.
    #[error("invalid {subject} transition: {from} -> {to}")]
    InvalidTransition {
        /// `contract` or `dispute`.
        subject: &'static str,
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },

    /// The operation does not change status but is not allowed in the current one.
    #[error("cannot {action}: {subject} is {state}")]
    NotPermitted {
        /// `contract` or `dispute`.
        subject: &'static str,
        /// Current status.
        state: String,
        /// What was attempted (e.g. `extend`).
        action: &'static str,
    },
}
