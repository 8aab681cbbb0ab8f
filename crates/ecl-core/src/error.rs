//! # Error Types — Field-Level Validation
//!
//! Errors raised while constructing ledger values from caller input. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Higher crates wrap these into their own error enums; nothing here knows
//! about stores or lifecycle states.

use thiserror::Error;

/// A calendar date string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The string is not of the shape `MM/DD/YYYY`.
    #[error("date {value:?} is not in MM/DD/YYYY format")]
    Malformed {
        /// The rejected input.
        value: String,
    },

    /// The string has the right shape but names no calendar day (e.g. `02/30/2027`).
    #[error("date {value:?} does not exist in the calendar")]
    NonexistentDay {
        /// The rejected input.
        value: String,
    },
}

/// A candidate value failed its field-presence or range checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field was empty.
    #[error("{record}: mandatory field {field:?} is empty")]
    EmptyField {
        /// The record the field belongs to (e.g. `Employer`).
        record: &'static str,
        /// Field name as it appears in the serialized record.
        field: &'static str,
    },

    /// Salary must be nonzero.
    #[error("Benefits: salary must be nonzero")]
    ZeroSalary,

    /// A date field failed to parse.
    #[error("{field}: {source}")]
    Date {
        /// Field name as it appears in the serialized record.
        field: &'static str,
        /// The underlying parse failure.
        #[source]
        source: DateError,
    },

    /// The submitted text could not be decoded into a record.
    #[error("malformed submission: {0}")]
    MalformedSubmission(String),
}

impl ValidationError {
    /// Shorthand for [`ValidationError::EmptyField`].
    pub fn empty(record: &'static str, field: &'static str) -> Self {
        Self::EmptyField { record, field }
    }
}
