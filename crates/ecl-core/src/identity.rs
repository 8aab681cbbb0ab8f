//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used by the ledger. These prevent
//! accidental identifier confusion: you cannot pass a `DisputeId` where a
//! `ContractId` is expected.
//!
//! All identifiers serialize transparently as plain strings, so the stored
//! record schema is unaffected by the wrappers.
//!
//! ## Positional identifiers
//!
//! `DisputeId` and `ResponseId` are assigned by the ledger, never by the
//! caller. The identifier is the decimal position of the entry in its
//! parent collection at append time (`"0"`, `"1"`, ...). Entries are never
//! removed, so positions are never reused.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a contract; also its key in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

/// Identifier of an employer or employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(String);

/// Positional identifier of a dispute within its contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisputeId(String);

/// Positional identifier of a response within its dispute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(String);

impl ContractId {
    /// Create a contract identifier, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty("Contract", "ID"));
        }
        Ok(Self(id))
    }

    /// Whether the identifier is empty. Only possible for decoded submissions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the identifier as the ledger key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartyId {
    /// Wrap a party identifier. Emptiness is checked by the owning record.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DisputeId {
    /// The identifier for the entry appended after `existing` disputes.
    pub fn from_position(existing: usize) -> Self {
        Self(existing.to_string())
    }

    /// Wrap a caller-supplied identifier used to look up an existing dispute.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ResponseId {
    /// The identifier for the entry appended after `existing` responses.
    pub fn from_position(existing: usize) -> Self {
        Self(existing.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for DisputeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ResponseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_id_rejects_empty() {
        assert!(ContractId::new("").is_err());
        assert_eq!(ContractId::new("C1").unwrap().as_str(), "C1");
    }

    #[test]
    fn positional_ids_are_decimal() {
        assert_eq!(DisputeId::from_position(0).as_str(), "0");
        assert_eq!(DisputeId::from_position(12).as_str(), "12");
        assert_eq!(ResponseId::from_position(3).to_string(), "3");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ContractId::new("C-77").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C-77\"");
        let parsed: DisputeId = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(parsed, DisputeId::new("4"));
    }
}
