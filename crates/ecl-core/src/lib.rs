//! # ecl-core — Foundational Types for the Employment Contract Ledger
//!
//! This crate is the leaf of the workspace. It defines the primitives every
//! other crate builds on and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `ContractId`, `PartyId`,
//!    `DisputeId`, `ResponseId`. A dispute identifier cannot be passed where
//!    a contract identifier is expected.
//!
//! 2. **One date format.** `ContractDate` parses and renders `MM/DD/YYYY`
//!    and nothing else. Every date comparison in the ledger goes through it.
//!
//! 3. **Injected time.** "Today" comes from a [`Clock`], never from a direct
//!    call to the system time inside business logic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ecl-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{DateError, ValidationError};
pub use identity::{ContractId, DisputeId, PartyId, ResponseId};
pub use temporal::{Clock, ContractDate, FixedClock, SystemClock, DATE_FORMAT};
