//! # ecl-state — Lifecycle State Machines
//!
//! Implements the two lifecycles of the employment contract ledger as
//! validated enums. Each transition is a method that checks the current
//! state and returns either the next state or a [`TransitionError`] naming
//! the state that blocked it.
//!
//! ## State Machines
//!
//! - **Contract** (`contract.rs`): `Pending → Active → Terminated`, with a
//!   direct `Pending → Terminated` edge. Also guards the non-transition
//!   operations that depend on status (update, extend).
//!
//! - **Dispute** (`dispute.rs`): `Active → Closed`. Content updates and
//!   responses are only accepted while Active.
//!
//! ## Design
//!
//! Statuses are stored inside serialized records and read back from the
//! ledger, so the state is never known at compile time. A validated enum
//! serializes directly with serde and keeps every guard in one `match`.

pub mod contract;
pub mod dispute;
pub mod error;

pub use contract::ContractStatus;
pub use dispute::DisputeStatus;
pub use error::TransitionError;
