//! # ecl-contracts — Employment Contract Registry
//!
//! The domain core of the ledger:
//!
//! - **Records** (`model.rs`): `Contract` and its nested `Employer`,
//!   `Employee`, `Job`, `Benefits`, `Dispute` and `Response`, with
//!   validated construction.
//!
//! - **Registry** (`registry.rs`): create, read, update, approve,
//!   terminate, extend and list contracts over a [`Ledger`].
//!
//! - **Disputes** (`dispute.rs`): issue, update, close and respond to the
//!   disputes stored inside a contract.
//!
//! - **History** (`history.rs`): per-party counters over all contracts.
//!
//! - **Submissions** (`submission.rs`): decoding of client-supplied
//!   contract candidates.
//!
//! ## Crate Policy
//!
//! - Depends on `ecl-core`, `ecl-state` and `ecl-ledger` internally.
//! - Each operation performs at most one ledger write, after all
//!   validation has passed.
//! - "Today" always comes from the registry's [`Clock`].
//!
//! [`Ledger`]: ecl_ledger::Ledger
//! [`Clock`]: ecl_core::Clock

pub mod codec;
pub mod dispute;
pub mod error;
pub mod history;
pub mod model;
pub mod policy;
pub mod registry;
pub mod submission;

pub use error::{ContractError, ErrorKind, TemporalViolation};
pub use history::{HistoryAggregate, PartyRole};
pub use model::{Benefits, Contract, Dispute, Employee, Employer, Job, Response, Terms};
pub use policy::{RegistryPolicy, DEFAULT_EXTENSION_WINDOW_MONTHS};
pub use registry::{check_extension, ContractRegistry};
