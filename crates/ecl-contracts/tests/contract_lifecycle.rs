//! End-to-end lifecycle of a contract through the public registry API.

use ecl_contracts::{
    Contract, ContractError, ContractRegistry, ErrorKind, HistoryAggregate, PartyRole,
    TemporalViolation,
};
use ecl_core::{ContractDate, FixedClock};
use ecl_ledger::{InMemoryLedger, Ledger, LedgerError};
use ecl_state::{ContractStatus, DisputeStatus};
use proptest::prelude::*;

const SUBMISSION: &str = "{'ID':'C1','Notes':'probation 3 months',\
    'Start date':'11/01/2026','End date':'10/17/2027','Extension details':'renewable',\
    'Employer':{'ID':'ER-7','Name':'Acme Ltd','Employer address and contact details':'1 Main St','Country':'AE'},\
    'Employee':{'ID':'EE-42','Name':'Dana Reyes','Employee address and contact details':'dana@example.com','Country':'PH'},\
    'Job':{'Position':'Site engineer','Level':'Senior','Description':'Runs the site'},\
    'Benefits':{'Currency':'AED','Salary':12000,'Annual increase':'5%','Annual leave':'30 days',\
    'Housing':2500,'Allowances':400,'Other benefits':'Medical'}}";

fn today() -> ContractDate {
    ContractDate::parse("10/17/2026").unwrap()
}

fn registry() -> ContractRegistry<InMemoryLedger, FixedClock> {
    ContractRegistry::with_clock(InMemoryLedger::new(), FixedClock(today()))
}

fn submission(id: &str) -> Contract {
    let mut c = Contract::from_submission(SUBMISSION).unwrap();
    c.id = ecl_core::ContractId::new(id).unwrap();
    c
}

#[test]
fn full_lifecycle_scenario() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    assert_eq!(reg.read("C1").unwrap().status, ContractStatus::Pending);

    reg.approve("C1").unwrap();
    assert_eq!(reg.read("C1").unwrap().status, ContractStatus::Active);

    let dispute_id = reg.issue_dispute("C1", "late payment").unwrap();
    assert_eq!(dispute_id.as_str(), "0");
    let stored = reg.read("C1").unwrap();
    assert_eq!(stored.disputes[0].status, DisputeStatus::Active);
    assert_eq!(stored.disputes[0].last_updated_date, today());

    let response_id = reg.respond_to_dispute("C1", "0", "resolved").unwrap();
    assert_eq!(response_id.as_str(), "0");
    assert_eq!(reg.read("C1").unwrap().disputes[0].responses[0].content, "resolved");

    reg.close_dispute("C1", "0").unwrap();
    assert_eq!(
        reg.read("C1").unwrap().disputes[0].status,
        DisputeStatus::Closed
    );

    let history = reg.view_history("EE-42", PartyRole::Employee).unwrap();
    assert_eq!(history.contracts, 1);
    assert_eq!(history.active_contracts, 1);
    assert_eq!(history.disputes, 1);
    assert_eq!(history.closed_disputes, 1);

    let json = serde_json::to_value(history).unwrap();
    assert_eq!(json["Contracts"], "1");
    assert_eq!(json["ActiveContracts"], "1");
    assert_eq!(json["Disputes"], "1");
    assert_eq!(json["ClosedDisputes"], "1");
}

#[test]
fn housing_and_allowances_survive_storage() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    let stored = reg.read("C1").unwrap();
    assert_eq!(stored.benefits.housing, 2500);
    assert_eq!(stored.benefits.allowances, 400);
}

#[test]
fn duplicate_create_is_rejected() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    let err = reg.create(submission("C1")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert!(reg.exists("C1").unwrap());
    assert_eq!(reg.get_all().unwrap().len(), 1);
}

#[test]
fn status_transitions_are_enforced() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    reg.approve("C1").unwrap();
    assert_eq!(reg.approve("C1").unwrap_err().kind(), ErrorKind::StateConflict);

    reg.terminate("C1").unwrap();
    assert_eq!(reg.approve("C1").unwrap_err().kind(), ErrorKind::StateConflict);
    assert_eq!(
        reg.update(submission("C1")).unwrap_err().kind(),
        ErrorKind::StateConflict
    );
    assert_eq!(reg.read("C1").unwrap().status, ContractStatus::Terminated);
}

#[test]
fn extension_window() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    reg.approve("C1").unwrap();

    // Ends 10/17/2027, a year out: too early to extend.
    let err = reg.extend("C1", "10/17/2028").unwrap_err();
    assert!(matches!(
        err,
        ContractError::Temporal(TemporalViolation::OutsideExtensionWindow { .. })
    ));

    let mut short = submission("C2");
    short.end_date = "12/15/2026".to_string();
    reg.create(short).unwrap();
    reg.approve("C2").unwrap();
    reg.extend("C2", "12/15/2027").unwrap();
    assert_eq!(reg.read("C2").unwrap().end_date, "12/15/2027");

    let err = reg.extend("C2", "06/01/2027").unwrap_err();
    assert!(matches!(
        err,
        ContractError::Temporal(TemporalViolation::ExtensionShortensTerm { .. })
    ));
}

#[test]
fn history_by_role() {
    let reg = registry();
    reg.create(submission("C1")).unwrap();
    reg.create(submission("C2")).unwrap();
    reg.approve("C2").unwrap();
    reg.terminate("C1").unwrap();

    let employer = reg.view_employer_history("ER-7").unwrap();
    assert_eq!(employer.contracts, 2);
    assert_eq!(employer.active_contracts, 1);
    assert_eq!(employer.terminated_contracts, 1);

    assert!(reg.view_employer_history("EE-42").unwrap().is_empty());
    assert_eq!(
        reg.view_employee_history("nobody").unwrap(),
        HistoryAggregate::default()
    );
    assert_eq!(reg.contracts_for("EE-42", PartyRole::Employee).unwrap().len(), 2);
}

/// A ledger whose every call fails.
struct FailingLedger;

impl Ledger for FailingLedger {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Err(LedgerError::Unavailable("peer unreachable".to_string()))
    }

    fn put(&self, _key: &str, _value: &[u8]) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("peer unreachable".to_string()))
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        Err(LedgerError::Unavailable("peer unreachable".to_string()))
    }
}

#[test]
fn ledger_failures_are_not_absence() {
    let reg = ContractRegistry::with_clock(FailingLedger, FixedClock(today()));
    assert_eq!(reg.read("C1").unwrap_err().kind(), ErrorKind::Ledger);
    assert_eq!(reg.exists("C1").unwrap_err().kind(), ErrorKind::Ledger);
    assert_eq!(
        reg.create(submission("C1")).unwrap_err().kind(),
        ErrorKind::Ledger
    );
    assert_eq!(reg.get_all().unwrap_err().kind(), ErrorKind::Ledger);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn dispute_ids_are_dense_positions(n in 1usize..12, closed in 0usize..12) {
        let reg = registry();
        reg.create(submission("C1")).unwrap();
        for i in 0..n {
            let id = reg.issue_dispute("C1", &format!("dispute {i}")).unwrap();
            prop_assert_eq!(id.as_str(), i.to_string());
        }
        if closed < n {
            reg.close_dispute("C1", &closed.to_string()).unwrap();
        }
        let next = reg.issue_dispute("C1", "one more").unwrap();
        prop_assert_eq!(next.as_str(), n.to_string());

        let history = reg.view_employee_history("EE-42").unwrap();
        prop_assert_eq!(history.disputes, n as u64 + 1);
        prop_assert_eq!(history.open_disputes + history.closed_disputes, history.disputes);
    }
}
