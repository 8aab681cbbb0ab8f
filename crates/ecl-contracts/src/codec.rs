//! Record encoding for the ledger: JSON with the verbatim field names of
//! [`Contract`].

use ecl_state::ContractStatus;

use crate::error::ContractError;
use crate::model::Contract;

/// Encode a contract for storage.
pub fn encode(contract: &Contract) -> Result<Vec<u8>, ContractError> {
    Ok(serde_json::to_vec(contract)?)
}

/// Decode the value stored under `key`.
///
/// # Errors
///
/// [`ContractError::Corrupt`] if the bytes are not a contract record.
pub fn decode(key: &str, bytes: &[u8]) -> Result<Contract, ContractError> {
    serde_json::from_slice(bytes).map_err(|e| ContractError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a record met during a full ledger scan.
///
/// A record whose `Status` is not a known status is read as Terminated, so
/// one such record does not make every scan fail. Any other defect is
/// reported as by [`decode`].
pub fn decode_scanned(key: &str, bytes: &[u8]) -> Result<Contract, ContractError> {
    let strict = match decode(key, bytes) {
        Ok(contract) => return Ok(contract),
        Err(e) => e,
    };
    let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(bytes) else {
        return Err(strict);
    };
    let unknown = match value.get("Status").and_then(|s| s.as_str()) {
        Some(status) if ContractStatus::parse(status).is_none() => status.to_string(),
        _ => return Err(strict),
    };
    tracing::warn!(key, status = %unknown, "unrecognised contract status counted as Terminated");
    value["Status"] = ContractStatus::Terminated.as_str().into();
    serde_json::from_value(value).map_err(|_| strict)
}
