//! # Contract Submissions
//!
//! Decoding of contract candidates as clients send them: a JSON object
//! using the record's field names, often written with single quotes so it
//! can be embedded in a shell argument.
//!
//! A submission has no `Status` and no `Disputes`. If the client includes
//! them they are ignored; the registry decides both. Absent fields decode
//! as empty or zero and are then rejected by validated construction, so
//! the caller learns which field is missing instead of getting a parse error.

use serde::Deserialize;

use ecl_core::{ContractId, ValidationError};

use crate::model::{Benefits, Contract, Employee, Employer, Job};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Submission {
    #[serde(rename = "ID")]
    id: ContractId,
    #[serde(rename = "Notes")]
    notes: String,
    #[serde(rename = "Start date")]
    start_date: String,
    #[serde(rename = "End date")]
    end_date: String,
    #[serde(rename = "Extension details")]
    extension_details: String,
    #[serde(rename = "Employer")]
    employer: Employer,
    #[serde(rename = "Employee")]
    employee: Employee,
    #[serde(rename = "Job")]
    job: Job,
    #[serde(rename = "Benefits")]
    benefits: Benefits,
}

impl From<Submission> for Contract {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            notes: s.notes,
            start_date: s.start_date,
            end_date: s.end_date,
            extension_details: s.extension_details,
            employer: s.employer,
            employee: s.employee,
            job: s.job,
            benefits: s.benefits,
            ..Contract::default()
        }
    }
}

impl Contract {
    /// Decode a client submission. Single quotes are read as double quotes.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MalformedSubmission`] if the text is not a JSON
    /// object of the expected shape.
    pub fn from_submission(text: &str) -> Result<Self, ValidationError> {
        let normalized = text.replace('\'', "\"");
        serde_json::from_str::<Submission>(&normalized)
            .map(Contract::from)
            .map_err(|e| ValidationError::MalformedSubmission(e.to_string()))
    }
}
