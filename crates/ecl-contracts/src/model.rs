//! # Contract Records
//!
//! The stored shape of a contract and everything nested inside it.
//!
//! Field names serialize verbatim as they appear to people reading the
//! ledger (`"Start date"`, `"Employer address and contact details"`, ...).
//! They are the public record schema and must not be renamed.
//!
//! ## Validated construction
//!
//! `Employer`, `Employee`, `Job` and `Benefits` are only ever replaced as a
//! whole. Each has a `new` constructor that checks its mandatory fields and
//! returns a fresh value; [`Contract::validated_terms`] rebuilds all four
//! from a candidate record and [`Contract::with_terms`] installs them.
//! Nothing patches an individual field of a stored substructure.

use serde::{Deserialize, Deserializer, Serialize};

use ecl_core::{ContractDate, ContractId, DisputeId, PartyId, ResponseId, ValidationError};
use ecl_state::{ContractStatus, DisputeStatus};

use crate::error::ContractError;

// ── Parties ────────────────────────────────────────────────────────────

/// The employing party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employer {
    #[serde(rename = "ID")]
    pub id: PartyId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Employer address and contact details")]
    pub address_and_contact: String,
    #[serde(rename = "Country")]
    pub country: String,
}

impl Employer {
    /// Build an employer, rejecting any empty field.
    pub fn new(
        id: PartyId,
        name: impl Into<String>,
        address_and_contact: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let employer = Self {
            id,
            name: name.into(),
            address_and_contact: address_and_contact.into(),
            country: country.into(),
        };
        require("Employer", "ID", employer.id.as_str())?;
        require("Employer", "Name", &employer.name)?;
        require(
            "Employer",
            "Employer address and contact details",
            &employer.address_and_contact,
        )?;
        require("Employer", "Country", &employer.country)?;
        Ok(employer)
    }

    /// Rebuild through [`Employer::new`].
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Self::new(
            self.id.clone(),
            self.name.as_str(),
            self.address_and_contact.as_str(),
            self.country.as_str(),
        )
    }
}

/// The employed party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(rename = "ID")]
    pub id: PartyId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Employee address and contact details")]
    pub address_and_contact: String,
    #[serde(rename = "Country")]
    pub country: String,
}

impl Employee {
    /// Build an employee, rejecting any empty field.
    pub fn new(
        id: PartyId,
        name: impl Into<String>,
        address_and_contact: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let employee = Self {
            id,
            name: name.into(),
            address_and_contact: address_and_contact.into(),
            country: country.into(),
        };
        require("Employee", "ID", employee.id.as_str())?;
        require("Employee", "Name", &employee.name)?;
        require(
            "Employee",
            "Employee address and contact details",
            &employee.address_and_contact,
        )?;
        require("Employee", "Country", &employee.country)?;
        Ok(employee)
    }

    /// Rebuild through [`Employee::new`].
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Self::new(
            self.id.clone(),
            self.name.as_str(),
            self.address_and_contact.as_str(),
            self.country.as_str(),
        )
    }
}

// ── Job & Benefits ─────────────────────────────────────────────────────

/// The position being contracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Job {
    pub fn new(
        position: impl Into<String>,
        level: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let job = Self {
            position: position.into(),
            level: level.into(),
            description: description.into(),
        };
        require("Job", "Position", &job.position)?;
        require("Job", "Level", &job.level)?;
        require("Job", "Description", &job.description)?;
        Ok(job)
    }

    pub fn validated(&self) -> Result<Self, ValidationError> {
        Self::new(
            self.position.as_str(),
            self.level.as_str(),
            self.description.as_str(),
        )
    }
}

/// Compensation terms.
///
/// `Housing` and `Allowances` are optional and may be zero. Every string
/// field is mandatory and `Salary` must be nonzero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefits {
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Salary")]
    pub salary: i64,
    #[serde(rename = "Annual increase")]
    pub annual_increase: String,
    #[serde(rename = "Annual leave")]
    pub annual_leave: String,
    #[serde(rename = "Housing")]
    pub housing: i64,
    #[serde(rename = "Allowances")]
    pub allowances: i64,
    #[serde(rename = "Other benefits")]
    pub other_benefits: String,
}

impl Benefits {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        currency: impl Into<String>,
        salary: i64,
        annual_increase: impl Into<String>,
        annual_leave: impl Into<String>,
        housing: i64,
        allowances: i64,
        other_benefits: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let benefits = Self {
            currency: currency.into(),
            salary,
            annual_increase: annual_increase.into(),
            annual_leave: annual_leave.into(),
            housing,
            allowances,
            other_benefits: other_benefits.into(),
        };
        require("Benefits", "Currency", &benefits.currency)?;
        if benefits.salary == 0 {
            return Err(ValidationError::ZeroSalary);
        }
        require("Benefits", "Annual increase", &benefits.annual_increase)?;
        require("Benefits", "Annual leave", &benefits.annual_leave)?;
        require("Benefits", "Other benefits", &benefits.other_benefits)?;
        Ok(benefits)
    }

    pub fn validated(&self) -> Result<Self, ValidationError> {
        Self::new(
            self.currency.as_str(),
            self.salary,
            self.annual_increase.as_str(),
            self.annual_leave.as_str(),
            self.housing,
            self.allowances,
            self.other_benefits.as_str(),
        )
    }
}

/// The four substructures that are validated and replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terms {
    pub employer: Employer,
    pub employee: Employee,
    pub job: Job,
    pub benefits: Benefits,
}

// ── Responses & Disputes ───────────────────────────────────────────────

/// A reply appended to a dispute. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "ID")]
    pub id: ResponseId,
    #[serde(rename = "Last updated date")]
    pub last_updated_date: ContractDate,
    #[serde(rename = "Content")]
    pub content: String,
}

/// A complaint thread attached to a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispute {
    #[serde(rename = "ID")]
    pub id: DisputeId,
    #[serde(rename = "Status")]
    pub status: DisputeStatus,
    #[serde(rename = "Last updated date")]
    pub last_updated_date: ContractDate,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Responses", default, deserialize_with = "null_as_empty")]
    pub responses: Vec<Response>,
}

impl Dispute {
    /// A new Active dispute with no responses.
    pub fn open(
        id: DisputeId,
        content: impl Into<String>,
        today: ContractDate,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        require("Dispute", "Content", &content)?;
        Ok(Self {
            id,
            status: DisputeStatus::Active,
            last_updated_date: today,
            content,
            responses: Vec::new(),
        })
    }

    /// Replace the content of an Active dispute. Responses are untouched.
    pub fn revise(
        &mut self,
        content: impl Into<String>,
        today: ContractDate,
    ) -> Result<(), ContractError> {
        let content = content.into();
        require("Dispute", "Content", &content)?;
        self.status.require_open("update dispute")?;
        self.content = content;
        self.last_updated_date = today;
        Ok(())
    }

    /// Active → Closed.
    pub fn close(&mut self, today: ContractDate) -> Result<(), ContractError> {
        self.status = self.status.close()?;
        self.last_updated_date = today;
        Ok(())
    }

    /// Append a response to an Active dispute and return its identifier.
    pub fn respond(
        &mut self,
        content: impl Into<String>,
        today: ContractDate,
    ) -> Result<ResponseId, ContractError> {
        let content = content.into();
        require("Response", "Content", &content)?;
        self.status.require_open("respond to dispute")?;
        let id = ResponseId::from_position(self.responses.len());
        self.responses.push(Response {
            id: id.clone(),
            last_updated_date: today,
            content,
        });
        Ok(id)
    }
}

// ── Contract ───────────────────────────────────────────────────────────

/// An employment contract record, keyed in the ledger by its `ID`.
///
/// `Start date`, `End date`, `Notes` and `Extension details` are kept as
/// text: dates are checked as `MM/DD/YYYY` on creation and extension, and
/// updates carry them through without re-validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    #[serde(rename = "ID")]
    pub id: ContractId,
    #[serde(rename = "Status")]
    pub status: ContractStatus,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Start date")]
    pub start_date: String,
    #[serde(rename = "End date")]
    pub end_date: String,
    #[serde(rename = "Extension details")]
    pub extension_details: String,
    #[serde(rename = "Employer")]
    pub employer: Employer,
    #[serde(rename = "Employee")]
    pub employee: Employee,
    #[serde(rename = "Job")]
    pub job: Job,
    #[serde(rename = "Benefits")]
    pub benefits: Benefits,
    #[serde(rename = "Disputes", deserialize_with = "null_as_empty")]
    pub disputes: Vec<Dispute>,
}

impl Contract {
    /// Rebuild employer, employee, job and benefits through their validated
    /// constructors, reporting the first failure.
    pub fn validated_terms(&self) -> Result<Terms, ValidationError> {
        Ok(Terms {
            employer: self.employer.validated()?,
            employee: self.employee.validated()?,
            job: self.job.validated()?,
            benefits: self.benefits.validated()?,
        })
    }

    /// Install a validated set of terms, replacing all four substructures.
    pub fn with_terms(self, terms: Terms) -> Self {
        Self {
            employer: terms.employer,
            employee: terms.employee,
            job: terms.job,
            benefits: terms.benefits,
            ..self
        }
    }

    /// The dispute with the given identifier, if any.
    pub fn dispute(&self, id: &DisputeId) -> Option<&Dispute> {
        self.disputes.iter().find(|d| &d.id == id)
    }

    pub fn dispute_mut(&mut self, id: &DisputeId) -> Option<&mut Dispute> {
        self.disputes.iter_mut().find(|d| &d.id == id)
    }
}

fn require(record: &'static str, field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(record, field));
    }
    Ok(())
}

/// Accept `null` where a list is expected; older writers emitted it for empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
