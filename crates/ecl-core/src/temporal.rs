//! # Temporal Types — `MM/DD/YYYY` Calendar Dates
//!
//! Defines `ContractDate`, a calendar day that is parsed from and rendered
//! to exactly one textual form: two-digit month, two-digit day, four-digit
//! year, separated by `/`. Variants such as `1/2/2027` or `2027-01-02` are
//! **rejected at construction**; there is no lenient fallback.
//!
//! Also defines the [`Clock`] seam. Business rules that depend on "today"
//! (end dates in the past, the extension window, dispute timestamps) take a
//! clock rather than reading system time, so they can be exercised with a
//! [`FixedClock`].
//!
//! All comparisons are made at calendar-day granularity.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

/// The `chrono` format string matching `MM/DD/YYYY`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar day rendered as `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractDate(NaiveDate);

impl ContractDate {
    /// Parse a `MM/DD/YYYY` string.
    ///
    /// # Errors
    ///
    /// - [`DateError::Malformed`] if the string is not two digits, `/`, two
    ///   digits, `/`, four digits.
    /// - [`DateError::NonexistentDay`] if the digits name no calendar day.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        if !has_date_shape(s) {
            return Err(DateError::Malformed {
                value: s.to_string(),
            });
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::NonexistentDay {
                value: s.to_string(),
            })
    }

    /// Wrap an existing `NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year, month, day. Returns `None` for nonexistent days.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// The same day `months` later. A day missing from the target month
    /// rolls forward into the next one (11/30 + 3 months is 03/02, 01/31 +
    /// 1 month is 03/03 in a common year). `None` on calendar overflow.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        let first = self.0.with_day(1)?.checked_add_months(Months::new(months))?;
        first
            .checked_add_days(Days::new(u64::from(self.0.day() - 1)))
            .map(Self)
    }

    /// Render as `MM/DD/YYYY`.
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for ContractDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl std::str::FromStr for ContractDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ContractDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for ContractDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// `NN/NN/NNNN` with ASCII digits.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

// ─── Clock ───────────────────────────────────────────────────────────

/// Source of the current calendar day.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> ContractDate;
}

/// Today's UTC date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> ContractDate {
        ContractDate(Utc::now().date_naive())
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ContractDate);

impl Clock for FixedClock {
    fn today(&self) -> ContractDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> ContractDate {
        (**self).today()
    }
}
