use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Wire format of a reference month (`2024-03`).
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Wire format of a calendar date (`2024-03-31`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the current local month.
///
/// This is the month used whenever a caller does not name one explicitly.
pub fn current_month_start() -> NaiveDate {
    month_start(Local::now().date_naive())
}

/// Parses a `YYYY-MM` month into the first day of that month.
pub fn parse_month(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(ValidationError::InvalidMonth(value.to_string()).into());
    }
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidMonth(value.to_string()).into())
}

/// Parses a `YYYY-MM-DD` calendar date, naming `field` in the error.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        Error::Validation(ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
    })
}

/// Half-open date window `[start, end)` covering exactly one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Window for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Result<Self> {
        let start = month_start(date);
        let end = start.checked_add_months(Months::new(1)).ok_or_else(|| {
            Error::invalid_input(format!("Month after {} is out of range", start))
        })?;
        Ok(Self { start, end })
    }

    /// Window for the current local month.
    pub fn current() -> Result<Self> {
        Self::for_date(current_month_start())
    }

    /// Resolves an optional `YYYY-MM` query value. Absent or blank means the
    /// current month.
    pub fn resolve(month: Option<&str>) -> Result<Self> {
        match month.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => Self::for_date(parse_month(m)?),
            None => Self::current(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// `YYYY-MM` label of the window.
    pub fn label(&self) -> String {
        self.start.format(MONTH_FORMAT).to_string()
    }
}
