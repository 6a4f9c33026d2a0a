//! Status domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Statuses the application itself relies on.
///
/// Both rows are seeded by the initial migration with `id == name`, so their
/// identifiers are stable across databases. Code must match on the id, never
/// on the (user-visible) name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnownStatus {
    Pending,
    Paid,
}

impl KnownStatus {
    pub const fn id(self) -> &'static str {
        match self {
            KnownStatus::Pending => "pending",
            KnownStatus::Paid => "paid",
        }
    }

    /// Status implied by the presence of a payment.
    pub fn for_payment(is_paid: bool) -> Self {
        if is_paid {
            KnownStatus::Paid
        } else {
            KnownStatus::Pending
        }
    }
}

impl fmt::Display for KnownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Domain model representing a payment status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

/// Input model for creating a new status
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewStatus {
    #[serde(default, alias = "statusName")]
    pub name: String,
    pub color: Option<String>,
}

impl NewStatus {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        Ok(())
    }

    /// Trims the name so uniqueness checks compare what is stored.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}
