//! Paid type domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Domain model representing a payment method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaidType {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new paid type
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPaidType {
    #[serde(default, alias = "type")]
    pub name: String,
    pub color: Option<String>,
}

impl NewPaidType {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        Ok(())
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}
