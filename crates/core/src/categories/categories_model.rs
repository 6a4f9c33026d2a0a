//! Category domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::expenses::MonthlyExpense;

/// Domain model representing a budget category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub planned_amount: Decimal,
    pub color: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A category together with the most recent month it has a budget line for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverview {
    #[serde(flatten)]
    pub category: Category,
    pub reference_month: Option<NaiveDate>,
}

/// Result of creating a category: the category and its opening budget line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCategory {
    pub category: Category,
    pub monthly_expense: MonthlyExpense,
}

/// Input model for creating a new category
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(default)]
    pub name: String,
    pub planned_amount: Option<Decimal>,
    #[serde(default)]
    pub color: String,
    pub description: Option<String>,
}

/// Input model for replacing a category's editable fields
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(default)]
    pub name: String,
    pub planned_amount: Option<Decimal>,
    #[serde(default)]
    pub color: String,
    pub description: Option<String>,
}

/// Category fields after validation, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub planned_amount: Decimal,
    pub color: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn validate(self) -> Result<CategoryDraft> {
        draft(self.name, self.planned_amount, self.color, self.description)
    }
}

impl CategoryUpdate {
    pub fn validate(self) -> Result<CategoryDraft> {
        draft(self.name, self.planned_amount, self.color, self.description)
    }
}

fn draft(
    name: String,
    planned_amount: Option<Decimal>,
    color: String,
    description: Option<String>,
) -> Result<CategoryDraft> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::missing_field("name"));
    }
    let planned_amount = planned_amount.ok_or_else(|| Error::missing_field("plannedAmount"))?;
    if planned_amount <= Decimal::ZERO {
        return Err(Error::invalid_input("plannedAmount must be greater than zero"));
    }

    Ok(CategoryDraft {
        name,
        planned_amount,
        color: color.trim().to_string(),
        description,
    })
}
