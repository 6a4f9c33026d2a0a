//! Monthly expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::statuses::KnownStatus;
use crate::utils::{month_start, parse_date};

/// One budget line of a category for one reference month.
///
/// `planned_amount` is a snapshot taken from the category when the row was
/// created; later edits to the category only touch the current month's rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    pub id: String,
    pub category_id: String,
    pub reference_month: NaiveDate,
    pub spent_amount: Option<Decimal>,
    pub planned_amount: Decimal,
    pub payment_date: Option<NaiveDate>,
    pub paid_type_id: Option<String>,
    pub status_id: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
    pub created_at: NaiveDateTime,
}

impl MonthlyExpense {
    /// `planned - spent`, or `None` while nothing has been spent.
    pub fn difference(&self) -> Option<Decimal> {
        self.spent_amount.map(|spent| self.planned_amount - spent)
    }
}

/// A monthly expense joined with the display columns of its lookups.
///
/// Every optional column is surfaced as `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseDetails {
    pub id: String,
    pub category_id: String,
    pub category_name: String,
    pub reference_month: NaiveDate,
    pub spent_amount: Option<Decimal>,
    pub planned_amount: Decimal,
    pub difference: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub file: Option<String>,
    pub paid_type_id: Option<String>,
    pub paid_type_name: Option<String>,
    pub paid_type_color: Option<String>,
    pub status_id: Option<String>,
    pub status_name: Option<String>,
    pub description: Option<String>,
}

impl MonthlyExpenseDetails {
    pub fn new(
        expense: MonthlyExpense,
        category_name: String,
        paid_type_name: Option<String>,
        paid_type_color: Option<String>,
        status_name: Option<String>,
    ) -> Self {
        let difference = expense.difference();
        Self {
            id: expense.id,
            category_id: expense.category_id,
            category_name,
            reference_month: expense.reference_month,
            spent_amount: expense.spent_amount,
            planned_amount: expense.planned_amount,
            difference,
            payment_date: expense.payment_date,
            file: expense.file,
            paid_type_id: expense.paid_type_id,
            paid_type_name,
            paid_type_color,
            status_id: expense.status_id,
            status_name,
            description: expense.description,
        }
    }
}

/// Request body for recording a monthly expense.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyExpense {
    pub category_id: Option<String>,
    pub reference_month: Option<String>,
    #[serde(alias = "paidId")]
    pub paid_type_id: Option<String>,
    pub spent_amount: Option<Decimal>,
    pub payment_date: Option<String>,
    pub file: Option<String>,
    pub description: Option<String>,
}

/// Validated shape of a [`NewMonthlyExpense`], before the planned amount of
/// its category is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMonthlyExpense {
    pub category_id: String,
    pub reference_month: NaiveDate,
    pub paid_type_id: String,
    pub spent_amount: Decimal,
    pub payment_date: NaiveDate,
    pub file: Option<String>,
    pub description: Option<String>,
}

impl NewMonthlyExpense {
    pub fn validate(self) -> Result<ValidatedMonthlyExpense> {
        let category_id = required_text(self.category_id, "categoryId")?;
        let paid_type_id = required_text(self.paid_type_id, "paidTypeId")?;
        let reference_month = required_text(self.reference_month, "referenceMonth")
            .and_then(|value| parse_date("referenceMonth", &value))?;
        let payment_date = required_text(self.payment_date, "paymentDate")
            .and_then(|value| parse_date("paymentDate", &value))?;
        let spent_amount = self
            .spent_amount
            .ok_or_else(|| Error::missing_field("spentAmount"))?;
        ensure_not_negative(spent_amount, "spentAmount")?;

        Ok(ValidatedMonthlyExpense {
            category_id,
            reference_month: month_start(reference_month),
            paid_type_id,
            spent_amount,
            payment_date,
            file: self.file.filter(|f| !f.trim().is_empty()),
            description: self.description,
        })
    }
}

/// Row ready to be persisted. The repository assigns id and timestamp.
///
/// Inserted rows always carry one of the seeded statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyExpenseInsert {
    pub category_id: String,
    pub reference_month: NaiveDate,
    pub spent_amount: Option<Decimal>,
    pub planned_amount: Decimal,
    pub payment_date: Option<NaiveDate>,
    pub paid_type_id: Option<String>,
    pub status: KnownStatus,
    pub description: Option<String>,
    pub file: Option<String>,
}

impl MonthlyExpenseInsert {
    /// The pending row seeded for a freshly created category.
    pub fn opening_for_category(
        category_id: &str,
        reference_month: NaiveDate,
        planned_amount: Decimal,
        description: Option<String>,
    ) -> Self {
        Self {
            category_id: category_id.to_string(),
            reference_month: month_start(reference_month),
            spent_amount: None,
            planned_amount,
            payment_date: None,
            paid_type_id: None,
            status: KnownStatus::Pending,
            description,
            file: None,
        }
    }

    /// A paid row recorded manually, snapshotting the category's plan.
    pub fn paid(expense: ValidatedMonthlyExpense, planned_amount: Decimal) -> Self {
        Self {
            category_id: expense.category_id,
            reference_month: expense.reference_month,
            spent_amount: Some(expense.spent_amount),
            planned_amount,
            payment_date: Some(expense.payment_date),
            paid_type_id: Some(expense.paid_type_id),
            status: KnownStatus::Paid,
            description: expense.description,
            file: expense.file,
        }
    }
}

/// Request body for updating the payment fields of a monthly expense.
///
/// This is a full replacement of those fields: an omitted value clears it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseUpdate {
    pub spent_amount: Option<Decimal>,
    pub payment_date: Option<String>,
    #[serde(alias = "paidId")]
    pub paid_type_id: Option<String>,
    pub status_id: Option<String>,
    pub description: Option<String>,
}

/// Status written by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusChange {
    /// Implied by the presence of a payment date.
    Derived(KnownStatus),
    /// Named explicitly by the caller.
    Chosen(String),
}

impl StatusChange {
    pub fn id(&self) -> &str {
        match self {
            StatusChange::Derived(status) => status.id(),
            StatusChange::Chosen(id) => id,
        }
    }
}

/// Validated payment fields, with the status already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyExpenseChanges {
    pub spent_amount: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub paid_type_id: Option<String>,
    pub status: StatusChange,
    pub description: Option<String>,
}

impl MonthlyExpenseUpdate {
    pub fn validate(self) -> Result<MonthlyExpenseChanges> {
        if let Some(spent) = self.spent_amount {
            ensure_not_negative(spent, "spentAmount")?;
        }
        let payment_date = match self.payment_date.filter(|d| !d.trim().is_empty()) {
            Some(value) => Some(parse_date("paymentDate", &value)?),
            None => None,
        };
        let status = match self
            .status_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(id) => StatusChange::Chosen(id),
            None => StatusChange::Derived(KnownStatus::for_payment(payment_date.is_some())),
        };

        Ok(MonthlyExpenseChanges {
            spent_amount: self.spent_amount,
            payment_date,
            paid_type_id: self
                .paid_type_id
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            status,
            description: self.description,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_field(field))
}

fn ensure_not_negative(amount: Decimal, field: &str) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::invalid_input(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(())
}
