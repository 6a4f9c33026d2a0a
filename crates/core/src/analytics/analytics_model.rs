//! Analytics read models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::MonthlyExpense;
use crate::utils::MonthWindow;

/// Planned, spent and remaining sums for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub month: String,
    pub total_planned: Decimal,
    pub total_spent: Decimal,
    pub total_difference: Decimal,
}

impl MonthlyTotals {
    /// Sums the rows that fall inside `window`. Missing spent amounts count
    /// as zero, so an unpaid row contributes its full plan to the difference.
    pub fn aggregate<'a, I>(window: &MonthWindow, expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a MonthlyExpense>,
    {
        let mut totals = MonthlyTotals {
            month: window.label(),
            total_planned: Decimal::ZERO,
            total_spent: Decimal::ZERO,
            total_difference: Decimal::ZERO,
        };

        for expense in expenses
            .into_iter()
            .filter(|e| window.contains(e.reference_month))
        {
            let spent = expense.spent_amount.unwrap_or(Decimal::ZERO);
            totals.total_planned += expense.planned_amount;
            totals.total_spent += spent;
            totals.total_difference += expense.planned_amount - spent;
        }

        totals
    }
}

/// A budget line still awaiting payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayment {
    pub expense_id: String,
    pub category_id: String,
    pub category_name: String,
    pub reference_month: NaiveDate,
    pub planned_amount: Decimal,
    pub spent_amount: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status_id: String,
    pub status_name: String,
}
