//! Database models for monthly expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use expensesheet_core::expenses::{MonthlyExpense, MonthlyExpenseDetails, MonthlyExpenseInsert};

use crate::utils::{decimal_to_text, optional_text_to_decimal, text_to_decimal};

/// Database model for monthly expenses. Amounts are decimal text.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyExpenseDB {
    pub id: String,
    pub category_id: String,
    pub reference_month: NaiveDate,
    pub spent_amount: Option<String>,
    pub planned_amount: String,
    pub payment_date: Option<NaiveDate>,
    pub paid_type_id: Option<String>,
    pub status_id: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
    pub created_at: NaiveDateTime,
}

impl MonthlyExpenseDB {
    pub fn from_insert(id: String, insert: MonthlyExpenseInsert, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            category_id: insert.category_id,
            reference_month: insert.reference_month,
            spent_amount: insert.spent_amount.map(decimal_to_text),
            planned_amount: decimal_to_text(insert.planned_amount),
            payment_date: insert.payment_date,
            paid_type_id: insert.paid_type_id,
            status_id: Some(insert.status.id().to_string()),
            description: insert.description,
            file: insert.file,
            created_at,
        }
    }
}

impl From<MonthlyExpenseDB> for MonthlyExpense {
    fn from(db: MonthlyExpenseDB) -> Self {
        Self {
            spent_amount: optional_text_to_decimal(db.spent_amount.as_deref()),
            planned_amount: text_to_decimal(&db.planned_amount),
            id: db.id,
            category_id: db.category_id,
            reference_month: db.reference_month,
            payment_date: db.payment_date,
            paid_type_id: db.paid_type_id,
            status_id: db.status_id,
            description: db.description,
            file: db.file,
            created_at: db.created_at,
        }
    }
}

/// Expense row with category name, paid type name/color and status name.
pub type MonthlyExpenseDetailsRow = (
    MonthlyExpenseDB,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
);

pub fn details_from_row(row: MonthlyExpenseDetailsRow) -> MonthlyExpenseDetails {
    let (expense, category_name, paid_type_name, paid_type_color, status_name) = row;
    MonthlyExpenseDetails::new(
        expense.into(),
        category_name,
        paid_type_name,
        paid_type_color,
        status_name,
    )
}
