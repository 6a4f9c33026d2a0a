use expensesheet_core::analytics::{AnalyticsRepositoryTrait, PendingPayment};
use expensesheet_core::expenses::MonthlyExpense;
use expensesheet_core::utils::MonthWindow;
use expensesheet_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::expenses::MonthlyExpenseDB;
use crate::schema::{categories, monthly_expenses, statuses};
use diesel::prelude::*;

use std::sync::Arc;

/// Read-only dashboard queries.
pub struct AnalyticsRepository {
    pool: Arc<DbPool>,
}

impl AnalyticsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AnalyticsRepository { pool }
    }
}

impl AnalyticsRepositoryTrait for AnalyticsRepository {
    fn list_expenses_in_window(&self, window: &MonthWindow) -> Result<Vec<MonthlyExpense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = monthly_expenses::table
            .filter(monthly_expenses::reference_month.ge(window.start))
            .filter(monthly_expenses::reference_month.lt(window.end))
            .select(MonthlyExpenseDB::as_select())
            .load::<MonthlyExpenseDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(MonthlyExpense::from).collect())
    }

    fn list_expenses_with_status(
        &self,
        window: &MonthWindow,
        status_id: &str,
    ) -> Result<Vec<PendingPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = monthly_expenses::table
            .inner_join(categories::table)
            .inner_join(statuses::table)
            .filter(monthly_expenses::reference_month.ge(window.start))
            .filter(monthly_expenses::reference_month.lt(window.end))
            .filter(statuses::id.eq(status_id))
            .order((
                monthly_expenses::reference_month.asc(),
                categories::name.asc(),
            ))
            .select((
                MonthlyExpenseDB::as_select(),
                categories::name,
                statuses::id,
                statuses::name,
            ))
            .load::<(MonthlyExpenseDB, String, String, String)>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .map(|(row, category_name, status_id, status_name)| {
                let expense = MonthlyExpense::from(row);
                PendingPayment {
                    expense_id: expense.id,
                    category_id: expense.category_id,
                    category_name,
                    reference_month: expense.reference_month,
                    planned_amount: expense.planned_amount,
                    spent_amount: expense.spent_amount,
                    payment_date: expense.payment_date,
                    description: expense.description,
                    status_id,
                    status_name,
                }
            })
            .collect())
    }
}
