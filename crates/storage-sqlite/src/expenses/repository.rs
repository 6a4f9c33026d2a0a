use expensesheet_core::errors::Error;
use expensesheet_core::expenses::{
    MonthlyExpense, MonthlyExpenseChanges, MonthlyExpenseDetails, MonthlyExpenseInsert,
    MonthlyExpenseRepositoryTrait, StatusChange,
};
use expensesheet_core::Result;

use super::model::{details_from_row, MonthlyExpenseDB, MonthlyExpenseDetailsRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, monthly_expenses, paid_types, statuses};
use crate::statuses::ensure_known_status;
use crate::utils::decimal_to_text;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct MonthlyExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MonthlyExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MonthlyExpenseRepository { pool, writer }
    }

    fn load_details_impl(&self, expense_id: Option<&str>) -> Result<Vec<MonthlyExpenseDetails>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = monthly_expenses::table
            .inner_join(categories::table)
            .left_join(paid_types::table)
            .left_join(statuses::table)
            .select((
                MonthlyExpenseDB::as_select(),
                categories::name,
                paid_types::name.nullable(),
                paid_types::color.nullable(),
                statuses::name.nullable(),
            ))
            .order((
                monthly_expenses::reference_month.desc(),
                categories::name.asc(),
            ))
            .into_boxed();

        if let Some(expense_id) = expense_id {
            query = query.filter(monthly_expenses::id.eq(expense_id.to_string()));
        }

        let rows = query
            .load::<MonthlyExpenseDetailsRow>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(details_from_row).collect())
    }
}

#[async_trait]
impl MonthlyExpenseRepositoryTrait for MonthlyExpenseRepository {
    fn list_expenses(&self) -> Result<Vec<MonthlyExpenseDetails>> {
        self.load_details_impl(None)
    }

    fn get_expense(&self, expense_id: &str) -> Result<Option<MonthlyExpenseDetails>> {
        Ok(self.load_details_impl(Some(expense_id))?.into_iter().next())
    }

    async fn insert_expense(&self, expense: MonthlyExpenseInsert) -> Result<MonthlyExpense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MonthlyExpense> {
                ensure_known_status(conn, expense.status)?;
                let row = MonthlyExpenseDB::from_insert(
                    Uuid::new_v4().to_string(),
                    expense,
                    Utc::now().naive_utc(),
                );
                let inserted = diesel::insert_into(monthly_expenses::table)
                    .values(&row)
                    .returning(MonthlyExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(MonthlyExpense::from(inserted))
            })
            .await
    }

    async fn update_expense(
        &self,
        expense_id: String,
        changes: MonthlyExpenseChanges,
    ) -> Result<MonthlyExpense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MonthlyExpense> {
                // A chosen status that does not exist is left to the foreign key.
                if let StatusChange::Derived(status) = &changes.status {
                    ensure_known_status(conn, *status)?;
                }
                let status_id = changes.status.id().to_string();
                let updated = diesel::update(monthly_expenses::table.find(&expense_id))
                    .set((
                        monthly_expenses::spent_amount.eq(changes.spent_amount.map(decimal_to_text)),
                        monthly_expenses::payment_date.eq(changes.payment_date),
                        monthly_expenses::paid_type_id.eq(changes.paid_type_id),
                        monthly_expenses::status_id.eq(Some(status_id)),
                        monthly_expenses::description.eq(changes.description),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::not_found("Monthly expense", &expense_id));
                }

                let row = monthly_expenses::table
                    .find(&expense_id)
                    .select(MonthlyExpenseDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(MonthlyExpense::from(row))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(monthly_expenses::table.find(expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
