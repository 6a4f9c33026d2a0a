use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::expenses_model::{
    MonthlyExpense, MonthlyExpenseDetails, MonthlyExpenseInsert, MonthlyExpenseUpdate,
    NewMonthlyExpense,
};
use crate::expenses::expenses_traits::{MonthlyExpenseRepositoryTrait, MonthlyExpenseServiceTrait};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

pub struct MonthlyExpenseService {
    repository: Arc<dyn MonthlyExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl MonthlyExpenseService {
    pub fn new(
        repository: Arc<dyn MonthlyExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        MonthlyExpenseService {
            repository,
            category_repository,
        }
    }
}

#[async_trait]
impl MonthlyExpenseServiceTrait for MonthlyExpenseService {
    fn get_expenses(&self) -> Result<Vec<MonthlyExpenseDetails>> {
        self.repository.list_expenses()
    }

    fn get_expense(&self, expense_id: &str) -> Result<MonthlyExpenseDetails> {
        self.repository
            .get_expense(expense_id)?
            .ok_or_else(|| Error::not_found("Monthly expense", expense_id))
    }

    async fn create_expense(&self, new_expense: NewMonthlyExpense) -> Result<MonthlyExpense> {
        let expense = new_expense.validate()?;

        // The planned amount is snapshotted from the category at insert time.
        let category = match self.category_repository.get_category(&expense.category_id)? {
            Some(category) => category,
            None => {
                warn!(
                    "Cannot record expense: category {} does not exist",
                    expense.category_id
                );
                return Err(Error::Dependency(format!(
                    "Category '{}' could not be loaded",
                    expense.category_id
                )));
            }
        };

        debug!(
            "Recording expense of {} for category '{}' in {}",
            expense.spent_amount, category.name, expense.reference_month
        );
        self.repository
            .insert_expense(MonthlyExpenseInsert::paid(expense, category.planned_amount))
            .await
    }

    async fn update_expense(
        &self,
        expense_id: &str,
        update: MonthlyExpenseUpdate,
    ) -> Result<MonthlyExpense> {
        let changes = update.validate()?;
        self.get_expense(expense_id)?;
        self.repository
            .update_expense(expense_id.to_string(), changes)
            .await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete_expense(expense_id.to_string())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found("Monthly expense", expense_id));
        }
        Ok(())
    }
}
