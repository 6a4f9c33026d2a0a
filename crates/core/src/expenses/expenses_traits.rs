use crate::errors::Result;
use crate::expenses::expenses_model::{
    MonthlyExpense, MonthlyExpenseChanges, MonthlyExpenseDetails, MonthlyExpenseInsert,
    MonthlyExpenseUpdate, NewMonthlyExpense,
};
use async_trait::async_trait;

/// Trait for monthly expense repository operations
#[async_trait]
pub trait MonthlyExpenseRepositoryTrait: Send + Sync {
    /// Joined rows, newest reference month first.
    fn list_expenses(&self) -> Result<Vec<MonthlyExpenseDetails>>;
    fn get_expense(&self, expense_id: &str) -> Result<Option<MonthlyExpenseDetails>>;
    async fn insert_expense(&self, expense: MonthlyExpenseInsert) -> Result<MonthlyExpense>;
    async fn update_expense(
        &self,
        expense_id: String,
        changes: MonthlyExpenseChanges,
    ) -> Result<MonthlyExpense>;
    async fn delete_expense(&self, expense_id: String) -> Result<usize>;
}

/// Trait for monthly expense service operations
#[async_trait]
pub trait MonthlyExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self) -> Result<Vec<MonthlyExpenseDetails>>;
    fn get_expense(&self, expense_id: &str) -> Result<MonthlyExpenseDetails>;
    async fn create_expense(&self, new_expense: NewMonthlyExpense) -> Result<MonthlyExpense>;
    async fn update_expense(
        &self,
        expense_id: &str,
        update: MonthlyExpenseUpdate,
    ) -> Result<MonthlyExpense>;
    async fn delete_expense(&self, expense_id: &str) -> Result<()>;
}
