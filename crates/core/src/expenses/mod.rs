//! Monthly expenses: one budget line per category and reference month.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

#[cfg(test)]
mod expenses_service_tests;

pub use expenses_model::{
    MonthlyExpense, MonthlyExpenseChanges, MonthlyExpenseDetails, MonthlyExpenseInsert,
    MonthlyExpenseUpdate, NewMonthlyExpense, StatusChange, ValidatedMonthlyExpense,
};
pub use expenses_service::MonthlyExpenseService;
pub use expenses_traits::{MonthlyExpenseRepositoryTrait, MonthlyExpenseServiceTrait};
