//! SQLite storage implementation for monthly expenses.

mod model;
mod repository;

pub use model::{MonthlyExpenseDB, MonthlyExpenseDetailsRow};
pub use repository::MonthlyExpenseRepository;
