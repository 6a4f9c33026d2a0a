use std::sync::Arc;

use crate::{
    api::shared::{created, ok, ApiJson, Reply},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use expensesheet_core::expenses::{
    MonthlyExpense, MonthlyExpenseDetails, MonthlyExpenseUpdate, NewMonthlyExpense,
};

async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<Vec<MonthlyExpenseDetails>>> {
    let expenses = state.expense_service.get_expenses()?;
    Ok(ok("Monthly expenses retrieved", expenses))
}

async fn get_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<MonthlyExpenseDetails>> {
    let expense = state.expense_service.get_expense(&id)?;
    Ok(ok("Monthly expense retrieved", expense))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    ApiJson(expense): ApiJson<NewMonthlyExpense>,
) -> ApiResult<Reply<MonthlyExpense>> {
    let expense = state.expense_service.create_expense(expense).await?;
    Ok(created("Monthly expense created", expense))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<MonthlyExpenseUpdate>,
) -> ApiResult<Reply<MonthlyExpense>> {
    let expense = state.expense_service.update_expense(&id, update).await?;
    Ok(ok("Monthly expense updated", expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<()>> {
    state.expense_service.delete_expense(&id).await?;
    Ok(ok("Monthly expense deleted", ()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
