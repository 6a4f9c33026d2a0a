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
use expensesheet_core::categories::{
    Category, CategoryOverview, CategoryUpdate, CreatedCategory, NewCategory,
};

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<Vec<CategoryOverview>>> {
    let categories = state.category_service.get_categories()?;
    Ok(ok("Categories retrieved", categories))
}

async fn get_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<Category>> {
    let category = state.category_service.get_category(&id)?;
    Ok(ok("Category retrieved", category))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    ApiJson(category): ApiJson<NewCategory>,
) -> ApiResult<Reply<CreatedCategory>> {
    let created_category = state.category_service.create_category(category).await?;
    Ok(created("Category created", created_category))
}

async fn update_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<CategoryUpdate>,
) -> ApiResult<Reply<Category>> {
    let category = state.category_service.update_category(&id, update).await?;
    Ok(ok("Category updated", category))
}

async fn delete_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<()>> {
    state.category_service.delete_category(&id).await?;
    Ok(ok("Category deleted", ()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
