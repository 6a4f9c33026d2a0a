use crate::categories::categories_model::{
    Category, CategoryDraft, CategoryOverview, CategoryUpdate, CreatedCategory, NewCategory,
};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// All categories ordered by name, each with its latest reference month.
    fn list_categories(&self) -> Result<Vec<CategoryOverview>>;
    fn get_category(&self, category_id: &str) -> Result<Option<Category>>;

    /// Inserts the category and a pending budget line for `month` atomically.
    async fn create_category(
        &self,
        draft: CategoryDraft,
        month: NaiveDate,
    ) -> Result<CreatedCategory>;

    /// Updates the category and the planned amount of its `month` rows
    /// atomically. Rows of other months keep their snapshot.
    async fn update_category(
        &self,
        category_id: String,
        draft: CategoryDraft,
        month: NaiveDate,
    ) -> Result<Category>;

    async fn delete_category(&self, category_id: String) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self) -> Result<Vec<CategoryOverview>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
    async fn create_category(&self, new_category: NewCategory) -> Result<CreatedCategory>;
    async fn update_category(
        &self,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;
}
