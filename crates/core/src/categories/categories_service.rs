use crate::categories::categories_model::{
    Category, CategoryOverview, CategoryUpdate, CreatedCategory, NewCategory,
};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::{current_month_start, month_start};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
    clock: fn() -> NaiveDate,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService {
            repository,
            clock: current_month_start,
        }
    }

    /// Uses `clock` instead of the local calendar to decide the current month.
    pub fn with_clock(
        repository: Arc<dyn CategoryRepositoryTrait>,
        clock: fn() -> NaiveDate,
    ) -> Self {
        CategoryService { repository, clock }
    }

    fn current_month(&self) -> NaiveDate {
        month_start((self.clock)())
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self) -> Result<Vec<CategoryOverview>> {
        self.repository.list_categories()
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.repository
            .get_category(category_id)?
            .ok_or_else(|| Error::not_found("Category", category_id))
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<CreatedCategory> {
        let draft = new_category.validate()?;
        let month = self.current_month();
        debug!("Creating category '{}' for {}", draft.name, month);
        self.repository.create_category(draft, month).await
    }

    async fn update_category(&self, category_id: &str, update: CategoryUpdate) -> Result<Category> {
        let draft = update.validate()?;
        self.get_category(category_id)?;
        let month = self.current_month();
        self.repository
            .update_category(category_id.to_string(), draft, month)
            .await
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete_category(category_id.to_string())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found("Category", category_id));
        }
        debug!("Deleted category {}", category_id);
        Ok(())
    }
}
