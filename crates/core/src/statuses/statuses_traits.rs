use crate::errors::Result;
use crate::statuses::statuses_model::{NewStatus, Status};
use async_trait::async_trait;

/// Trait for status repository operations
#[async_trait]
pub trait StatusRepositoryTrait: Send + Sync {
    fn list_statuses(&self) -> Result<Vec<Status>>;
    fn find_status_by_name(&self, name: &str) -> Result<Option<Status>>;
    async fn insert_status(&self, new_status: NewStatus) -> Result<Status>;
    async fn delete_status(&self, status_id: String) -> Result<usize>;
}

/// Trait for status service operations
#[async_trait]
pub trait StatusServiceTrait: Send + Sync {
    fn get_statuses(&self) -> Result<Vec<Status>>;
    async fn create_status(&self, new_status: NewStatus) -> Result<Status>;
    async fn delete_status(&self, status_id: &str) -> Result<()>;
}
