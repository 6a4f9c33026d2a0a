use crate::errors::Result;
use crate::paid_types::paid_types_model::{NewPaidType, PaidType};
use async_trait::async_trait;

/// Trait for paid type repository operations
#[async_trait]
pub trait PaidTypeRepositoryTrait: Send + Sync {
    fn list_paid_types(&self) -> Result<Vec<PaidType>>;
    fn find_paid_type_by_name(&self, name: &str) -> Result<Option<PaidType>>;
    async fn insert_paid_type(&self, new_paid_type: NewPaidType) -> Result<PaidType>;
    async fn delete_paid_type(&self, paid_type_id: String) -> Result<usize>;
}

/// Trait for paid type service operations
#[async_trait]
pub trait PaidTypeServiceTrait: Send + Sync {
    fn get_paid_types(&self) -> Result<Vec<PaidType>>;
    async fn create_paid_type(&self, new_paid_type: NewPaidType) -> Result<PaidType>;
    async fn delete_paid_type(&self, paid_type_id: &str) -> Result<()>;
}
