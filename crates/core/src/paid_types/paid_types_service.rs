use crate::errors::{Error, Result};
use crate::paid_types::paid_types_model::{NewPaidType, PaidType};
use crate::paid_types::paid_types_traits::{PaidTypeRepositoryTrait, PaidTypeServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PaidTypeService {
    repository: Arc<dyn PaidTypeRepositoryTrait>,
}

impl PaidTypeService {
    pub fn new(repository: Arc<dyn PaidTypeRepositoryTrait>) -> Self {
        PaidTypeService { repository }
    }
}

#[async_trait]
impl PaidTypeServiceTrait for PaidTypeService {
    fn get_paid_types(&self) -> Result<Vec<PaidType>> {
        self.repository.list_paid_types()
    }

    async fn create_paid_type(&self, new_paid_type: NewPaidType) -> Result<PaidType> {
        new_paid_type.validate()?;
        let new_paid_type = new_paid_type.normalized();

        if self
            .repository
            .find_paid_type_by_name(&new_paid_type.name)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Paid type with name '{}' already exists",
                new_paid_type.name
            )));
        }

        self.repository.insert_paid_type(new_paid_type).await
    }

    async fn delete_paid_type(&self, paid_type_id: &str) -> Result<()> {
        match self
            .repository
            .delete_paid_type(paid_type_id.to_string())
            .await?
        {
            0 => Err(Error::not_found("Paid type", paid_type_id)),
            _ => Ok(()),
        }
    }
}
