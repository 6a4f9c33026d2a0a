use crate::errors::{Error, Result};
use crate::statuses::statuses_model::{NewStatus, Status};
use crate::statuses::statuses_traits::{StatusRepositoryTrait, StatusServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct StatusService {
    repository: Arc<dyn StatusRepositoryTrait>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn StatusRepositoryTrait>) -> Self {
        StatusService { repository }
    }
}

#[async_trait]
impl StatusServiceTrait for StatusService {
    fn get_statuses(&self) -> Result<Vec<Status>> {
        self.repository.list_statuses()
    }

    async fn create_status(&self, new_status: NewStatus) -> Result<Status> {
        new_status.validate()?;
        let new_status = new_status.normalized();

        // The unique index on name still guards concurrent inserts.
        if self
            .repository
            .find_status_by_name(&new_status.name)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(format!(
                "Status with name '{}' already exists",
                new_status.name
            )));
        }

        debug!("Creating status '{}'", new_status.name);
        self.repository.insert_status(new_status).await
    }

    async fn delete_status(&self, status_id: &str) -> Result<()> {
        let deleted = self.repository.delete_status(status_id.to_string()).await?;
        if deleted == 0 {
            return Err(Error::not_found("Status", status_id));
        }
        Ok(())
    }
}
