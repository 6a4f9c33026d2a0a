use expensesheet_core::errors::Error;
use expensesheet_core::statuses::{KnownStatus, NewStatus, Status, StatusRepositoryTrait};
use expensesheet_core::Result;

use super::model::StatusDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::statuses::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::warn;

use std::sync::Arc;
use uuid::Uuid;

/// Checks that a seeded status is still present. Its absence is a server-side
/// dependency failure, not a bad reference from the client.
pub(crate) fn ensure_known_status(conn: &mut SqliteConnection, status: KnownStatus) -> Result<()> {
    let found = statuses
        .find(status.id())
        .select(id)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    if found.is_none() {
        warn!("Status '{}' is missing from the database", status);
        return Err(Error::Dependency(format!(
            "Status '{}' is not configured",
            status
        )));
    }
    Ok(())
}

pub struct StatusRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StatusRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StatusRepository { pool, writer }
    }
}

#[async_trait]
impl StatusRepositoryTrait for StatusRepository {
    fn list_statuses(&self) -> Result<Vec<Status>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = statuses
            .order(name.asc())
            .load::<StatusDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Status::from).collect())
    }

    fn find_status_by_name(&self, status_name: &str) -> Result<Option<Status>> {
        let mut conn = get_connection(&self.pool)?;
        let row = statuses
            .filter(name.eq(status_name))
            .first::<StatusDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Status::from))
    }

    async fn insert_status(&self, new_status: NewStatus) -> Result<Status> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Status> {
                let row = StatusDB {
                    id: Uuid::new_v4().to_string(),
                    name: new_status.name,
                    color: new_status.color,
                };
                let inserted = diesel::insert_into(statuses)
                    .values(&row)
                    .returning(StatusDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Status::from(inserted))
            })
            .await
    }

    async fn delete_status(&self, status_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(statuses.find(status_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
