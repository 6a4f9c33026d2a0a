use expensesheet_core::paid_types::{NewPaidType, PaidType, PaidTypeRepositoryTrait};
use expensesheet_core::Result;

use super::model::PaidTypeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::paid_types::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct PaidTypeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PaidTypeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PaidTypeRepository { pool, writer }
    }
}

#[async_trait]
impl PaidTypeRepositoryTrait for PaidTypeRepository {
    fn list_paid_types(&self) -> Result<Vec<PaidType>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = paid_types
            .order(name.asc())
            .load::<PaidTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PaidType::from).collect())
    }

    fn find_paid_type_by_name(&self, paid_type_name: &str) -> Result<Option<PaidType>> {
        let mut conn = get_connection(&self.pool)?;
        let row = paid_types
            .filter(name.eq(paid_type_name))
            .first::<PaidTypeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(PaidType::from))
    }

    async fn insert_paid_type(&self, new_paid_type: NewPaidType) -> Result<PaidType> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PaidType> {
                let row = PaidTypeDB {
                    id: Uuid::new_v4().to_string(),
                    name: new_paid_type.name,
                    color: new_paid_type.color,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(paid_types)
                    .values(&row)
                    .returning(PaidTypeDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PaidType::from(inserted))
            })
            .await
    }

    async fn delete_paid_type(&self, paid_type_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(paid_types.find(paid_type_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
