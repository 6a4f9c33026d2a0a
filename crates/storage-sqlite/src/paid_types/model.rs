//! Database models for paid types.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use expensesheet_core::paid_types::PaidType;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::paid_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaidTypeDB {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<PaidTypeDB> for PaidType {
    fn from(db: PaidTypeDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            color: db.color,
            created_at: db.created_at,
        }
    }
}
