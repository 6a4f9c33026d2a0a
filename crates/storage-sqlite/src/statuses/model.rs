//! Database models for statuses.

use diesel::prelude::*;
use expensesheet_core::statuses::Status;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::statuses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StatusDB {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

impl From<StatusDB> for Status {
    fn from(db: StatusDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            color: db.color,
        }
    }
}
