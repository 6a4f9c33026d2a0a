//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use expensesheet_core::categories::{Category, CategoryDraft};

use crate::utils::{decimal_to_text, text_to_decimal};

/// Database model for categories
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub planned_amount: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CategoryDB {
    pub fn from_draft(id: String, draft: CategoryDraft, now: NaiveDateTime) -> Self {
        Self {
            id,
            name: draft.name,
            planned_amount: decimal_to_text(draft.planned_amount),
            color: draft.color,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            planned_amount: text_to_decimal(&db.planned_amount),
            id: db.id,
            name: db.name,
            color: db.color,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
