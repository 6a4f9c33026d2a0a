use expensesheet_core::categories::{
    Category, CategoryDraft, CategoryOverview, CategoryRepositoryTrait, CreatedCategory,
};
use expensesheet_core::errors::Error;
use expensesheet_core::expenses::{MonthlyExpense, MonthlyExpenseInsert};
use expensesheet_core::statuses::KnownStatus;
use expensesheet_core::utils::MonthWindow;
use expensesheet_core::Result;

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::expenses::MonthlyExpenseDB;
use crate::schema::{categories, monthly_expenses};
use crate::statuses::ensure_known_status;
use crate::utils::decimal_to_text;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list_categories(&self) -> Result<Vec<CategoryOverview>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = categories::table
            .order(categories::name.asc())
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;

        let latest_months: HashMap<String, Option<NaiveDate>> = monthly_expenses::table
            .group_by(monthly_expenses::category_id)
            .select((
                monthly_expenses::category_id,
                max(monthly_expenses::reference_month),
            ))
            .load::<(String, Option<NaiveDate>)>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let reference_month = latest_months.get(&row.id).copied().flatten();
                CategoryOverview {
                    category: Category::from(row),
                    reference_month,
                }
            })
            .collect())
    }

    fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let row = categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Category::from))
    }

    async fn create_category(
        &self,
        draft: CategoryDraft,
        month: NaiveDate,
    ) -> Result<CreatedCategory> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CreatedCategory> {
                ensure_known_status(conn, KnownStatus::Pending)?;

                let now = Utc::now().naive_utc();
                let category_row = CategoryDB::from_draft(Uuid::new_v4().to_string(), draft, now);
                let category: Category = diesel::insert_into(categories::table)
                    .values(&category_row)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?
                    .into();

                let opening = MonthlyExpenseInsert::opening_for_category(
                    &category.id,
                    month,
                    category.planned_amount,
                    category.description.clone(),
                );
                let expense_row =
                    MonthlyExpenseDB::from_insert(Uuid::new_v4().to_string(), opening, now);
                let monthly_expense: MonthlyExpense = diesel::insert_into(monthly_expenses::table)
                    .values(&expense_row)
                    .returning(MonthlyExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?
                    .into();

                debug!(
                    "Created category {} with opening expense {}",
                    category.id, monthly_expense.id
                );
                Ok(CreatedCategory {
                    category,
                    monthly_expense,
                })
            })
            .await
    }

    async fn update_category(
        &self,
        category_id: String,
        draft: CategoryDraft,
        month: NaiveDate,
    ) -> Result<Category> {
        let window = MonthWindow::for_date(month)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let planned_text = decimal_to_text(draft.planned_amount);

                let updated = diesel::update(categories::table.find(&category_id))
                    .set((
                        categories::name.eq(&draft.name),
                        categories::planned_amount.eq(&planned_text),
                        categories::color.eq(&draft.color),
                        categories::description.eq(&draft.description),
                        categories::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::not_found("Category", &category_id));
                }

                // Earlier months keep the plan they were created with.
                diesel::update(
                    monthly_expenses::table
                        .filter(monthly_expenses::category_id.eq(&category_id))
                        .filter(monthly_expenses::reference_month.ge(window.start))
                        .filter(monthly_expenses::reference_month.lt(window.end)),
                )
                .set((
                    monthly_expenses::planned_amount.eq(&planned_text),
                    monthly_expenses::description.eq(&draft.description),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                let row = categories::table
                    .find(&category_id)
                    .select(CategoryDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(row))
            })
            .await
    }

    async fn delete_category(&self, category_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Monthly rows go with it through ON DELETE CASCADE.
                Ok(diesel::delete(categories::table.find(category_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::MonthlyExpenseRepository;
    use crate::test_utils::{execute_sql, setup_db};
    use expensesheet_core::expenses::MonthlyExpenseRepositoryTrait;
    use expensesheet_core::statuses::KnownStatus;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent() -> CategoryDraft {
        CategoryDraft {
            name: "Rent".to_string(),
            planned_amount: dec!(1200),
            color: "#fff".to_string(),
            description: Some("Flat".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_category_inserts_opening_row() {
        let db = setup_db();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let created = repo.create_category(rent(), date(2024, 3, 1)).await.unwrap();

        assert_eq!(created.category.planned_amount, dec!(1200));
        let expense = &created.monthly_expense;
        assert_eq!(expense.reference_month, date(2024, 3, 1));
        assert_eq!(expense.planned_amount, dec!(1200));
        assert_eq!(expense.spent_amount, None);
        assert_eq!(expense.difference(), None);
        assert_eq!(expense.status_id.as_deref(), Some(KnownStatus::Pending.id()));
        assert_eq!(expense.description.as_deref(), Some("Flat"));

        let fetched = repo.get_category(&created.category.id).unwrap().unwrap();
        assert_eq!(fetched, created.category);
    }

    #[tokio::test]
    async fn test_create_category_without_pending_status_leaves_nothing_behind() {
        let db = setup_db();
        execute_sql(&db.pool, "DELETE FROM statuses WHERE id = 'pending'");
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let err = repo
            .create_category(rent(), date(2024, 3, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Dependency(_)));
        assert!(repo.list_categories().unwrap().is_empty());
        let expenses = MonthlyExpenseRepository::new(db.pool.clone(), db.writer.clone());
        assert!(expenses.list_expenses().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_category_rewrites_current_month_only() {
        let db = setup_db();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
        let created = repo.create_category(rent(), date(2024, 2, 1)).await.unwrap();
        let march = MonthlyExpenseInsert::opening_for_category(
            &created.category.id,
            date(2024, 3, 1),
            dec!(1200),
            None,
        );
        let expenses = MonthlyExpenseRepository::new(db.pool.clone(), db.writer.clone());
        let march = expenses.insert_expense(march).await.unwrap();

        let updated = repo
            .update_category(
                created.category.id.clone(),
                CategoryDraft {
                    planned_amount: dec!(1350.50),
                    ..rent()
                },
                date(2024, 3, 1),
            )
            .await
            .unwrap();
        assert_eq!(updated.planned_amount, dec!(1350.50));

        let february = expenses
            .get_expense(&created.monthly_expense.id)
            .unwrap()
            .unwrap();
        let march = expenses.get_expense(&march.id).unwrap().unwrap();
        assert_eq!(february.planned_amount, dec!(1200));
        assert_eq!(march.planned_amount, dec!(1350.50));
        assert_eq!(march.description.as_deref(), Some("Flat"));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let db = setup_db();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());

        let err = repo
            .update_category("missing".to_string(), rent(), date(2024, 3, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_categories_by_name_with_latest_month() {
        let db = setup_db();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
        let rent = repo.create_category(rent(), date(2024, 1, 1)).await.unwrap();
        repo.create_category(
            CategoryDraft {
                name: "Groceries".to_string(),
                planned_amount: dec!(800),
                color: String::new(),
                description: None,
            },
            date(2024, 3, 1),
        )
        .await
        .unwrap();

        let expenses = MonthlyExpenseRepository::new(db.pool.clone(), db.writer.clone());
        expenses
            .insert_expense(MonthlyExpenseInsert::opening_for_category(
                &rent.category.id,
                date(2024, 5, 1),
                dec!(1200),
                None,
            ))
            .await
            .unwrap();

        let listed = repo.list_categories().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].category.name, "Groceries");
        assert_eq!(listed[0].reference_month, Some(date(2024, 3, 1)));
        assert_eq!(listed[1].category.name, "Rent");
        assert_eq!(listed[1].reference_month, Some(date(2024, 5, 1)));
    }

    #[tokio::test]
    async fn test_delete_category_cascades_to_expenses() {
        let db = setup_db();
        let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
        let created = repo.create_category(rent(), date(2024, 3, 1)).await.unwrap();

        assert_eq!(repo.delete_category(created.category.id.clone()).await.unwrap(), 1);
        assert_eq!(repo.delete_category(created.category.id).await.unwrap(), 0);

        let expenses = MonthlyExpenseRepository::new(db.pool.clone(), db.writer.clone());
        assert!(expenses.list_expenses().unwrap().is_empty());
    }
}
