#[cfg(test)]
mod tests {
    use crate::categories::{
        Category, CategoryDraft, CategoryOverview, CategoryRepositoryTrait, CreatedCategory,
    };
    use crate::errors::{Error, Result, ValidationError};
    use crate::expenses::{
        MonthlyExpense, MonthlyExpenseChanges, MonthlyExpenseDetails, MonthlyExpenseInsert,
        MonthlyExpenseRepositoryTrait, MonthlyExpenseService, MonthlyExpenseServiceTrait,
        MonthlyExpenseUpdate, NewMonthlyExpense, StatusChange,
    };
    use crate::statuses::KnownStatus;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- Mock CategoryRepository (read side only) ---
    struct MockCategoryRepository {
        categories: Vec<Category>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn list_categories(&self) -> Result<Vec<CategoryOverview>> {
            Ok(Vec::new())
        }

        fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
            Ok(self.categories.iter().find(|c| c.id == category_id).cloned())
        }

        async fn create_category(
            &self,
            _draft: CategoryDraft,
            _month: NaiveDate,
        ) -> Result<CreatedCategory> {
            unimplemented!()
        }

        async fn update_category(
            &self,
            _category_id: String,
            _draft: CategoryDraft,
            _month: NaiveDate,
        ) -> Result<Category> {
            unimplemented!()
        }

        async fn delete_category(&self, _category_id: String) -> Result<usize> {
            unimplemented!()
        }
    }

    // --- Mock MonthlyExpenseRepository ---
    #[derive(Default)]
    struct MockExpenseRepository {
        expenses: Mutex<Vec<MonthlyExpense>>,
    }

    impl MockExpenseRepository {
        fn details(expense: &MonthlyExpense) -> MonthlyExpenseDetails {
            MonthlyExpenseDetails::new(
                expense.clone(),
                "Groceries".to_string(),
                None,
                None,
                expense.status_id.clone(),
            )
        }
    }

    #[async_trait]
    impl MonthlyExpenseRepositoryTrait for MockExpenseRepository {
        fn list_expenses(&self) -> Result<Vec<MonthlyExpenseDetails>> {
            let mut rows: Vec<MonthlyExpenseDetails> = self
                .expenses
                .lock()
                .unwrap()
                .iter()
                .map(Self::details)
                .collect();
            rows.sort_by(|a, b| b.reference_month.cmp(&a.reference_month));
            Ok(rows)
        }

        fn get_expense(&self, expense_id: &str) -> Result<Option<MonthlyExpenseDetails>> {
            Ok(self
                .expenses
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == expense_id)
                .map(Self::details))
        }

        async fn insert_expense(&self, expense: MonthlyExpenseInsert) -> Result<MonthlyExpense> {
            let mut expenses = self.expenses.lock().unwrap();
            let row = MonthlyExpense {
                id: format!("exp-{}", expenses.len() + 1),
                category_id: expense.category_id,
                reference_month: expense.reference_month,
                spent_amount: expense.spent_amount,
                planned_amount: expense.planned_amount,
                payment_date: expense.payment_date,
                paid_type_id: expense.paid_type_id,
                status_id: Some(expense.status.id().to_string()),
                description: expense.description,
                file: expense.file,
                created_at: timestamp(),
            };
            expenses.push(row.clone());
            Ok(row)
        }

        async fn update_expense(
            &self,
            expense_id: String,
            changes: MonthlyExpenseChanges,
        ) -> Result<MonthlyExpense> {
            let mut expenses = self.expenses.lock().unwrap();
            let row = expenses
                .iter_mut()
                .find(|e| e.id == expense_id)
                .ok_or_else(|| Error::not_found("Monthly expense", &expense_id))?;
            row.spent_amount = changes.spent_amount;
            row.payment_date = changes.payment_date;
            row.paid_type_id = changes.paid_type_id;
            row.status_id = Some(changes.status.id().to_string());
            row.description = changes.description;
            Ok(row.clone())
        }

        async fn delete_expense(&self, expense_id: String) -> Result<usize> {
            let mut expenses = self.expenses.lock().unwrap();
            let before = expenses.len();
            expenses.retain(|e| e.id != expense_id);
            Ok(before - expenses.len())
        }
    }

    fn service() -> (Arc<MockExpenseRepository>, MonthlyExpenseService) {
        let categories = Arc::new(MockCategoryRepository {
            categories: vec![Category {
                id: "cat-1".to_string(),
                name: "Groceries".to_string(),
                planned_amount: dec!(800),
                color: "#00aa00".to_string(),
                description: None,
                created_at: timestamp(),
                updated_at: timestamp(),
            }],
        });
        let repo = Arc::new(MockExpenseRepository::default());
        (repo.clone(), MonthlyExpenseService::new(repo, categories))
    }

    fn supermarket_run() -> NewMonthlyExpense {
        NewMonthlyExpense {
            category_id: Some("cat-1".to_string()),
            reference_month: Some("2024-03-17".to_string()),
            paid_type_id: Some("pt-card".to_string()),
            spent_amount: Some(dec!(312.40)),
            payment_date: Some("2024-03-17".to_string()),
            file: None,
            description: Some("Weekly shop".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_expense_snapshots_plan_and_marks_paid() {
        let (_repo, service) = service();

        let created = service.create_expense(supermarket_run()).await.unwrap();

        assert_eq!(created.planned_amount, dec!(800));
        assert_eq!(created.spent_amount, Some(dec!(312.40)));
        assert_eq!(created.difference(), Some(dec!(487.60)));
        assert_eq!(created.reference_month, date(2024, 3, 1));
        assert_eq!(created.payment_date, Some(date(2024, 3, 17)));
        assert_eq!(created.status_id.as_deref(), Some(KnownStatus::Paid.id()));
    }

    #[tokio::test]
    async fn test_create_expense_for_unknown_category_is_dependency_error() {
        let (repo, service) = service();

        let err = service
            .create_expense(NewMonthlyExpense {
                category_id: Some("cat-404".to_string()),
                ..supermarket_run()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Dependency(_)));
        assert!(repo.expenses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_expense_validates_input() {
        let (_repo, service) = service();

        let err = service
            .create_expense(NewMonthlyExpense {
                payment_date: Some("17/03/2024".to_string()),
                ..supermarket_run()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidDate { ref field, .. }) if field == "paymentDate"
        ));

        let err = service
            .create_expense(NewMonthlyExpense {
                spent_amount: None,
                ..supermarket_run()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref f)) if f == "spentAmount"
        ));

        let err = service
            .create_expense(NewMonthlyExpense {
                spent_amount: Some(dec!(-1)),
                ..supermarket_run()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_update_expense_derives_status_from_payment() {
        let (_repo, service) = service();
        let created = service.create_expense(supermarket_run()).await.unwrap();

        let reopened = service
            .update_expense(
                &created.id,
                MonthlyExpenseUpdate {
                    spent_amount: None,
                    payment_date: None,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(reopened.status_id.as_deref(), Some(KnownStatus::Pending.id()));
        assert_eq!(reopened.difference(), None);

        let paid = service
            .update_expense(
                &created.id,
                MonthlyExpenseUpdate {
                    spent_amount: Some(dec!(820)),
                    payment_date: Some("2024-03-28".to_string()),
                    paid_type_id: Some("pt-cash".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(paid.status_id.as_deref(), Some(KnownStatus::Paid.id()));
        assert_eq!(paid.difference(), Some(dec!(-20)));
        assert_eq!(paid.paid_type_id.as_deref(), Some("pt-cash"));
    }

    #[tokio::test]
    async fn test_update_expense_keeps_explicit_status() {
        let (_repo, service) = service();
        let created = service.create_expense(supermarket_run()).await.unwrap();

        let updated = service
            .update_expense(
                &created.id,
                MonthlyExpenseUpdate {
                    spent_amount: Some(dec!(100)),
                    payment_date: Some("2024-03-20".to_string()),
                    status_id: Some("disputed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status_id.as_deref(), Some("disputed"));
    }

    #[tokio::test]
    async fn test_get_update_and_delete_missing_expense() {
        let (_repo, service) = service();

        assert!(matches!(
            service.get_expense("nope").unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            service
                .update_expense("nope", MonthlyExpenseUpdate::default())
                .await
                .unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            service.delete_expense("nope").await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_expenses_newest_month_first() {
        let (_repo, service) = service();
        service
            .create_expense(NewMonthlyExpense {
                reference_month: Some("2024-01-05".to_string()),
                ..supermarket_run()
            })
            .await
            .unwrap();
        let march = service.create_expense(supermarket_run()).await.unwrap();

        let listed = service.get_expenses().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, march.id);
        assert_eq!(listed[0].difference, Some(dec!(487.60)));

        service.delete_expense(&march.id).await.unwrap();
        assert_eq!(service.get_expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_new_expense_accepts_legacy_paid_id_field() {
        let parsed: NewMonthlyExpense = serde_json::from_str(
            r#"{"categoryId":"cat-1","referenceMonth":"2024-03-01","paidId":"pt-1","spentAmount":10,"paymentDate":"2024-03-02"}"#,
        )
        .unwrap();
        assert_eq!(parsed.paid_type_id.as_deref(), Some("pt-1"));
        assert_eq!(parsed.spent_amount, Some(dec!(10)));
    }

    #[test]
    fn test_update_marks_status_as_derived_or_chosen() {
        let derived = MonthlyExpenseUpdate {
            payment_date: Some("2024-03-20".to_string()),
            status_id: Some("  ".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(derived.status, StatusChange::Derived(KnownStatus::Paid));

        let chosen = MonthlyExpenseUpdate {
            status_id: Some("disputed".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(chosen.status, StatusChange::Chosen("disputed".to_string()));
        assert_eq!(chosen.status.id(), "disputed");
    }
}
