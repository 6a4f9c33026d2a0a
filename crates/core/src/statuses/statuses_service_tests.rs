#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result, ValidationError};
    use crate::statuses::{
        KnownStatus, NewStatus, Status, StatusRepositoryTrait, StatusService, StatusServiceTrait,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // --- Mock StatusRepository ---
    #[derive(Default)]
    struct MockStatusRepository {
        statuses: Mutex<Vec<Status>>,
    }

    impl MockStatusRepository {
        fn seeded() -> Self {
            let repo = Self::default();
            for known in [KnownStatus::Pending, KnownStatus::Paid] {
                repo.statuses.lock().unwrap().push(Status {
                    id: known.id().to_string(),
                    name: known.id().to_string(),
                    color: None,
                });
            }
            repo
        }
    }

    #[async_trait]
    impl StatusRepositoryTrait for MockStatusRepository {
        fn list_statuses(&self) -> Result<Vec<Status>> {
            Ok(self.statuses.lock().unwrap().clone())
        }

        fn find_status_by_name(&self, name: &str) -> Result<Option<Status>> {
            Ok(self
                .statuses
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.name == name)
                .cloned())
        }

        async fn insert_status(&self, new_status: NewStatus) -> Result<Status> {
            let mut statuses = self.statuses.lock().unwrap();
            let status = Status {
                id: format!("status-{}", statuses.len() + 1),
                name: new_status.name,
                color: new_status.color,
            };
            statuses.push(status.clone());
            Ok(status)
        }

        async fn delete_status(&self, status_id: String) -> Result<usize> {
            let mut statuses = self.statuses.lock().unwrap();
            let before = statuses.len();
            statuses.retain(|s| s.id != status_id);
            Ok(before - statuses.len())
        }
    }

    fn service() -> (Arc<MockStatusRepository>, StatusService) {
        let repo = Arc::new(MockStatusRepository::seeded());
        (repo.clone(), StatusService::new(repo))
    }

    #[tokio::test]
    async fn test_create_status_with_existing_name_conflicts() {
        let (repo, service) = service();

        let err = service
            .create_status(NewStatus {
                name: "pending".to_string(),
                color: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(repo.list_statuses().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_status_trims_name_before_conflict_check() {
        let (_repo, service) = service();

        let err = service
            .create_status(NewStatus {
                name: "  paid ".to_string(),
                color: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_create_status_requires_name() {
        let (_repo, service) = service();

        let err = service
            .create_status(NewStatus::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref f)) if f == "name"
        ));
    }

    #[tokio::test]
    async fn test_create_and_delete_status() {
        let (repo, service) = service();

        let created = service
            .create_status(NewStatus {
                name: "overdue".to_string(),
                color: Some("#ff0000".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "overdue");
        assert_eq!(service.get_statuses().unwrap().len(), 3);

        service.delete_status(&created.id).await.unwrap();
        assert!(repo.find_status_by_name("overdue").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_status_is_not_found() {
        let (_repo, service) = service();

        let err = service.delete_status("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_known_status_ids_are_stable() {
        assert_eq!(KnownStatus::Pending.id(), "pending");
        assert_eq!(KnownStatus::Paid.id(), "paid");
        assert_eq!(KnownStatus::Paid.to_string(), "paid");
        assert_eq!(KnownStatus::for_payment(true), KnownStatus::Paid);
        assert_eq!(KnownStatus::for_payment(false), KnownStatus::Pending);
    }

    #[test]
    fn test_new_status_accepts_legacy_field_name() {
        let parsed: NewStatus = serde_json::from_str(r#"{"statusName":"late"}"#).unwrap();
        assert_eq!(parsed.name, "late");
    }
}
