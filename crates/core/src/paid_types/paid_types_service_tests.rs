#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::paid_types::{
        NewPaidType, PaidType, PaidTypeRepositoryTrait, PaidTypeService, PaidTypeServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockPaidTypeRepository {
        paid_types: Mutex<Vec<PaidType>>,
    }

    #[async_trait]
    impl PaidTypeRepositoryTrait for MockPaidTypeRepository {
        fn list_paid_types(&self) -> Result<Vec<PaidType>> {
            Ok(self.paid_types.lock().unwrap().clone())
        }

        fn find_paid_type_by_name(&self, name: &str) -> Result<Option<PaidType>> {
            Ok(self
                .paid_types
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.name == name)
                .cloned())
        }

        async fn insert_paid_type(&self, new_paid_type: NewPaidType) -> Result<PaidType> {
            let mut paid_types = self.paid_types.lock().unwrap();
            let paid_type = PaidType {
                id: format!("pt-{}", paid_types.len() + 1),
                name: new_paid_type.name,
                color: new_paid_type.color,
                created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            };
            paid_types.push(paid_type.clone());
            Ok(paid_type)
        }

        async fn delete_paid_type(&self, paid_type_id: String) -> Result<usize> {
            let mut paid_types = self.paid_types.lock().unwrap();
            let before = paid_types.len();
            paid_types.retain(|p| p.id != paid_type_id);
            Ok(before - paid_types.len())
        }
    }

    #[tokio::test]
    async fn test_create_paid_type_and_reject_duplicate() {
        let repo = Arc::new(MockPaidTypeRepository::default());
        let service = PaidTypeService::new(repo.clone());

        let card = service
            .create_paid_type(NewPaidType {
                name: "Credit card".to_string(),
                color: Some("#3366ff".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(card.name, "Credit card");

        let err = service
            .create_paid_type(NewPaidType {
                name: "Credit card".to_string(),
                color: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(service.get_paid_types().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_paid_type_name_is_rejected() {
        let service = PaidTypeService::new(Arc::new(MockPaidTypeRepository::default()));

        let err = service
            .create_paid_type(NewPaidType {
                name: "   ".to_string(),
                color: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_paid_type() {
        let repo = Arc::new(MockPaidTypeRepository::default());
        let service = PaidTypeService::new(repo.clone());
        let cash = service
            .create_paid_type(NewPaidType {
                name: "Cash".to_string(),
                color: None,
            })
            .await
            .unwrap();

        service.delete_paid_type(&cash.id).await.unwrap();
        assert!(repo.list_paid_types().unwrap().is_empty());

        let err = service.delete_paid_type(&cash.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_new_paid_type_accepts_legacy_type_field() {
        let parsed: NewPaidType =
            serde_json::from_str(r##"{"type":"Pix","color":"#00aa00"}"##).unwrap();
        assert_eq!(parsed.name, "Pix");
        assert_eq!(parsed.color.as_deref(), Some("#00aa00"));
    }
}
