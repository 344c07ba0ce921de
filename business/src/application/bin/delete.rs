use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::delete::{DeleteBinParams, DeleteBinUseCase};
use crate::domain::logger::Logger;

pub struct DeleteBinUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBinUseCase for DeleteBinUseCaseImpl {
    async fn execute(&self, params: DeleteBinParams) -> Result<(), BinError> {
        authorize(&params.principal, Action::Delete, Resource::Bin, &[])?;
        self.logger.info(&format!("Deleting bin: {}", params.id));

        self.repository.get_by_id(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Bin deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::bin::model::{Bin, BinDetails, BinFilter};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::page::{Page, PageRequest};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub BinRepo {}

        #[async_trait]
        impl BinRepository for BinRepo {
            async fn get_all(&self, filter: &BinFilter) -> Result<Vec<BinDetails>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<BinDetails, RepositoryError>;
            async fn save(&self, bin: &Bin) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_empty(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError>;
            async fn get_occupied(&self, page: PageRequest) -> Result<Page<BinDetails>, RepositoryError>;
            async fn code_exists_in_sector(&self, sector_id: Uuid, code: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_details(id: Uuid) -> BinDetails {
        let now = chrono::Utc::now();
        BinDetails {
            bin: Bin::from_repository(
                id,
                "11".to_string(),
                Uuid::new_v4(),
                "A".to_string(),
                None,
                0,
                now,
                now,
            ),
            product: None,
        }
    }

    #[tokio::test]
    async fn should_delete_bin() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_details(id)));
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteBinParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_bin() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteBinParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BinError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = DeleteBinUseCaseImpl {
            repository: Arc::new(MockBinRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteBinParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BinError::Access(AccessError::Forbidden(_))));
    }
}
