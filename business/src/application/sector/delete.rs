use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::repository::SectorRepository;
use crate::domain::sector::use_cases::delete::{DeleteSectorParams, DeleteSectorUseCase};

pub struct DeleteSectorUseCaseImpl {
    pub repository: Arc<dyn SectorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteSectorUseCase for DeleteSectorUseCaseImpl {
    async fn execute(&self, params: DeleteSectorParams) -> Result<(), SectorError> {
        authorize(&params.principal, Action::Delete, Resource::Sector, &[])?;
        self.logger.info(&format!("Deleting sector: {}", params.id));

        self.repository.get_by_id(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Sector deleted with its bins: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::errors::RepositoryError;
    use crate::domain::sector::model::{Sector, SectorDetail, SectorSummary};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SectorRepo {}

        #[async_trait]
        impl SectorRepository for SectorRepo {
            async fn get_all(&self) -> Result<Vec<SectorSummary>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Sector, RepositoryError>;
            async fn get_detail(&self, id: Uuid) -> Result<SectorDetail, RepositoryError>;
            async fn save(&self, sector: &Sector) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn letter_exists(&self, letter: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
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

    #[tokio::test]
    async fn should_delete_sector_even_when_it_has_bins() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Sector::from_repository(
                id,
                "A".to_string(),
                None,
                chrono::Utc::now(),
            ))
        });
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteSectorUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteSectorParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_not_found_before_deleting() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteSectorUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteSectorParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectorError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = DeleteSectorUseCaseImpl {
            repository: Arc::new(MockSectorRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteSectorParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SectorError::Access(AccessError::Forbidden(_))
        ));
    }
}
