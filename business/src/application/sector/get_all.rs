use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::SectorSummary;
use crate::domain::sector::repository::SectorRepository;
use crate::domain::sector::use_cases::get_all::{GetAllSectorsParams, GetAllSectorsUseCase};

pub struct GetAllSectorsUseCaseImpl {
    pub repository: Arc<dyn SectorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllSectorsUseCase for GetAllSectorsUseCaseImpl {
    async fn execute(&self, params: GetAllSectorsParams) -> Result<Vec<SectorSummary>, SectorError> {
        authorize(&params.principal, Action::Read, Resource::Sector, &[])?;
        self.logger.debug("Listing sectors");

        Ok(self.repository.get_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::errors::RepositoryError;
    use crate::domain::sector::model::{Sector, SectorDetail};
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
    async fn should_list_sectors_with_bin_counts() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![SectorSummary {
                sector: Sector::from_repository(
                    Uuid::new_v4(),
                    "A".to_string(),
                    None,
                    chrono::Utc::now(),
                ),
                bin_count: 4,
            }])
        });

        let use_case = GetAllSectorsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let sectors = use_case
            .execute(GetAllSectorsParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
            })
            .await
            .unwrap();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].bin_count, 4);
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = GetAllSectorsUseCaseImpl {
            repository: Arc::new(MockSectorRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetAllSectorsParams {
                principal: Principal::Anonymous,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SectorError::Access(AccessError::Unauthenticated)
        ));
    }
}
