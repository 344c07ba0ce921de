use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::SectorDetail;
use crate::domain::sector::repository::SectorRepository;
use crate::domain::sector::use_cases::get_by_id::{GetSectorByIdParams, GetSectorByIdUseCase};

pub struct GetSectorByIdUseCaseImpl {
    pub repository: Arc<dyn SectorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSectorByIdUseCase for GetSectorByIdUseCaseImpl {
    async fn execute(&self, params: GetSectorByIdParams) -> Result<SectorDetail, SectorError> {
        authorize(&params.principal, Action::Read, Resource::Sector, &[])?;
        self.logger.debug(&format!("Fetching sector: {}", params.id));

        Ok(self.repository.get_detail(params.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::Principal;
    use crate::domain::bin::model::BinOverview;
    use crate::domain::errors::RepositoryError;
    use crate::domain::sector::model::{Sector, SectorSummary};
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
    async fn should_return_sector_with_embedded_bins() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockSectorRepo::new();
        mock_repo.expect_get_detail().returning(|id| {
            Ok(SectorDetail {
                sector: Sector::from_repository(id, "A".to_string(), None, chrono::Utc::now()),
                bin_count: 1,
                bins: vec![BinOverview {
                    id: Uuid::new_v4(),
                    code: "11".to_string(),
                    product_name: Some("Whole Bean Coffee 1kg".to_string()),
                    quantity: 3,
                    full_location: "A-11".to_string(),
                    updated_at: chrono::Utc::now(),
                }],
            })
        });

        let use_case = GetSectorByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let detail = use_case
            .execute(GetSectorByIdParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id,
            })
            .await
            .unwrap();
        assert_eq!(detail.sector.id, id);
        assert_eq!(detail.bins.len(), 1);
        assert_eq!(detail.bins[0].full_location, "A-11");
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_id() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo
            .expect_get_detail()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetSectorByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetSectorByIdParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectorError::NotFound));
    }
}
