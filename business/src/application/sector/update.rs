use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::{Sector, SectorSummary};
use crate::domain::sector::repository::SectorRepository;
use crate::domain::sector::use_cases::update::{UpdateSectorParams, UpdateSectorUseCase};
use crate::domain::validation::{ValidationError, Violation};

pub struct UpdateSectorUseCaseImpl {
    pub repository: Arc<dyn SectorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSectorUseCase for UpdateSectorUseCaseImpl {
    async fn execute(&self, params: UpdateSectorParams) -> Result<SectorSummary, SectorError> {
        authorize(&params.principal, Action::Update, Resource::Sector, &[])?;
        self.logger.info(&format!("Updating sector: {}", params.id));

        let existing = self.repository.get_detail(params.id).await?;

        let mut violations = Sector::validate(&params.letter);
        if self
            .repository
            .letter_exists(&params.letter, Some(params.id))
            .await?
        {
            violations.push(Violation::new("letter", "sector.letter_taken"));
        }
        ValidationError::check(violations)?;

        let sector = existing
            .sector
            .with_fields(params.letter, params.description);
        self.repository.save(&sector).await?;

        self.logger.info(&format!("Sector updated: {}", sector.id));
        Ok(SectorSummary {
            sector,
            bin_count: existing.bin_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::Principal;
    use crate::domain::errors::RepositoryError;
    use crate::domain::sector::model::SectorDetail;
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

    fn stored(id: Uuid) -> SectorDetail {
        SectorDetail {
            sector: Sector::from_repository(id, "A".to_string(), None, chrono::Utc::now()),
            bin_count: 6,
            bins: Vec::new(),
        }
    }

    #[tokio::test]
    async fn should_update_sector_and_keep_bin_count() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockSectorRepo::new();
        mock_repo.expect_get_detail().returning(|id| Ok(stored(id)));
        mock_repo.expect_letter_exists().returning(|_, _| Ok(false));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateSectorUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(UpdateSectorParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id,
                letter: "B".to_string(),
                description: Some("Dry goods".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(summary.sector.id, id);
        assert_eq!(summary.sector.letter, "B");
        assert_eq!(summary.bin_count, 6);
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_id() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo
            .expect_get_detail()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateSectorUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(UpdateSectorParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
                letter: "B".to_string(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectorError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_letter_used_by_another_sector() {
        let mut mock_repo = MockSectorRepo::new();
        mock_repo.expect_get_detail().returning(|id| Ok(stored(id)));
        mock_repo.expect_letter_exists().returning(|_, _| Ok(true));

        let use_case = UpdateSectorUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(UpdateSectorParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
                letter: "B".to_string(),
                description: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectorError::Validation(_)));
    }
}
