use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::repository::BrandRepository;
use crate::domain::brand::use_cases::delete::{DeleteBrandParams, DeleteBrandUseCase};
use crate::domain::logger::Logger;

pub struct DeleteBrandUseCaseImpl {
    pub repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBrandUseCase for DeleteBrandUseCaseImpl {
    async fn execute(&self, params: DeleteBrandParams) -> Result<(), BrandError> {
        authorize(&params.principal, Action::Delete, Resource::Brand, &[])?;
        self.logger.info(&format!("Deleting brand: {}", params.id));

        self.repository.get_by_id(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Brand deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::brand::model::{Brand, BrandSummary};
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub BrandRepo {}

        #[async_trait]
        impl BrandRepository for BrandRepo {
            async fn get_all(&self) -> Result<Vec<BrandSummary>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<BrandSummary, RepositoryError>;
            async fn save(&self, brand: &Brand) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
            async fn tax_id_exists(&self, tax_id: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
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

    fn stored(id: Uuid) -> BrandSummary {
        BrandSummary {
            brand: Brand::from_repository(
                id,
                "Acme Foods".to_string(),
                "12.345.678/0001-99".to_string(),
                chrono::Utc::now(),
            ),
            product_count: 0,
        }
    }

    #[tokio::test]
    async fn should_delete_brand_when_no_products_reference_it() {
        let mut mock_repo = MockBrandRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(stored(id)));
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteBrandUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteBrandParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_block_delete_while_products_reference_it() {
        let mut mock_repo = MockBrandRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(stored(id)));
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::ReferenceProtected));

        let use_case = DeleteBrandUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteBrandParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::InUse));
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = DeleteBrandUseCaseImpl {
            repository: Arc::new(MockBrandRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(DeleteBrandParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::Access(AccessError::Forbidden(_))));
    }
}
