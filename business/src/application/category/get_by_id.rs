use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::CategorySummary;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_id::{GetCategoryByIdParams, GetCategoryByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetCategoryByIdUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryByIdUseCase for GetCategoryByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetCategoryByIdParams,
    ) -> Result<CategorySummary, CategoryError> {
        authorize(&params.principal, Action::Read, Resource::Category, &[])?;
        self.logger
            .debug(&format!("Fetching category: {}", params.id));

        Ok(self.repository.get_by_id(params.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::Principal;
    use crate::domain::category::model::Category;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_all(&self) -> Result<Vec<CategorySummary>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CategorySummary, RepositoryError>;
            async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
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
    async fn should_return_category_with_product_count() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(CategorySummary {
                category: Category::from_repository(
                    id,
                    "Beverages".to_string(),
                    chrono::Utc::now(),
                ),
                product_count: 12,
            })
        });

        let use_case = GetCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetCategoryByIdParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id,
            })
            .await
            .unwrap();
        assert_eq!(summary.category.id, id);
        assert_eq!(summary.product_count, 12);
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_id() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetCategoryByIdParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryError::NotFound));
    }
}
