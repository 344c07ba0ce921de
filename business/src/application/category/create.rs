use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;
use crate::domain::validation::{ValidationError, Violation};

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        authorize(&params.principal, Action::Create, Resource::Category, &[])?;
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let mut violations = Category::validate(&params.name);
        if self.repository.name_exists(&params.name, None).await? {
            violations.push(Violation::new("name", "category.name_taken"));
        }
        ValidationError::check(violations)?;

        let category = Category::new(params.name)?;
        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::category::model::CategorySummary;
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

    fn staff() -> Principal {
        Principal::known(Uuid::new_v4(), "warehouse-admin", true)
    }

    fn params(principal: Principal, name: &str) -> CreateCategoryParams {
        CreateCategoryParams {
            principal,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_category_when_name_unique() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(false));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(params(staff(), "Beverages"))
            .await
            .unwrap();
        assert_eq!(category.name, "Beverages");
    }

    #[tokio::test]
    async fn should_reject_duplicate_name() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(true));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(params(staff(), "Beverages"))
            .await
            .unwrap_err();
        match err {
            CategoryError::Validation(validation) => {
                assert_eq!(validation.violations[0].message, "category.name_taken");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_name_exists().returning(|_, _| Ok(false));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case.execute(params(staff(), "   ")).await.unwrap_err();
        assert!(matches!(err, CategoryError::Validation(_)));
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let clerk = Principal::known(Uuid::new_v4(), "clerk", false);
        let err = use_case.execute(params(clerk, "Beverages")).await.unwrap_err();
        assert!(matches!(
            err,
            CategoryError::Access(AccessError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(params(Principal::Anonymous, "Beverages"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CategoryError::Access(AccessError::Unauthenticated)
        ));
    }
}
