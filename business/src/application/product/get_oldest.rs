use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_oldest::{
    GetOldestProductsParams, GetOldestProductsUseCase, OLDEST_PRODUCTS_LIMIT,
};

pub struct GetOldestProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOldestProductsUseCase for GetOldestProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetOldestProductsParams,
    ) -> Result<Vec<ProductDetails>, ProductError> {
        authorize(&params.principal, Action::Read, Resource::Product, &[])?;
        self.logger.debug("Listing oldest products");
        let products = self.repository.get_oldest(OLDEST_PRODUCTS_LIMIT).await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::bin::model::StockLocation;
    use crate::domain::brand::model::{Brand, BrandSummary};
    use crate::domain::category::model::{Category, CategorySummary};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::filter::ProductFilter;
    use crate::domain::product::model::{Product, ProductSummary};
    use crate::domain::shared::page::{Page, PageRequest};
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<ProductDetails>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<ProductDetails, RepositoryError>;
            async fn get_summary(&self, id: Uuid) -> Result<ProductSummary, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_oldest(&self, limit: i64) -> Result<Vec<ProductDetails>, RepositoryError>;
            async fn get_on_promotion(&self, page: PageRequest) -> Result<Page<ProductDetails>, RepositoryError>;
            async fn toggle_promotion(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn locations_of(&self, id: Uuid) -> Result<Vec<StockLocation>, RepositoryError>;
            async fn registration_code_exists(&self, registration_code: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
            async fn barcode_exists(&self, barcode: &str, exclude: Option<Uuid>) -> Result<bool, RepositoryError>;
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

    fn sample_details() -> ProductDetails {
        let category_id = Uuid::new_v4();
        let brand_id = Uuid::new_v4();
        ProductDetails {
            product: Product::from_repository(
                Uuid::new_v4(),
                "Whole Bean Coffee 1kg".to_string(),
                "REG-0042".to_string(),
                "7891000100103".to_string(),
                category_id,
                brand_id,
                BigDecimal::from_str("10.00").unwrap(),
                BigDecimal::from_str("15.00").unwrap(),
                None,
                false,
                chrono::Utc::now(),
            ),
            category: CategorySummary {
                category: Category::from_repository(
                    category_id,
                    "Beverages".to_string(),
                    chrono::Utc::now(),
                ),
                product_count: 1,
            },
            brand: BrandSummary {
                brand: Brand::from_repository(
                    brand_id,
                    "Acme Foods".to_string(),
                    "12.345.678/0001-99".to_string(),
                    chrono::Utc::now(),
                ),
                product_count: 1,
            },
            locations: Vec::new(),
        }
    }

    #[tokio::test]
    async fn should_ask_repository_for_the_fixed_limit() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_oldest()
            .withf(|limit| *limit == OLDEST_PRODUCTS_LIMIT)
            .returning(|_| Ok(vec![sample_details()]));

        let use_case = GetOldestProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetOldestProductsParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
            })
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = GetOldestProductsUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetOldestProductsParams {
                principal: Principal::Anonymous,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProductError::Access(AccessError::Unauthenticated)
        ));
    }
}
