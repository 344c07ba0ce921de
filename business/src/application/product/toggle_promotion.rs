use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, PROMOTION_FIELD, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_promotion::{
    PromotionToggle, TogglePromotionParams, TogglePromotionUseCase,
};

pub struct TogglePromotionUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TogglePromotionUseCase for TogglePromotionUseCaseImpl {
    async fn execute(&self, params: TogglePromotionParams) -> Result<PromotionToggle, ProductError> {
        authorize(
            &params.principal,
            Action::Update,
            Resource::Product,
            &[PROMOTION_FIELD],
        )?;
        self.logger
            .info(&format!("Toggling promotion for product: {}", params.id));

        let product = self.repository.toggle_promotion(params.id).await?;
        let message = if product.on_promotion {
            "Product added to promotion."
        } else {
            "Product removed from promotion."
        };

        // The flipped row is authoritative for the message, so overwrite
        // whatever state the detail fetch happened to observe.
        let mut details = self.repository.get_by_id(params.id).await?;
        details.product = product;

        self.logger.info(&format!(
            "Promotion toggled for product {}: on_promotion={}",
            params.id, details.product.on_promotion
        ));
        Ok(PromotionToggle {
            message: message.to_string(),
            product: details,
        })
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
    use crate::domain::product::model::{Product, ProductDetails, ProductSummary};
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

    fn stored_product(id: Uuid, on_promotion: bool) -> Product {
        Product::from_repository(
            id,
            "Whole Bean Coffee 1kg".to_string(),
            "REG-0042".to_string(),
            "7891000100103".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            BigDecimal::from_str("10.00").unwrap(),
            BigDecimal::from_str("15.00").unwrap(),
            None,
            on_promotion,
            chrono::Utc::now(),
        )
    }

    fn stored_details(product: Product) -> ProductDetails {
        let category_id = product.category_id;
        let brand_id = product.brand_id;
        ProductDetails {
            product,
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
    async fn should_report_added_when_toggle_turns_promotion_on() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_toggle_promotion()
            .returning(|id| Ok(stored_product(id, true)));
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_details(stored_product(id, true))));

        let use_case = TogglePromotionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let toggle = use_case
            .execute(TogglePromotionParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id,
            })
            .await
            .unwrap();
        assert_eq!(toggle.message, "Product added to promotion.");
        assert!(toggle.product.product.on_promotion);
    }

    #[tokio::test]
    async fn should_report_removed_when_toggle_turns_promotion_off() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_toggle_promotion()
            .returning(|id| Ok(stored_product(id, false)));
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_details(stored_product(id, false))));

        let use_case = TogglePromotionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let toggle = use_case
            .execute(TogglePromotionParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id,
            })
            .await
            .unwrap();
        assert_eq!(toggle.message, "Product removed from promotion.");
        assert!(!toggle.product.product.on_promotion);
    }

    #[tokio::test]
    async fn should_keep_message_aligned_with_flipped_row() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_toggle_promotion()
            .returning(|id| Ok(stored_product(id, true)));
        // Detail fetch observes a stale row.
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_details(stored_product(id, false))));

        let use_case = TogglePromotionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let toggle = use_case
            .execute(TogglePromotionParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id,
            })
            .await
            .unwrap();
        assert_eq!(toggle.message, "Product added to promotion.");
        assert!(toggle.product.product.on_promotion);
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = TogglePromotionUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(TogglePromotionParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProductError::Access(AccessError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_toggle_promotion()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = TogglePromotionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(TogglePromotionParams {
                principal: Principal::known(Uuid::new_v4(), "warehouse-admin", true),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound));
    }
}
