use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::BinDetails;
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::get_occupied::{GetOccupiedBinsParams, GetOccupiedBinsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::page::Page;

pub struct GetOccupiedBinsUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOccupiedBinsUseCase for GetOccupiedBinsUseCaseImpl {
    async fn execute(&self, params: GetOccupiedBinsParams) -> Result<Page<BinDetails>, BinError> {
        authorize(&params.principal, Action::Read, Resource::Bin, &[])?;
        self.logger.debug(&format!(
            "Listing occupied bins, page {}",
            params.page.page()
        ));
        let page = self.repository.get_occupied(params.page).await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::bin::model::{Bin, BinFilter};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductSummary;
    use crate::domain::shared::page::PageRequest;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
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

    fn occupied_bin() -> BinDetails {
        let now = chrono::Utc::now();
        let product_id = Uuid::new_v4();
        BinDetails {
            bin: Bin::from_repository(
                Uuid::new_v4(),
                "11".to_string(),
                Uuid::new_v4(),
                "A".to_string(),
                Some(product_id),
                5,
                now,
                now,
            ),
            product: Some(ProductSummary {
                id: product_id,
                name: "Whole Bean Coffee 1kg".to_string(),
                registration_code: "REG-0042".to_string(),
                barcode: "7891000100103".to_string(),
                category_name: "Beverages".to_string(),
                brand_name: "Acme Foods".to_string(),
                cost: BigDecimal::from_str("10.00").unwrap(),
                sell_price: BigDecimal::from_str("15.00").unwrap(),
                on_promotion: false,
                created_at: now,
            }),
        }
    }

    #[tokio::test]
    async fn should_return_requested_page() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_get_occupied()
            .withf(|page| page.page() == 1)
            .returning(|_| {
                Ok(Page {
                    items: vec![occupied_bin()],
                    total: 1,
                })
            });

        let use_case = GetOccupiedBinsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetOccupiedBinsParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                page: PageRequest::new(None, None),
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert!(!page.items[0].bin.is_empty());
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = GetOccupiedBinsUseCaseImpl {
            repository: Arc::new(MockBinRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetOccupiedBinsParams {
                principal: Principal::Anonymous,
                page: PageRequest::new(None, None),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BinError::Access(AccessError::Unauthenticated)
        ));
    }
}
