use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::{Bin, BinDetails, NewBinProps};
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::create::{CreateBinParams, CreateBinUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sector::repository::SectorRepository;
use crate::domain::validation::{ValidationError, Violation};

pub struct CreateBinUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub sector_repository: Arc<dyn SectorRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBinUseCase for CreateBinUseCaseImpl {
    async fn execute(&self, params: CreateBinParams) -> Result<BinDetails, BinError> {
        authorize(&params.principal, Action::Create, Resource::Bin, &[])?;
        self.logger.info(&format!(
            "Creating bin {} in sector {}",
            params.code, params.sector_id
        ));

        let mut violations = Bin::validate(&params.code, params.product_id, params.quantity);
        let sector = match self.sector_repository.get_by_id(params.sector_id).await {
            Ok(sector) => Some(sector),
            Err(RepositoryError::NotFound) => {
                violations.push(Violation::new("sector_id", "bin.sector_not_found"));
                None
            }
            Err(err) => return Err(err.into()),
        };
        if sector.is_some()
            && self
                .repository
                .code_exists_in_sector(params.sector_id, &params.code, None)
                .await?
        {
            violations.push(Violation::new("code", "bin.code_taken"));
        }
        let mut product = None;
        if let Some(product_id) = params.product_id {
            match self.product_repository.get_summary(product_id).await {
                Ok(summary) => product = Some(summary),
                Err(RepositoryError::NotFound) => {
                    violations.push(Violation::new("product_id", "bin.product_not_found"));
                }
                Err(err) => return Err(err.into()),
            }
        }
        ValidationError::check(violations)?;

        // a missing sector always left a violation, so check() already returned
        let Some(sector) = sector else {
            return Err(BinError::NotFound);
        };

        let bin = Bin::new(NewBinProps {
            code: params.code,
            sector_id: params.sector_id,
            sector_letter: sector.letter,
            product_id: params.product_id,
            quantity: params.quantity,
        })?;
        self.repository.save(&bin).await?;

        self.logger
            .info(&format!("Bin created: {} at {}", bin.id, bin.full_location()));
        Ok(BinDetails { bin, product })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AccessError;
    use crate::domain::auth::model::Principal;
    use crate::domain::bin::model::BinFilter;
    use crate::domain::product::filter::ProductFilter;
    use crate::domain::product::model::{Product, ProductDetails, ProductSummary};
    use crate::domain::sector::model::{Sector, SectorDetail, SectorSummary};
    use crate::domain::bin::model::StockLocation;
    use crate::domain::shared::page::{Page, PageRequest};
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

    fn stored_sector(id: Uuid) -> Sector {
        Sector::from_repository(id, "A".to_string(), None, chrono::Utc::now())
    }

    fn stored_product_summary(id: Uuid) -> ProductSummary {
        ProductSummary {
            id,
            name: "Whole Bean Coffee 1kg".to_string(),
            registration_code: "REG-0042".to_string(),
            barcode: "7891000100103".to_string(),
            category_name: "Beverages".to_string(),
            brand_name: "Acme Foods".to_string(),
            cost: BigDecimal::from_str("10.00").unwrap(),
            sell_price: BigDecimal::from_str("15.00").unwrap(),
            on_promotion: false,
            created_at: chrono::Utc::now(),
        }
    }

    fn staff() -> Principal {
        Principal::known(Uuid::new_v4(), "warehouse-admin", true)
    }

    #[tokio::test]
    async fn should_create_empty_bin() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_code_exists_in_sector()
            .returning(|_, _, _| Ok(false));
        mock_repo.expect_save().returning(|_| Ok(()));

        let mut mock_sectors = MockSectorRepo::new();
        mock_sectors
            .expect_get_by_id()
            .returning(|id| Ok(stored_sector(id)));

        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            sector_repository: Arc::new(mock_sectors),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(CreateBinParams {
                principal: staff(),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: None,
                quantity: 0,
            })
            .await
            .unwrap();
        assert_eq!(details.bin.full_location(), "A-11");
        assert!(details.bin.is_empty());
        assert!(details.product.is_none());
    }

    #[tokio::test]
    async fn should_attach_product_summary_for_stocked_bin() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_code_exists_in_sector()
            .returning(|_, _, _| Ok(false));
        mock_repo.expect_save().returning(|_| Ok(()));

        let mut mock_sectors = MockSectorRepo::new();
        mock_sectors
            .expect_get_by_id()
            .returning(|id| Ok(stored_sector(id)));

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_summary()
            .returning(|id| Ok(stored_product_summary(id)));

        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            sector_repository: Arc::new(mock_sectors),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(CreateBinParams {
                principal: staff(),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: Some(product_id),
                quantity: 5,
            })
            .await
            .unwrap();
        assert_eq!(details.bin.quantity, 5);
        assert_eq!(details.product.unwrap().id, product_id);
    }

    #[tokio::test]
    async fn should_reject_duplicate_code_within_sector() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_code_exists_in_sector()
            .returning(|_, _, _| Ok(true));

        let mut mock_sectors = MockSectorRepo::new();
        mock_sectors
            .expect_get_by_id()
            .returning(|id| Ok(stored_sector(id)));

        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            sector_repository: Arc::new(mock_sectors),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(CreateBinParams {
                principal: staff(),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: None,
                quantity: 0,
            })
            .await
            .unwrap_err();
        let BinError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(validation.violations[0].message, "bin.code_taken");
    }

    #[tokio::test]
    async fn should_reject_unknown_sector_as_field_error() {
        let mut mock_sectors = MockSectorRepo::new();
        mock_sectors
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(MockBinRepo::new()),
            sector_repository: Arc::new(mock_sectors),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(CreateBinParams {
                principal: staff(),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: None,
                quantity: 0,
            })
            .await
            .unwrap_err();
        let BinError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(validation.violations[0].field, "sector_id");
    }

    #[tokio::test]
    async fn should_reject_quantity_without_product() {
        let mut mock_repo = MockBinRepo::new();
        mock_repo
            .expect_code_exists_in_sector()
            .returning(|_, _, _| Ok(false));

        let mut mock_sectors = MockSectorRepo::new();
        mock_sectors
            .expect_get_by_id()
            .returning(|id| Ok(stored_sector(id)));

        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(mock_repo),
            sector_repository: Arc::new(mock_sectors),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(CreateBinParams {
                principal: staff(),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: None,
                quantity: 5,
            })
            .await
            .unwrap_err();
        let BinError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            validation.violations[0].message,
            "bin.quantity_requires_product"
        );
    }

    #[tokio::test]
    async fn should_reject_non_staff_caller() {
        let use_case = CreateBinUseCaseImpl {
            repository: Arc::new(MockBinRepo::new()),
            sector_repository: Arc::new(MockSectorRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(CreateBinParams {
                principal: Principal::known(Uuid::new_v4(), "clerk", false),
                code: "11".to_string(),
                sector_id: Uuid::new_v4(),
                product_id: None,
                quantity: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BinError::Access(AccessError::Forbidden(_))));
    }
}
