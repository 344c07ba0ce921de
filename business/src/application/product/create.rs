use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::repository::BrandRepository;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::validation::{ValidationError, Violation};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub brand_repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductDetails, ProductError> {
        authorize(&params.principal, Action::Create, Resource::Product, &[])?;
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let mut violations = Product::validate(
            &params.name,
            &params.registration_code,
            &params.barcode,
            &params.cost,
            &params.sell_price,
        );
        if self
            .repository
            .registration_code_exists(&params.registration_code, None)
            .await?
        {
            violations.push(Violation::new(
                "registration_code",
                "product.registration_code_taken",
            ));
        }
        if self.repository.barcode_exists(&params.barcode, None).await? {
            violations.push(Violation::new("barcode", "product.barcode_taken"));
        }
        let category = match self.category_repository.get_by_id(params.category_id).await {
            Ok(category) => Some(category),
            Err(RepositoryError::NotFound) => {
                violations.push(Violation::new("category_id", "product.category_not_found"));
                None
            }
            Err(err) => return Err(err.into()),
        };
        let brand = match self.brand_repository.get_by_id(params.brand_id).await {
            Ok(brand) => Some(brand),
            Err(RepositoryError::NotFound) => {
                violations.push(Violation::new("brand_id", "product.brand_not_found"));
                None
            }
            Err(err) => return Err(err.into()),
        };
        ValidationError::check(violations)?;

        // a missing reference always left a violation, so check() already returned
        let (Some(category), Some(brand)) = (category, brand) else {
            return Err(ProductError::NotFound);
        };

        let product = Product::new(NewProductProps {
            name: params.name,
            registration_code: params.registration_code,
            barcode: params.barcode,
            category_id: params.category_id,
            brand_id: params.brand_id,
            cost: params.cost,
            sell_price: params.sell_price,
            additional_info: params.additional_info,
            on_promotion: params.on_promotion,
        })?;
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(ProductDetails {
            product,
            category,
            brand,
            locations: Vec::new(),
        })
    }
}
