use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, PROMOTION_FIELD, Resource, authorize};
use crate::domain::brand::repository::BrandRepository;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::validation::{ValidationError, Violation};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub brand_repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<ProductDetails, ProductError> {
        // Touching the promotion flag at all is what the policy gates,
        // not whether the value actually differs.
        let mut changed_fields: Vec<&str> = Vec::new();
        if params.on_promotion.is_some() {
            changed_fields.push(PROMOTION_FIELD);
        }
        authorize(
            &params.principal,
            Action::Update,
            Resource::Product,
            &changed_fields,
        )?;
        self.logger.info(&format!("Updating product: {}", params.id));

        let existing = self.repository.get_by_id(params.id).await?;
        let current = existing.product;

        let name = params.name.unwrap_or(current.name);
        let registration_code = params
            .registration_code
            .unwrap_or(current.registration_code);
        let barcode = params.barcode.unwrap_or(current.barcode);
        let category_id = params.category_id.unwrap_or(current.category_id);
        let brand_id = params.brand_id.unwrap_or(current.brand_id);
        let cost = params.cost.unwrap_or(current.cost);
        let sell_price = params.sell_price.unwrap_or(current.sell_price);
        let additional_info = params.additional_info.or(current.additional_info);
        let on_promotion = params.on_promotion.unwrap_or(current.on_promotion);

        let mut violations =
            Product::validate(&name, &registration_code, &barcode, &cost, &sell_price);
        if self
            .repository
            .registration_code_exists(&registration_code, Some(params.id))
            .await?
        {
            violations.push(Violation::new(
                "registration_code",
                "product.registration_code_taken",
            ));
        }
        if self
            .repository
            .barcode_exists(&barcode, Some(params.id))
            .await?
        {
            violations.push(Violation::new("barcode", "product.barcode_taken"));
        }
        let category = if category_id == existing.category.category.id {
            Some(existing.category)
        } else {
            match self.category_repository.get_by_id(category_id).await {
                Ok(category) => Some(category),
                Err(RepositoryError::NotFound) => {
                    violations.push(Violation::new("category_id", "product.category_not_found"));
                    None
                }
                Err(err) => return Err(err.into()),
            }
        };
        let brand = if brand_id == existing.brand.brand.id {
            Some(existing.brand)
        } else {
            match self.brand_repository.get_by_id(brand_id).await {
                Ok(brand) => Some(brand),
                Err(RepositoryError::NotFound) => {
                    violations.push(Violation::new("brand_id", "product.brand_not_found"));
                    None
                }
                Err(err) => return Err(err.into()),
            }
        };
        ValidationError::check(violations)?;

        // a missing reference always left a violation, so check() already returned
        let (Some(category), Some(brand)) = (category, brand) else {
            return Err(ProductError::NotFound);
        };

        let product = Product::from_repository(
            params.id,
            name,
            registration_code,
            barcode,
            category_id,
            brand_id,
            cost,
            sell_price,
            additional_info,
            on_promotion,
            current.created_at,
        );
        self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(ProductDetails {
            product,
            category,
            brand,
            locations: existing.locations,
        })
    }
}
