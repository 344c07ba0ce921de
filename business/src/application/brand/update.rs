use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::{Brand, BrandSummary};
use crate::domain::brand::repository::BrandRepository;
use crate::domain::brand::use_cases::update::{UpdateBrandParams, UpdateBrandUseCase};
use crate::domain::logger::Logger;
use crate::domain::validation::{ValidationError, Violation};

pub struct UpdateBrandUseCaseImpl {
    pub repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBrandUseCase for UpdateBrandUseCaseImpl {
    async fn execute(&self, params: UpdateBrandParams) -> Result<BrandSummary, BrandError> {
        authorize(&params.principal, Action::Update, Resource::Brand, &[])?;
        self.logger.info(&format!("Updating brand: {}", params.id));

        let existing = self.repository.get_by_id(params.id).await?;

        let mut violations = Brand::validate(&params.name, &params.tax_id);
        if self
            .repository
            .name_exists(&params.name, Some(params.id))
            .await?
        {
            violations.push(Violation::new("name", "brand.name_taken"));
        }
        if self
            .repository
            .tax_id_exists(&params.tax_id, Some(params.id))
            .await?
        {
            violations.push(Violation::new("tax_id", "brand.tax_id_taken"));
        }
        ValidationError::check(violations)?;

        let brand = existing.brand.with_fields(params.name, params.tax_id);
        self.repository.save(&brand).await?;

        self.logger.info(&format!("Brand updated: {}", brand.id));
        Ok(BrandSummary {
            brand,
            product_count: existing.product_count,
        })
    }
}
