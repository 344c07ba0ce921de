use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::brand::errors::BrandError;
use crate::domain::brand::model::{Brand, NewBrandProps};
use crate::domain::brand::repository::BrandRepository;
use crate::domain::brand::use_cases::create::{CreateBrandParams, CreateBrandUseCase};
use crate::domain::logger::Logger;
use crate::domain::validation::{ValidationError, Violation};

pub struct CreateBrandUseCaseImpl {
    pub repository: Arc<dyn BrandRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBrandUseCase for CreateBrandUseCaseImpl {
    async fn execute(&self, params: CreateBrandParams) -> Result<Brand, BrandError> {
        authorize(&params.principal, Action::Create, Resource::Brand, &[])?;
        self.logger.info(&format!("Creating brand: {}", params.name));

        let mut violations = Brand::validate(&params.name, &params.tax_id);
        if self.repository.name_exists(&params.name, None).await? {
            violations.push(Violation::new("name", "brand.name_taken"));
        }
        if self.repository.tax_id_exists(&params.tax_id, None).await? {
            violations.push(Violation::new("tax_id", "brand.tax_id_taken"));
        }
        ValidationError::check(violations)?;

        let brand = Brand::new(NewBrandProps {
            name: params.name,
            tax_id: params.tax_id,
        })?;
        self.repository.save(&brand).await?;

        self.logger.info(&format!("Brand created with id: {}", brand.id));
        Ok(brand)
    }
}
