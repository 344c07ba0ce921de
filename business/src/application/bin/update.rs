use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::bin::errors::BinError;
use crate::domain::bin::model::{Bin, BinDetails};
use crate::domain::bin::repository::BinRepository;
use crate::domain::bin::use_cases::update::{UpdateBinParams, UpdateBinUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::sector::repository::SectorRepository;
use crate::domain::validation::{ValidationError, Violation};

pub struct UpdateBinUseCaseImpl {
    pub repository: Arc<dyn BinRepository>,
    pub sector_repository: Arc<dyn SectorRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBinUseCase for UpdateBinUseCaseImpl {
    async fn execute(&self, params: UpdateBinParams) -> Result<BinDetails, BinError> {
        authorize(&params.principal, Action::Update, Resource::Bin, &[])?;
        self.logger.info(&format!("Updating bin: {}", params.id));

        let existing = self.repository.get_by_id(params.id).await?;

        let mut violations = Bin::validate(&params.code, params.product_id, params.quantity);
        let sector_letter = if params.sector_id == existing.bin.sector_id {
            Some(existing.bin.sector_letter.clone())
        } else {
            match self.sector_repository.get_by_id(params.sector_id).await {
                Ok(sector) => Some(sector.letter),
                Err(RepositoryError::NotFound) => {
                    violations.push(Violation::new("sector_id", "bin.sector_not_found"));
                    None
                }
                Err(err) => return Err(err.into()),
            }
        };
        if sector_letter.is_some()
            && self
                .repository
                .code_exists_in_sector(params.sector_id, &params.code, Some(params.id))
                .await?
        {
            violations.push(Violation::new("code", "bin.code_taken"));
        }
        let product = if params.product_id == existing.bin.product_id {
            existing.product
        } else if let Some(product_id) = params.product_id {
            match self.product_repository.get_summary(product_id).await {
                Ok(summary) => Some(summary),
                Err(RepositoryError::NotFound) => {
                    violations.push(Violation::new("product_id", "bin.product_not_found"));
                    None
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            None
        };
        ValidationError::check(violations)?;

        // a missing sector always left a violation, so check() already returned
        let Some(sector_letter) = sector_letter else {
            return Err(BinError::NotFound);
        };

        let bin = Bin::from_repository(
            params.id,
            params.code,
            params.sector_id,
            sector_letter,
            params.product_id,
            params.quantity,
            existing.bin.created_at,
            Utc::now(),
        );
        self.repository.save(&bin).await?;

        self.logger
            .info(&format!("Bin updated: {} at {}", bin.id, bin.full_location()));
        Ok(BinDetails { bin, product })
    }
}
