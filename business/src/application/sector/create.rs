use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::logger::Logger;
use crate::domain::sector::errors::SectorError;
use crate::domain::sector::model::{NewSectorProps, Sector};
use crate::domain::sector::repository::SectorRepository;
use crate::domain::sector::use_cases::create::{CreateSectorParams, CreateSectorUseCase};
use crate::domain::validation::{ValidationError, Violation};

pub struct CreateSectorUseCaseImpl {
    pub repository: Arc<dyn SectorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSectorUseCase for CreateSectorUseCaseImpl {
    async fn execute(&self, params: CreateSectorParams) -> Result<Sector, SectorError> {
        authorize(&params.principal, Action::Create, Resource::Sector, &[])?;
        self.logger
            .info(&format!("Creating sector: {}", params.letter));

        let mut violations = Sector::validate(&params.letter);
        if self.repository.letter_exists(&params.letter, None).await? {
            violations.push(Violation::new("letter", "sector.letter_taken"));
        }
        ValidationError::check(violations)?;

        let sector = Sector::new(NewSectorProps {
            letter: params.letter,
            description: params.description,
        })?;
        self.repository.save(&sector).await?;

        self.logger
            .info(&format!("Sector created with id: {}", sector.id));
        Ok(sector)
    }
}
