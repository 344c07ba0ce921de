use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::policy::{Action, Resource, authorize};
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, CategorySummary};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::logger::Logger;
use crate::domain::validation::{ValidationError, Violation};

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<CategorySummary, CategoryError> {
        authorize(&params.principal, Action::Update, Resource::Category, &[])?;
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let existing = self.repository.get_by_id(params.id).await?;

        let mut violations = Category::validate(&params.name);
        if self
            .repository
            .name_exists(&params.name, Some(params.id))
            .await?
        {
            violations.push(Violation::new("name", "category.name_taken"));
        }
        ValidationError::check(violations)?;

        let category = existing.category.renamed(params.name);
        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category updated: {}", category.id));
        Ok(CategorySummary {
            category,
            product_count: existing.product_count,
        })
    }
}
