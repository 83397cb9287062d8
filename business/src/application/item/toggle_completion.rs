use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::toggle_completion::{
    ToggleItemCompletionParams, ToggleItemCompletionUseCase,
};
use crate::domain::logger::Logger;

pub struct ToggleItemCompletionUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleItemCompletionUseCase for ToggleItemCompletionUseCaseImpl {
    async fn execute(&self, params: ToggleItemCompletionParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Toggling completion of item: {}", params.id));

        let mut item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        item.toggle_completion();

        self.repository.update(&item).await.map_err(|e| match e {
            RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!(
            "Item {} is now {}",
            item.id,
            if item.completed { "completed" } else { "pending" }
        ));
        Ok(item)
    }
}
