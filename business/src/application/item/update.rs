use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Updating item: {}", params.id));

        Item::validate_name(&params.name)?;

        let mut item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        item.update(params.name, params.quantity, params.completed)?;

        self.repository.update(&item).await.map_err(|e| match e {
            RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!("Item updated: {}", item.id));
        Ok(item)
    }
}
