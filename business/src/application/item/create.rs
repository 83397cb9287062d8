use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shopping_list::repository::ShoppingListRepository;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Creating item '{}' in shopping list {}",
            params.name, params.shopping_list_id
        ));

        Item::validate_name(&params.name)?;

        // Verify the parent list exists
        self.shopping_list_repository
            .get_by_id(params.shopping_list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::ShoppingListNotFound,
                other => ItemError::Repository(other),
            })?;

        let mut item = Item::new(params.name, params.quantity)?;
        item.attach_to(params.shopping_list_id);

        // The list may be deleted between the check and the insert; the
        // foreign key turns that into a missing reference.
        self.repository.create(&item).await.map_err(|e| match e {
            RepositoryError::ReferenceNotFound => {
                self.logger.warn(&format!(
                    "Shopping list {} disappeared before item insert",
                    params.shopping_list_id
                ));
                ItemError::ShoppingListNotFound
            }
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!("Item created: {}", item.id));
        Ok(item)
    }
}
