use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_all::GetAllShoppingListsUseCase;

pub struct GetAllShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingListsUseCase for GetAllShoppingListsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger.info("Getting all shopping lists");

        let lists = self.repository.get_all().await?;

        // One item query per list.
        let mut aggregates = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self.item_repository.get_by_shopping_list_id(list.id).await?;
            aggregates.push(list.with_items(items));
        }

        self.logger
            .info(&format!("Retrieved {} shopping lists", aggregates.len()));
        Ok(aggregates)
    }
}
