use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_id::{
    GetShoppingListByIdParams, GetShoppingListByIdUseCase,
};

pub struct GetShoppingListByIdUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListByIdUseCase for GetShoppingListByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListByIdParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Fetching shopping list by id: {}", params.id));

        let list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        // Separate read: items changed in between are not reflected atomically.
        let items = self.item_repository.get_by_shopping_list_id(list.id).await?;

        self.logger.debug(&format!(
            "Shopping list {} loaded with {} items",
            list.id,
            items.len()
        ));
        Ok(list.with_items(items))
    }
}
