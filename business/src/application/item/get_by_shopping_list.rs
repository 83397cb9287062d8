use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_shopping_list::{
    GetItemsByShoppingListParams, GetItemsByShoppingListUseCase,
};
use crate::domain::logger::Logger;

pub struct GetItemsByShoppingListUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemsByShoppingListUseCase for GetItemsByShoppingListUseCaseImpl {
    async fn execute(&self, params: GetItemsByShoppingListParams) -> Result<Vec<Item>, ItemError> {
        self.logger.info(&format!(
            "Getting items for shopping list: {}",
            params.shopping_list_id
        ));

        let items = self
            .repository
            .get_by_shopping_list_id(params.shopping_list_id)
            .await?;

        self.logger
            .info(&format!("Retrieved {} items", items.len()));
        Ok(items)
    }
}
