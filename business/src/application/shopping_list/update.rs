use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};

pub struct UpdateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingListUseCase for UpdateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Updating shopping list: {}", params.id));

        ShoppingList::validate_name(&params.name)?;

        let mut list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        list.rename(params.name, params.description)?;

        self.repository
            .update(&list)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        self.logger
            .info(&format!("Shopping list updated: {}", list.id));
        Ok(list)
    }
}
