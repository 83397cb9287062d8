use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};

pub struct CreateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingListUseCase for CreateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Creating shopping list: {}", params.name));

        let list = ShoppingList::new(params.name, params.description)?;
        self.repository.create(&list).await?;

        self.logger
            .info(&format!("Shopping list created: {}", list.id));
        Ok(list)
    }
}
