use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct GetShoppingListByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetShoppingListByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingListByIdParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
