use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct UpdateShoppingListParams {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[async_trait]
pub trait UpdateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
