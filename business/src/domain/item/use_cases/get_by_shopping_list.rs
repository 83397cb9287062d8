use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct GetItemsByShoppingListParams {
    pub shopping_list_id: Uuid,
}

/// Does not check that the list exists; an unknown list yields no items.
#[async_trait]
pub trait GetItemsByShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: GetItemsByShoppingListParams) -> Result<Vec<Item>, ItemError>;
}
