use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct CreateItemParams {
    pub shopping_list_id: Uuid,
    pub name: String,
    pub quantity: i32,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
