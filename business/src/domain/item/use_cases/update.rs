use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct UpdateItemParams {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub completed: bool,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
