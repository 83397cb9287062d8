use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct ToggleItemCompletionParams {
    pub id: Uuid,
}

#[async_trait]
pub trait ToggleItemCompletionUseCase: Send + Sync {
    async fn execute(&self, params: ToggleItemCompletionParams) -> Result<Item, ItemError>;
}
