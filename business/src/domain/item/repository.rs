use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
    async fn get_by_shopping_list_id(
        &self,
        shopping_list_id: Uuid,
    ) -> Result<Vec<Item>, RepositoryError>;
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
