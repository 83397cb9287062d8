use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingList;

/// Persists list rows only; items are stored through `ItemRepository`.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn create(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    /// Owned items are removed by the storage layer.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
