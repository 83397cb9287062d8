use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
