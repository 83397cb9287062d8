use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::ItemEntity;
use crate::errors::{database_error, insert_error, require_affected};

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn create(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO items (id, shopping_list_id, name, quantity, completed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(item.id)
        .bind(item.shopping_list_id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.completed)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, shopping_list_id, name, quantity, completed, created_at, updated_at FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_shopping_list_id(
        &self,
        shopping_list_id: Uuid,
    ) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, shopping_list_id, name, quantity, completed, created_at, updated_at FROM items WHERE shopping_list_id = $1 ORDER BY created_at ASC",
        )
        .bind(shopping_list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE items SET name = $2, quantity = $3, completed = $4, updated_at = $5 WHERE id = $1",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.completed)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        require_affected(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        require_affected(result.rows_affected())
    }
}
