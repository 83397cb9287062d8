use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::ShoppingListEntity;
use crate::errors::{database_error, require_affected};

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn create(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO shopping_lists (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(list.id)
        .bind(&list.name)
        .bind(&list.description)
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, name, description, created_at, updated_at FROM shopping_lists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, name, description, created_at, updated_at FROM shopping_lists ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE shopping_lists SET name = $2, description = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(list.id)
        .bind(&list.name)
        .bind(&list.description)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        require_affected(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // items rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        require_affected(result.rows_affected())
    }
}
