use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shopping_list::model::ShoppingList;

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    /// Items are not part of the row; the caller attaches them.
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            self.name,
            self.description,
            self.created_at,
            self.updated_at,
        )
    }
}
