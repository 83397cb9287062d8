use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::Item;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.shopping_list_id,
            self.name,
            self.quantity,
            self.completed,
            self.created_at,
            self.updated_at,
        )
    }
}
