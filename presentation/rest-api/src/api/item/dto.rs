use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Quantity to buy, values below 1 become 1
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    /// New item name (cannot be empty)
    pub name: String,
    /// New quantity, values below 1 become 1
    pub quantity: Option<i32>,
    /// Whether the item has been picked up (default: false)
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Owning shopping list, always set on items read from storage
    pub shopping_list_id: String,
    /// Item name
    pub name: String,
    /// Quantity to buy
    pub quantity: i32,
    /// Whether the item has been picked up
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            shopping_list_id: item
                .shopping_list_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: item.name,
            quantity: item.quantity,
            completed: item.completed,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Missing or non-positive quantities fall back to 1.
pub fn normalize_quantity(quantity: Option<i32>) -> i32 {
    quantity.filter(|q| *q > 0).unwrap_or(1)
}
