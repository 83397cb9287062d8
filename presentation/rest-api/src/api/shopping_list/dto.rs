use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shopping_list::model::ShoppingList;

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
pub struct ShoppingListRequest {
    /// List name (cannot be empty)
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    /// Shopping list unique identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Free-form description, empty when none was given
    pub description: String,
    /// Items of the list in creation order
    pub items: Vec<ItemResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            name: list.name,
            description: list.description,
            items: list.items.into_iter().map(ItemResponse::from).collect(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}
