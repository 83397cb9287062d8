use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ShoppingListError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

/// Aggregate root. `items` is assembled at read time and never persisted
/// as part of the list row.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(name: String, description: String) -> Result<Self, ShoppingListError> {
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            items: Vec::new(),
            created_at,
            updated_at,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), ShoppingListError> {
        if name.is_empty() {
            return Err(ShoppingListError::InvalidInput);
        }
        Ok(())
    }

    pub fn rename(&mut self, name: String, description: String) -> Result<(), ShoppingListError> {
        Self::validate_name(&name)?;
        self.name = name;
        self.description = description;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn add_item(&mut self, mut item: Item) {
        item.attach_to(self.id);
        self.items.push(item);
    }

    /// Removes the item with the given id; unknown ids are ignored.
    pub fn remove_item(&mut self, item_id: Uuid) {
        if let Some(position) = self.items.iter().position(|item| item.id == item_id) {
            self.items.remove(position);
        }
    }

    pub fn get_item(&self, item_id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn update_item(
        &mut self,
        item_id: Uuid,
        name: String,
        quantity: i32,
        completed: bool,
    ) -> Result<(), ItemError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ItemError::NotFound)?;
        item.update(name, quantity, completed)
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}
