use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ItemError;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    /// Parent list. `None` until the item is attached to a list.
    pub shopping_list_id: Option<Uuid>,
    pub name: String,
    pub quantity: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(name: String, quantity: i32) -> Result<Self, ItemError> {
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            shopping_list_id: None,
            name,
            quantity,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        shopping_list_id: Uuid,
        name: String,
        quantity: i32,
        completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shopping_list_id: Some(shopping_list_id),
            name,
            quantity,
            completed,
            created_at,
            updated_at,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), ItemError> {
        if name.is_empty() {
            return Err(ItemError::InvalidInput);
        }
        Ok(())
    }

    pub fn attach_to(&mut self, shopping_list_id: Uuid) {
        self.shopping_list_id = Some(shopping_list_id);
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.touch();
    }

    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.touch();
    }

    pub fn toggle_completion(&mut self) {
        if self.completed {
            self.mark_incomplete();
        } else {
            self.mark_completed();
        }
    }

    /// Quantity is not bounded here; callers decide how to normalize input.
    pub fn update_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.touch();
    }

    /// Overwrites every mutable field at once.
    pub fn update(&mut self, name: String, quantity: i32, completed: bool) -> Result<(), ItemError> {
        Self::validate_name(&name)?;
        self.name = name;
        self.quantity = quantity;
        self.completed = completed;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
