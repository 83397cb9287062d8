//! In-memory repositories and a ready-made client for route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use poem::{Endpoint, middleware::Cors, test::TestClient};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use crate::setup::{dependency_injection::DependencyContainer, server::build_app};

/// Mirrors the relational schema: item inserts need an existing parent and
/// deleting a list cascades to its items.
#[derive(Default)]
pub struct InMemoryStore {
    lists: Mutex<Vec<ShoppingList>>,
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ShoppingListRepository for InMemoryStore {
    async fn create(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let mut row = list.clone();
        row.items.clear();
        self.lists.lock().unwrap().push(row);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError> {
        self.lists
            .lock()
            .unwrap()
            .iter()
            .find(|list| list.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        Ok(self.lists.lock().unwrap().clone())
    }

    async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let mut lists = self.lists.lock().unwrap();
        let row = lists
            .iter_mut()
            .find(|row| row.id == list.id)
            .ok_or(RepositoryError::NotFound)?;
        row.name = list.name.clone();
        row.description = list.description.clone();
        row.updated_at = list.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut lists = self.lists.lock().unwrap();
        let before = lists.len();
        lists.retain(|list| list.id != id);
        if lists.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.items
            .lock()
            .unwrap()
            .retain(|item| item.shopping_list_id != Some(id));
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn create(&self, item: &Item) -> Result<(), RepositoryError> {
        let parent_exists = match item.shopping_list_id {
            Some(list_id) => self.lists.lock().unwrap().iter().any(|l| l.id == list_id),
            None => false,
        };
        if !parent_exists {
            return Err(RepositoryError::ReferenceNotFound);
        }
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_shopping_list_id(
        &self,
        shopping_list_id: Uuid,
    ) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.shopping_list_id == Some(shopping_list_id))
            .cloned()
            .collect())
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let row = items
            .iter_mut()
            .find(|row| row.id == item.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = item.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Full application (routes, docs, error rendering) over a fresh store.
pub fn test_client() -> TestClient<impl Endpoint> {
    let store = Arc::new(InMemoryStore::default());
    let container = DependencyContainer::with_repositories(store.clone(), store);
    TestClient::new(build_app(
        container,
        Cors::new(),
        "http://localhost:8080".to_string(),
    ))
}
