//! Mocks shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;

mock! {
    pub ShoppingListRepo {}

    #[async_trait]
    impl ShoppingListRepository for ShoppingListRepo {
        async fn create(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
        async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
        async fn create(&self, item: &Item) -> Result<(), RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
        async fn get_by_shopping_list_id(&self, shopping_list_id: Uuid) -> Result<Vec<Item>, RepositoryError>;
        async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_list(id: Uuid, name: &str) -> ShoppingList {
    let now = Utc::now();
    ShoppingList::from_repository(id, name.to_string(), String::new(), now, now)
}

pub fn stored_item(id: Uuid, shopping_list_id: Uuid, name: &str, completed: bool) -> Item {
    let now = Utc::now();
    Item::from_repository(id, shopping_list_id, name.to_string(), 1, completed, now, now)
}
