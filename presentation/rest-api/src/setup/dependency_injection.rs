use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::get_by_shopping_list::GetItemsByShoppingListUseCaseImpl;
use business::application::item::toggle_completion::ToggleItemCompletionUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::shopping_list::create::CreateShoppingListUseCaseImpl;
use business::application::shopping_list::delete::DeleteShoppingListUseCaseImpl;
use business::application::shopping_list::get_all::GetAllShoppingListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetShoppingListByIdUseCaseImpl;
use business::application::shopping_list::update::UpdateShoppingListUseCaseImpl;
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;
use business::domain::shopping_list::repository::ShoppingListRepository;

use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;
use crate::api::shopping_list::routes::ShoppingListApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shopping_list_api: ShoppingListApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let shopping_list_repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool));

        Self::with_repositories(shopping_list_repository, item_repository)
    }

    /// Wires every use case over the given storage adapters.
    pub fn with_repositories(
        shopping_list_repository: Arc<dyn ShoppingListRepository>,
        item_repository: Arc<dyn ItemRepository>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Shopping list use cases
        let create_list_use_case = Arc::new(CreateShoppingListUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_lists_use_case = Arc::new(GetAllShoppingListsUseCaseImpl {
            repository: shopping_list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_list_by_id_use_case = Arc::new(GetShoppingListByIdUseCaseImpl {
            repository: shopping_list_repository.clone(),
            item_repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_list_use_case = Arc::new(UpdateShoppingListUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let delete_list_use_case = Arc::new(DeleteShoppingListUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            shopping_list_repository,
            logger: logger.clone(),
        });
        let get_item_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_items_by_list_use_case = Arc::new(GetItemsByShoppingListUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_item_use_case = Arc::new(ToggleItemCompletionUseCaseImpl {
            repository: item_repository,
            logger,
        });

        let shopping_list_api = ShoppingListApi::new(
            create_list_use_case,
            get_all_lists_use_case,
            get_list_by_id_use_case,
            update_list_use_case,
            delete_list_use_case,
        );

        let item_api = ItemApi::new(
            create_item_use_case,
            get_item_by_id_use_case,
            get_items_by_list_use_case,
            update_item_use_case,
            delete_item_use_case,
            toggle_item_use_case,
        );

        Self {
            health_api: HealthApi,
            shopping_list_api,
            item_api,
        }
    }
}
