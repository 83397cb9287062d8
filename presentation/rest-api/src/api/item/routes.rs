use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::errors::ItemError;
use business::domain::item::model::Item;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::get_by_shopping_list::{
    GetItemsByShoppingListParams, GetItemsByShoppingListUseCase,
};
use business::domain::item::use_cases::toggle_completion::{
    ToggleItemCompletionParams, ToggleItemCompletionUseCase,
};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::item::dto::{
    CreateItemRequest, ItemResponse, UpdateItemRequest, normalize_quantity,
};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "item.invalid_id";
const INVALID_LIST_ID: &str = "shopping_list.invalid_id";

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    get_by_shopping_list_use_case: Arc<dyn GetItemsByShoppingListUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    toggle_completion_use_case: Arc<dyn ToggleItemCompletionUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        get_by_shopping_list_use_case: Arc<dyn GetItemsByShoppingListUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        toggle_completion_use_case: Arc<dyn ToggleItemCompletionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_by_shopping_list_use_case,
            update_use_case,
            delete_use_case,
            toggle_completion_use_case,
        }
    }
}

/// Item management API
///
/// Items are created inside a list and addressed directly by id afterwards.
#[OpenApi(prefix_path = "/api/v1")]
impl ItemApi {
    /// Add an item to a shopping list
    #[oai(path = "/lists/:id/items", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, id: Path<String>, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let shopping_list_id = match parse_id(&id.0, INVALID_LIST_ID) {
            Ok(id) => id,
            Err(json) => return CreateItemResponse::BadRequest(json),
        };

        let params = CreateItemParams {
            shopping_list_id,
            name: body.0.name,
            quantity: normalize_quantity(body.0.quantity),
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    404 => CreateItemResponse::NotFound(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List the items of a shopping list
    ///
    /// Returns an empty array when the list has no items or does not exist.
    #[oai(path = "/lists/:id/items", method = "get", tag = "ApiTags::Items")]
    async fn get_by_shopping_list(&self, id: Path<String>) -> GetItemsResponse {
        let shopping_list_id = match parse_id(&id.0, INVALID_LIST_ID) {
            Ok(id) => id,
            Err(json) => return GetItemsResponse::BadRequest(json),
        };

        match self
            .get_by_shopping_list_use_case
            .execute(GetItemsByShoppingListParams { shopping_list_id })
            .await
        {
            Ok(items) => {
                GetItemsResponse::Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<String>) -> ItemResult {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return ItemResult::BadRequest(json),
        };

        self.get_by_id_use_case
            .execute(GetItemByIdParams { id })
            .await
            .into()
    }

    /// Update an item
    ///
    /// Overwrites name, quantity and completion state.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update(&self, id: Path<String>, body: Json<UpdateItemRequest>) -> ItemResult {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return ItemResult::BadRequest(json),
        };

        let params = UpdateItemParams {
            id,
            name: body.0.name,
            quantity: normalize_quantity(body.0.quantity),
            completed: body.0.completed.unwrap_or(false),
        };

        self.update_use_case.execute(params).await.into()
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<String>) -> DeleteItemResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeleteItemResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteItemParams { id }).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle item completion
    ///
    /// Flips the completed flag and returns the updated item.
    #[oai(path = "/items/:id/toggle", method = "patch", tag = "ApiTags::Items")]
    async fn toggle_completion(&self, id: Path<String>) -> ItemResult {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return ItemResult::BadRequest(json),
        };

        self.toggle_completion_use_case
            .execute(ToggleItemCompletionParams { id })
            .await
            .into()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by the get, update and toggle endpoints.
#[derive(poem_openapi::ApiResponse)]
pub enum ItemResult {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<Item, ItemError>> for ItemResult {
    fn from(result: Result<Item, ItemError>) -> Self {
        match result {
            Ok(item) => ItemResult::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ItemResult::BadRequest(json),
                    404 => ItemResult::NotFound(json),
                    _ => ItemResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::{Value, json};

    use crate::test_support::test_client;

    async fn create_list<E: Endpoint>(client: &TestClient<E>, name: &str) -> String {
        let body: Value = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": name }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    async fn create_item<E: Endpoint>(client: &TestClient<E>, list_id: &str, body: Value) -> Value {
        let resp = client
            .post(format!("/api/v1/lists/{list_id}/items"))
            .body_json(&body)
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        resp.0.into_body().into_json().await.unwrap()
    }

    #[tokio::test]
    async fn should_normalize_zero_quantity_and_toggle_twice() {
        let client = test_client();
        let list_id = create_list(&client, "Groceries").await;

        let item = create_item(&client, &list_id, json!({ "name": "Milk", "quantity": 0 })).await;
        assert_eq!(item["quantity"], 1);
        assert_eq!(item["completed"], false);
        assert_eq!(item["shopping_list_id"], list_id.as_str());
        let item_id = item["id"].as_str().unwrap();

        let first: Value = client
            .patch(format!("/api/v1/items/{item_id}/toggle"))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        assert_eq!(first["completed"], true);

        let second: Value = client
            .patch(format!("/api/v1/items/{item_id}/toggle"))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        assert_eq!(second["completed"], false);
    }

    #[tokio::test]
    async fn should_default_missing_quantity_to_one() {
        let client = test_client();
        let list_id = create_list(&client, "Groceries").await;

        let item = create_item(&client, &list_id, json!({ "name": "Eggs" })).await;

        assert_eq!(item["quantity"], 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_list_missing() {
        let client = test_client();

        let resp = client
            .post(format!("/api/v1/lists/{}/items", uuid::Uuid::new_v4()))
            .body_json(&json!({ "name": "Milk" }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "error": "shopping_list.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_malformed_list_id() {
        let client = test_client();

        let resp = client.get("/api/v1/lists/42/items").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "shopping_list.invalid_id" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_empty_item_name() {
        let client = test_client();
        let list_id = create_list(&client, "Groceries").await;

        let resp = client
            .post(format!("/api/v1/lists/{list_id}/items"))
            .body_json(&json!({ "name": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "item.invalid_input" })).await;
    }

    #[tokio::test]
    async fn should_list_items_of_one_list_only() {
        let client = test_client();
        let groceries = create_list(&client, "Groceries").await;
        let hardware = create_list(&client, "Hardware").await;
        create_item(&client, &groceries, json!({ "name": "Milk" })).await;
        create_item(&client, &hardware, json!({ "name": "Nails" })).await;

        let resp = client
            .get(format!("/api/v1/lists/{groceries}/items"))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Milk");
    }

    #[tokio::test]
    async fn should_update_all_fields_and_normalize_quantity() {
        let client = test_client();
        let list_id = create_list(&client, "Groceries").await;
        let item = create_item(&client, &list_id, json!({ "name": "Milk", "quantity": 2 })).await;
        let item_id = item["id"].as_str().unwrap();

        let resp = client
            .put(format!("/api/v1/items/{item_id}"))
            .body_json(&json!({ "name": "Oat Milk", "quantity": -3, "completed": true }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["name"], "Oat Milk");
        assert_eq!(body["quantity"], 1);
        assert_eq!(body["completed"], true);
    }

    #[tokio::test]
    async fn should_delete_item_and_then_report_not_found() {
        let client = test_client();
        let list_id = create_list(&client, "Groceries").await;
        let item = create_item(&client, &list_id, json!({ "name": "Milk" })).await;
        let item_id = item["id"].as_str().unwrap();

        client
            .delete(format!("/api/v1/items/{item_id}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let resp = client.get(format!("/api/v1/items/{item_id}")).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "error": "item.not_found" })).await;
    }

    #[tokio::test]
    async fn should_reject_malformed_item_id_on_toggle() {
        let client = test_client();

        let resp = client.patch("/api/v1/items/abc/toggle").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "item.invalid_id" })).await;
    }
}
