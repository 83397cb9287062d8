use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::get_all::GetAllShoppingListsUseCase;
use business::domain::shopping_list::use_cases::get_by_id::{
    GetShoppingListByIdParams, GetShoppingListByIdUseCase,
};
use business::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::shopping_list::dto::{ShoppingListRequest, ShoppingListResponse};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "shopping_list.invalid_id";

pub struct ShoppingListApi {
    create_use_case: Arc<dyn CreateShoppingListUseCase>,
    get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
    get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
    update_use_case: Arc<dyn UpdateShoppingListUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingListUseCase>,
        get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
        get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
        update_use_case: Arc<dyn UpdateShoppingListUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Shopping list management API
#[OpenApi(prefix_path = "/api/v1")]
impl ShoppingListApi {
    /// Create a shopping list
    ///
    /// Starts an empty list. The description is optional and stored as an
    /// empty string when omitted.
    #[oai(path = "/lists", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn create(&self, body: Json<ShoppingListRequest>) -> CreateShoppingListResponse {
        let params = CreateShoppingListParams {
            name: body.0.name,
            description: body.0.description.unwrap_or_default(),
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateShoppingListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingListResponse::BadRequest(json),
                    _ => CreateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// List all shopping lists
    ///
    /// Every list is returned with its items attached.
    #[oai(path = "/lists", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_all(&self) -> GetAllShoppingListsResponse {
        match self.get_all_use_case.execute().await {
            Ok(lists) => GetAllShoppingListsResponse::Ok(Json(
                lists.into_iter().map(ShoppingListResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllShoppingListsResponse::InternalError(json)
            }
        }
    }

    /// Get a shopping list by id
    #[oai(path = "/lists/:id", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_by_id(&self, id: Path<String>) -> GetShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return GetShoppingListResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetShoppingListByIdParams { id })
            .await
        {
            Ok(list) => GetShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingListResponse::NotFound(json),
                    _ => GetShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a shopping list
    ///
    /// Overwrites name and description. Items are left untouched.
    #[oai(path = "/lists/:id", method = "put", tag = "ApiTags::ShoppingLists")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<ShoppingListRequest>,
    ) -> UpdateShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return UpdateShoppingListResponse::BadRequest(json),
        };

        let params = UpdateShoppingListParams {
            id,
            name: body.0.name,
            description: body.0.description.unwrap_or_default(),
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShoppingListResponse::BadRequest(json),
                    404 => UpdateShoppingListResponse::NotFound(json),
                    _ => UpdateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a shopping list
    ///
    /// Removes the list together with all of its items.
    #[oai(path = "/lists/:id", method = "delete", tag = "ApiTags::ShoppingLists")]
    async fn delete(&self, id: Path<String>) -> DeleteShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeleteShoppingListResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteShoppingListParams { id })
            .await
        {
            Ok(()) => DeleteShoppingListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShoppingListResponse::NotFound(json),
                    _ => DeleteShoppingListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShoppingListResponse {
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
    use poem::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_support::test_client;

    #[tokio::test]
    async fn should_create_list_with_empty_items() {
        let client = test_client();

        let resp = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "Groceries" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["name"], "Groceries");
        assert_eq!(body["description"], "");
        assert_eq!(body["items"], json!([]));
        assert!(body["id"].as_str().is_some());
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let client = test_client();

        let resp = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "shopping_list.invalid_input" }))
            .await;
    }

    #[tokio::test]
    async fn should_accept_whitespace_only_name() {
        let client = test_client();

        let resp = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "  " }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["name"], "  ");
    }

    #[tokio::test]
    async fn should_reject_body_without_name() {
        let client = test_client();

        let resp = client
            .post("/api/v1/lists")
            .body_json(&json!({ "description": "weekly" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn should_return_list_with_attached_items() {
        let client = test_client();
        let list: Value = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "Groceries", "description": "weekly" }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        let list_id = list["id"].as_str().unwrap();

        for name in ["Milk", "Bread"] {
            client
                .post(format!("/api/v1/lists/{list_id}/items"))
                .body_json(&json!({ "name": name }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = client.get(format!("/api/v1/lists/{list_id}")).send().await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["description"], "weekly");
        let names: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Milk", "Bread"]);
    }

    #[tokio::test]
    async fn should_list_all_lists() {
        let client = test_client();
        for name in ["Groceries", "Hardware"] {
            client
                .post("/api/v1/lists")
                .body_json(&json!({ "name": name }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = client.get("/api/v1/lists").send().await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_update_name_and_description() {
        let client = test_client();
        let list: Value = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "Groceries" }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        let list_id = list["id"].as_str().unwrap();

        let resp = client
            .put(format!("/api/v1/lists/{list_id}"))
            .body_json(&json!({ "name": "Party", "description": "saturday" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["id"], list_id);
        assert_eq!(body["name"], "Party");
        assert_eq!(body["description"], "saturday");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_list() {
        let client = test_client();

        let resp = client
            .get(format!("/api/v1/lists/{}", uuid::Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "error": "shopping_list.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_malformed_id() {
        let client = test_client();

        let resp = client.delete("/api/v1/lists/not-a-uuid").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "shopping_list.invalid_id" }))
            .await;
    }

    #[tokio::test]
    async fn should_delete_list_and_its_items() {
        let client = test_client();
        let list: Value = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "Groceries" }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        let list_id = list["id"].as_str().unwrap();
        let item: Value = client
            .post(format!("/api/v1/lists/{list_id}/items"))
            .body_json(&json!({ "name": "Milk" }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        let item_id = item["id"].as_str().unwrap();

        client
            .delete(format!("/api/v1/lists/{list_id}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        client
            .get(format!("/api/v1/lists/{list_id}"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        client
            .get(format!("/api/v1/items/{item_id}"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        let items = client
            .get(format!("/api/v1/lists/{list_id}/items"))
            .send()
            .await;
        items.assert_status_is_ok();
        items.assert_json(json!([])).await;
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let client = test_client();
        let list: Value = client
            .post("/api/v1/lists")
            .body_json(&json!({ "name": "Groceries" }))
            .send()
            .await
            .0
            .into_body()
            .into_json()
            .await
            .unwrap();
        let list_id = list["id"].as_str().unwrap();

        client
            .delete(format!("/api/v1/lists/{list_id}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        client
            .delete(format!("/api/v1/lists/{list_id}"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
