use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use configs::PaginationConfig;
use server::{routes::build_router, state::AppState};
use service::dto::{ItemDto, ItemRef, NewStockItem, StockDto, StockFields, StockItemDto, StoreDto, StoreRef};
use service::errors::ServiceError;
use service::repository::{mock::MockInventoryRepository, InventoryRepository};
use service::services::StockService;

async fn seeded_repo(items: usize) -> Arc<MockInventoryRepository> {
    let repo = Arc::new(MockInventoryRepository::default());
    repo.insert_store(StoreDto { public_id: "store-7".into(), name: "Seven".into(), address: None, owner_id: "o1".into() })
        .await
        .unwrap();
    for n in 1..=items {
        repo.insert_item(ItemDto { public_id: format!("sku-{n}"), name: format!("Item {n}"), description: None, seller_id: "o1".into() })
            .await
            .unwrap();
    }
    repo
}

fn app(repo: Arc<MockInventoryRepository>) -> Router {
    build_router(AppState::from_repository(repo, PaginationConfig::default()), CorsLayer::very_permissive())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn create_stock_returns_resolved_item_and_store() {
    let app = app(seeded_repo(1).await);
    let (status, body) = send(&app, "POST", "/o1/store/store-7/stock", Some(json!({"item": "sku-1", "quantity": 10}))).await;

    assert_eq!(status, StatusCode::OK);
    let v = json_of(&body);
    assert_eq!(v["item"]["publicId"], "sku-1");
    assert_eq!(v["store"]["publicId"], "store-7");
    assert_eq!(v["quantity"], 10);
    assert_eq!(v["price"], 0.0);
}

#[tokio::test]
async fn find_stocks_uses_default_paging() {
    let repo = seeded_repo(16).await;
    let app = app(repo.clone());
    for n in 1..=16 {
        let (status, _) = send(&app, "POST", "/o1/store/store-7/stock", Some(json!({"item": format!("sku-{n}"), "quantity": n}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/o1/store/store-7/stock", None).await;
    assert_eq!(status, StatusCode::OK);
    let v = json_of(&body);
    assert_eq!(v["page"], 1);
    assert_eq!(v["size"], 15);
    assert_eq!(v["totalElements"], 16);
    assert_eq!(v["totalPages"], 2);
    assert_eq!(v["items"].as_array().unwrap().len(), 15);

    let (_, body) = send(&app, "GET", "/o1/store/store-7/stock?page=2", None).await;
    let v = json_of(&body);
    assert_eq!(v["page"], 2);
    assert_eq!(v["items"].as_array().unwrap().len(), 1);
    assert_eq!(v["items"][0]["item"]["publicId"], "sku-16");
}

#[tokio::test]
async fn missing_store_is_404_with_message() {
    let app = app(seeded_repo(1).await);
    let (status, body) = send(&app, "GET", "/o1/store/nowhere/stock", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body), json!({"status": 404, "error": "Not Found", "message": "Store not found"}));
}

#[tokio::test]
async fn duplicate_stock_is_409() {
    let app = app(seeded_repo(1).await);
    let body = json!({"item": "sku-1", "quantity": 1});
    send(&app, "POST", "/o1/store/store-7/stock", Some(body.clone())).await;
    let (status, body) = send(&app, "POST", "/o1/store/store-7/stock", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json_of(&body)["status"], 409);
}

#[tokio::test]
async fn missing_item_id_is_400() {
    let app = app(seeded_repo(1).await);
    let (status, body) = send(&app, "POST", "/o1/store/store-7/stock", Some(json!({"quantity": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&body)["message"], "item id is required");
}

#[tokio::test]
async fn quantity_outside_i32_is_500_without_body() {
    let app = app(seeded_repo(1).await);
    let (status, body) = send(&app, "POST", "/o1/store/store-7/stock", Some(json!({"item": "sku-1", "quantity": 3_000_000_000i64}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn update_then_delete_returns_the_record() {
    let app = app(seeded_repo(1).await);
    send(&app, "POST", "/o1/store/store-7/stock", Some(json!({"item": "sku-1", "quantity": 1, "price": 4.0, "cost": 2.0}))).await;

    let (status, body) = send(&app, "PUT", "/o1/store/store-7/stock/sku-1", Some(json!({"quantity": 7, "price": 5.0, "cost": 2.5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["quantity"], 7);

    let (status, body) = send(&app, "DELETE", "/o1/store/store-7/stock/sku-1", None).await;
    assert_eq!(status, StatusCode::OK);
    let v = json_of(&body);
    assert_eq!(v["quantity"], 7);
    assert_eq!(v["item"]["publicId"], "sku-1");

    let (status, body) = send(&app, "DELETE", "/o1/store/store-7/stock/sku-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&body)["message"], "Stock item not found");
}

#[tokio::test]
async fn items_and_stores_crud() {
    let app = app(Arc::new(MockInventoryRepository::default()));

    let (status, body) = send(&app, "POST", "/o1/store", Some(json!({"publicId": "s-1", "name": "Main", "address": "1 Road"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["ownerId"], "o1");

    let (status, body) = send(&app, "POST", "/o1/items", Some(json!({"name": "Bolt"}))).await;
    assert_eq!(status, StatusCode::OK);
    let generated = json_of(&body)["publicId"].as_str().unwrap().to_string();
    assert!(!generated.is_empty());

    let (status, body) = send(&app, "PUT", &format!("/o1/items/{generated}"), Some(json!({"name": "Nut"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["name"], "Nut");

    let (_, body) = send(&app, "GET", "/o1/items", None).await;
    assert_eq!(json_of(&body).as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", &format!("/o2/items/{generated}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/o1/store/s-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["address"], "1 Road");
    let (_, body) = send(&app, "GET", "/o1/store", None).await;
    assert!(json_of(&body).as_array().unwrap().is_empty());
}

/// Stock service that always fails with a fixed error.
struct FailingStock(fn() -> ServiceError);

#[async_trait]
impl StockService for FailingStock {
    async fn add_stock_item(&self, _new: NewStockItem) -> Result<StockItemDto, ServiceError> { Err((self.0)()) }
    async fn get_stock(&self, _store: &StoreRef, _page: u64, _size: u64) -> Result<StockDto, ServiceError> { Err((self.0)()) }
    async fn edit_stock_item(&self, _store: &StoreRef, _item: &ItemRef, _fields: StockFields) -> Result<StockItemDto, ServiceError> { Err((self.0)()) }
    async fn remove_stock_item(&self, _store: &StoreRef, _item: &ItemRef) -> Result<StockItemDto, ServiceError> { Err((self.0)()) }
}

fn failing_app(err: fn() -> ServiceError) -> Router {
    let mut state = AppState::from_repository(Arc::new(MockInventoryRepository::default()), PaginationConfig::default());
    state.stock = Arc::new(FailingStock(err));
    build_router(state, CorsLayer::very_permissive())
}

#[tokio::test]
async fn explicit_domain_status_passes_through() {
    let app = failing_app(|| ServiceError::Rejected { status: 422, message: "stock locked".into() });
    let (status, body) = send(&app, "DELETE", "/o1/store/s/stock/i", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_of(&body)["message"], "stock locked");
}

#[tokio::test]
async fn invalid_domain_status_is_500_without_body() {
    let app = failing_app(|| ServiceError::Rejected { status: 999, message: "weird".into() });
    let (status, body) = send(&app, "GET", "/o1/store/s/stock", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn database_failure_is_500_without_body() {
    let app = failing_app(|| ServiceError::Db("connection refused".into()));
    let (status, body) = send(&app, "PUT", "/o1/store/s/stock/i", Some(json!({"quantity": 1}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

/// Stock service that records the page window each listing asks for.
#[derive(Default)]
struct RecordingStock {
    windows: Mutex<Vec<(u64, u64)>>,
}

#[async_trait]
impl StockService for RecordingStock {
    async fn add_stock_item(&self, _new: NewStockItem) -> Result<StockItemDto, ServiceError> { Err(ServiceError::Db("unused".into())) }
    async fn get_stock(&self, _store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError> {
        self.windows.lock().unwrap().push((page, size));
        Ok(StockDto { items: vec![], page, size, total_elements: 0 })
    }
    async fn edit_stock_item(&self, _store: &StoreRef, _item: &ItemRef, _fields: StockFields) -> Result<StockItemDto, ServiceError> { Err(ServiceError::Db("unused".into())) }
    async fn remove_stock_item(&self, _store: &StoreRef, _item: &ItemRef) -> Result<StockItemDto, ServiceError> { Err(ServiceError::Db("unused".into())) }
}

fn recording_app() -> (Router, Arc<RecordingStock>) {
    let recorder = Arc::new(RecordingStock::default());
    let mut state = AppState::from_repository(Arc::new(MockInventoryRepository::default()), PaginationConfig::default());
    state.stock = recorder.clone();
    (build_router(state, CorsLayer::very_permissive()), recorder)
}

#[tokio::test]
async fn page_size_reaches_the_service_unchanged() {
    let (app, recorder) = recording_app();
    for uri in ["/o1/store/s1/stock?page=2&size=5", "/o1/store/s1/stock?page=0&size=5", "/o1/store/s1/stock?page=1&size=100"] {
        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
    let (_, body) = send(&app, "GET", "/o1/store/s1/stock?page=3&size=7", None).await;
    let v = json_of(&body);
    assert_eq!(v["page"], 3);
    assert_eq!(v["size"], 7);

    assert_eq!(*recorder.windows.lock().unwrap(), vec![(1, 5), (0, 5), (0, 100), (2, 7)]);
}

#[tokio::test]
async fn out_of_range_page_size_is_400_and_skips_the_service() {
    let (app, recorder) = recording_app();
    for uri in ["/o1/store/s1/stock?page=1&size=200", "/o1/store/s1/stock?page=2&size=0"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            json_of(&body),
            json!({"status": 400, "error": "Bad Request", "message": "size must be between 1 and 100"})
        );
    }
    assert!(recorder.windows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ops_endpoints() {
    let app = app(seeded_repo(0).await);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"status": "ok"}));

    send(&app, "GET", "/o1/store/store-7/stock", None).await;
    let (status, body) = send(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("inventory_operations_total"));

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_of(&body)["paths"]["/{ownerId}/store/{storeId}/stock"].is_object());
}
