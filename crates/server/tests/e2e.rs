use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use configs::PaginationConfig;
use server::{routes, state::AppState};
use service::dto::{ItemDto, StoreDto};
use service::repository::{mock::MockInventoryRepository, InventoryRepository};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(MockInventoryRepository::default());
    repo.insert_store(StoreDto { public_id: "store-7".into(), name: "Seven".into(), address: None, owner_id: "o1".into() })
        .await?;
    repo.insert_item(ItemDto { public_id: "sku-1".into(), name: "Bolt".into(), description: None, seller_id: "o1".into() })
        .await?;

    let state = AppState::from_repository(repo, PaginationConfig::default());
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_stock_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let stock_url = format!("{}/o1/store/store-7/stock", app.base_url);

    let res = client.post(&stock_url).json(&json!({"item": "sku-1", "quantity": 10})).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await?;
    assert_eq!(created["item"]["publicId"], "sku-1");
    assert_eq!(created["store"]["publicId"], "store-7");
    assert_eq!(created["quantity"], 10);

    let page: Value = client.get(format!("{stock_url}?page=1&size=5")).send().await?.json().await?;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["size"], 5);

    let res = client
        .put(format!("{stock_url}/sku-1"))
        .json(&json!({"quantity": 3, "price": 9.5}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["price"], 9.5);

    let res = client.delete(format!("{stock_url}/sku-1")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let deleted: Value = res.json().await?;
    assert_eq!(deleted["quantity"], 3);

    let res = client.delete(format!("{stock_url}/sku-1")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
