use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod items;
pub mod stock;
pub mod stores;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::payload::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Build the full application router: inventory routes plus health, metrics and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let inventory = Router::new()
        .route("/:owner_id/store/:store_id/stock", get(stock::find_stocks).post(stock::create_stock))
        .route("/:owner_id/store/:store_id/stock/:item_id", put(stock::update_stock).delete(stock::delete_stock))
        .route("/:owner_id/items", get(items::list_items).post(items::register_item))
        .route("/:owner_id/items/:item_id", put(items::edit_item).delete(items::delete_item))
        .route("/:owner_id/store", get(stores::list_stores).post(stores::create_store))
        .route("/:owner_id/store/:store_id", put(stores::edit_store).delete(stores::delete_store))
        .with_state(state);

    ops.merge(inventory)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, with method and path, at INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
