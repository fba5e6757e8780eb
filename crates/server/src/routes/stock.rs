use axum::extract::{Path, Query, State};
use axum::Json;

use service::dto::{ItemRef, StoreRef};
use service::pagination::Pagination;

use crate::boundary::{Failure, Operation};
use crate::errors::ApiError;
use crate::mapper;
use crate::payload::{PageQuery, StockItemModel, StockRequestModel, StockResponseModel};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/{ownerId}/store/{storeId}/stock", tag = "stock",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id")
    ),
    request_body = StockRequestModel,
    responses(
        (status = 200, description = "Created", body = StockItemModel),
        (status = 400, description = "Validation Error", body = crate::payload::ErrorBody),
        (status = 404, description = "Store or item not found", body = crate::payload::ErrorBody),
        (status = 409, description = "Item already stocked", body = crate::payload::ErrorBody),
        (status = 500, description = "Internal error, empty body")
    )
)]
pub async fn create_stock(
    State(state): State<AppState>,
    Path((owner_id, store_id)): Path<(String, String)>,
    Json(body): Json<StockRequestModel>,
) -> Result<Json<StockItemModel>, ApiError> {
    let item_id = body.item.clone();
    Operation::new("createStock", &owner_id)
        .store(&store_id)
        .item(&item_id)
        .run(async {
            let new = mapper::new_stock_item(&store_id, body)?;
            let created = state.stock.add_stock_item(new).await?;
            Ok::<_, Failure>(mapper::stock_item_model(created))
        })
        .await
}

#[utoipa::path(
    get, path = "/{ownerId}/store/{storeId}/stock", tag = "stock",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of stock", body = StockResponseModel),
        (status = 400, description = "Page size out of range", body = crate::payload::ErrorBody),
        (status = 404, description = "Store not found", body = crate::payload::ErrorBody),
        (status = 500, description = "Internal error, empty body")
    )
)]
pub async fn find_stocks(
    State(state): State<AppState>,
    Path((owner_id, store_id)): Path<(String, String)>,
    Query(q): Query<PageQuery>,
) -> Result<Json<StockResponseModel>, ApiError> {
    let pagination = Pagination {
        page: q.page.unwrap_or(1),
        per_page: q.size.unwrap_or(state.pagination.default_page_size),
    };
    Operation::new("findStocks", &owner_id)
        .store(&store_id)
        .run(async {
            let (page_index, size) = pagination.window(state.pagination.max_page_size)?;
            let page = state.stock.get_stock(&StoreRef::new(store_id.as_str()), page_index, size).await?;
            Ok::<_, Failure>(mapper::stock_response(page))
        })
        .await
}

#[utoipa::path(
    put, path = "/{ownerId}/store/{storeId}/stock/{itemId}", tag = "stock",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id"),
        ("itemId" = String, Path, description = "Item public id")
    ),
    request_body = StockItemModel,
    responses(
        (status = 200, description = "Updated", body = StockItemModel),
        (status = 400, description = "Validation Error", body = crate::payload::ErrorBody),
        (status = 404, description = "Stock item not found", body = crate::payload::ErrorBody),
        (status = 500, description = "Internal error, empty body")
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    Path((owner_id, store_id, item_id)): Path<(String, String, String)>,
    Json(body): Json<StockItemModel>,
) -> Result<Json<StockItemModel>, ApiError> {
    Operation::new("updateStock", &owner_id)
        .store(&store_id)
        .item(&item_id)
        .run(async {
            let fields = mapper::stock_fields(&body)?;
            let updated = state
                .stock
                .edit_stock_item(&StoreRef::new(store_id.as_str()), &ItemRef::new(item_id.as_str()), fields)
                .await?;
            Ok::<_, Failure>(mapper::stock_item_model(updated))
        })
        .await
}

#[utoipa::path(
    delete, path = "/{ownerId}/store/{storeId}/stock/{itemId}", tag = "stock",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id"),
        ("itemId" = String, Path, description = "Item public id")
    ),
    responses(
        (status = 200, description = "Deleted record", body = StockItemModel),
        (status = 404, description = "Stock item not found", body = crate::payload::ErrorBody),
        (status = 500, description = "Internal error, empty body")
    )
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    Path((owner_id, store_id, item_id)): Path<(String, String, String)>,
) -> Result<Json<StockItemModel>, ApiError> {
    Operation::new("deleteStock", &owner_id)
        .store(&store_id)
        .item(&item_id)
        .run(async {
            let removed = state
                .stock
                .remove_stock_item(&StoreRef::new(store_id.as_str()), &ItemRef::new(item_id.as_str()))
                .await?;
            Ok::<_, Failure>(mapper::stock_item_model(removed))
        })
        .await
}
