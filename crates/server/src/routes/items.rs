use axum::extract::{Path, State};
use axum::Json;

use service::dto::ItemRef;

use crate::boundary::{Failure, Operation};
use crate::errors::ApiError;
use crate::mapper;
use crate::payload::{ItemModel, ItemRequestModel};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/{ownerId}/items", tag = "items",
    params(("ownerId" = String, Path, description = "Seller id")),
    request_body = ItemRequestModel,
    responses(
        (status = 200, description = "Registered", body = ItemModel),
        (status = 400, description = "Validation Error", body = crate::payload::ErrorBody),
        (status = 409, description = "Duplicate public id", body = crate::payload::ErrorBody)
    )
)]
pub async fn register_item(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Json(body): Json<ItemRequestModel>,
) -> Result<Json<ItemModel>, ApiError> {
    Operation::new("registerItem", &owner_id)
        .run(async {
            let created = state.items.register_item(mapper::item_dto(&owner_id, None, body)).await?;
            Ok::<_, Failure>(mapper::item_model(created))
        })
        .await
}

#[utoipa::path(
    get, path = "/{ownerId}/items", tag = "items",
    params(("ownerId" = String, Path, description = "Seller id")),
    responses((status = 200, description = "Items of the seller", body = [ItemModel]))
)]
pub async fn list_items(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<ItemModel>>, ApiError> {
    Operation::new("listItems", &owner_id)
        .run(async {
            let items = state.items.get_items(&owner_id).await?;
            Ok::<_, Failure>(items.into_iter().map(mapper::item_model).collect())
        })
        .await
}

#[utoipa::path(
    put, path = "/{ownerId}/items/{itemId}", tag = "items",
    params(
        ("ownerId" = String, Path, description = "Seller id"),
        ("itemId" = String, Path, description = "Item public id")
    ),
    request_body = ItemRequestModel,
    responses(
        (status = 200, description = "Updated", body = ItemModel),
        (status = 404, description = "Item not found", body = crate::payload::ErrorBody)
    )
)]
pub async fn edit_item(
    State(state): State<AppState>,
    Path((owner_id, item_id)): Path<(String, String)>,
    Json(body): Json<ItemRequestModel>,
) -> Result<Json<ItemModel>, ApiError> {
    Operation::new("editItem", &owner_id)
        .item(&item_id)
        .run(async {
            let updated = state.items.edit_item(mapper::item_dto(&owner_id, Some(&item_id), body)).await?;
            Ok::<_, Failure>(mapper::item_model(updated))
        })
        .await
}

#[utoipa::path(
    delete, path = "/{ownerId}/items/{itemId}", tag = "items",
    params(
        ("ownerId" = String, Path, description = "Seller id"),
        ("itemId" = String, Path, description = "Item public id")
    ),
    responses(
        (status = 200, description = "Deleted record", body = ItemModel),
        (status = 404, description = "Item not found", body = crate::payload::ErrorBody)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path((owner_id, item_id)): Path<(String, String)>,
) -> Result<Json<ItemModel>, ApiError> {
    Operation::new("deleteItem", &owner_id)
        .item(&item_id)
        .run(async {
            let deleted = state.items.delete_item(&owner_id, &ItemRef::new(item_id.as_str())).await?;
            Ok::<_, Failure>(mapper::item_model(deleted))
        })
        .await
}
