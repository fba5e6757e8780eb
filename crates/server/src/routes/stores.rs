use axum::extract::{Path, State};
use axum::Json;

use service::dto::StoreRef;

use crate::boundary::{Failure, Operation};
use crate::errors::ApiError;
use crate::mapper;
use crate::payload::{StoreModel, StoreRequestModel};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/{ownerId}/store", tag = "stores",
    params(("ownerId" = String, Path, description = "Owner id")),
    request_body = StoreRequestModel,
    responses(
        (status = 200, description = "Created", body = StoreModel),
        (status = 400, description = "Validation Error", body = crate::payload::ErrorBody),
        (status = 409, description = "Duplicate public id", body = crate::payload::ErrorBody)
    )
)]
pub async fn create_store(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Json(body): Json<StoreRequestModel>,
) -> Result<Json<StoreModel>, ApiError> {
    Operation::new("createStore", &owner_id)
        .run(async {
            let created = state.stores.create_store(mapper::store_dto(&owner_id, None, body)).await?;
            Ok::<_, Failure>(mapper::store_model(created))
        })
        .await
}

#[utoipa::path(
    get, path = "/{ownerId}/store", tag = "stores",
    params(("ownerId" = String, Path, description = "Owner id")),
    responses((status = 200, description = "Stores of the owner", body = [StoreModel]))
)]
pub async fn list_stores(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<StoreModel>>, ApiError> {
    Operation::new("listStores", &owner_id)
        .run(async {
            let stores = state.stores.get_stores(&owner_id).await?;
            Ok::<_, Failure>(stores.into_iter().map(mapper::store_model).collect())
        })
        .await
}

#[utoipa::path(
    put, path = "/{ownerId}/store/{storeId}", tag = "stores",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id")
    ),
    request_body = StoreRequestModel,
    responses(
        (status = 200, description = "Updated", body = StoreModel),
        (status = 404, description = "Store not found", body = crate::payload::ErrorBody)
    )
)]
pub async fn edit_store(
    State(state): State<AppState>,
    Path((owner_id, store_id)): Path<(String, String)>,
    Json(body): Json<StoreRequestModel>,
) -> Result<Json<StoreModel>, ApiError> {
    Operation::new("editStore", &owner_id)
        .store(&store_id)
        .run(async {
            let updated = state.stores.edit_store(mapper::store_dto(&owner_id, Some(&store_id), body)).await?;
            Ok::<_, Failure>(mapper::store_model(updated))
        })
        .await
}

#[utoipa::path(
    delete, path = "/{ownerId}/store/{storeId}", tag = "stores",
    params(
        ("ownerId" = String, Path, description = "Owner id"),
        ("storeId" = String, Path, description = "Store public id")
    ),
    responses(
        (status = 200, description = "Deleted record", body = StoreModel),
        (status = 404, description = "Store not found", body = crate::payload::ErrorBody)
    )
)]
pub async fn delete_store(
    State(state): State<AppState>,
    Path((owner_id, store_id)): Path<(String, String)>,
) -> Result<Json<StoreModel>, ApiError> {
    Operation::new("deleteStore", &owner_id)
        .store(&store_id)
        .run(async {
            let deleted = state.stores.delete_store(&owner_id, &StoreRef::new(store_id.as_str())).await?;
            Ok::<_, Failure>(mapper::store_model(deleted))
        })
        .await
}
