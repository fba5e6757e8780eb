use utoipa::OpenApi;

use crate::payload::{
    ErrorBody, HealthResponse, ItemModel, ItemRequestModel, StockItemModel, StockRequestModel,
    StockResponseModel, StoreModel, StoreRequestModel,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::stock::create_stock,
        crate::routes::stock::find_stocks,
        crate::routes::stock::update_stock,
        crate::routes::stock::delete_stock,
        crate::routes::items::register_item,
        crate::routes::items::list_items,
        crate::routes::items::edit_item,
        crate::routes::items::delete_item,
        crate::routes::stores::create_store,
        crate::routes::stores::list_stores,
        crate::routes::stores::edit_store,
        crate::routes::stores::delete_store,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            ItemModel,
            ItemRequestModel,
            StoreModel,
            StoreRequestModel,
            StockRequestModel,
            StockItemModel,
            StockResponseModel,
        )
    ),
    tags(
        (name = "health"),
        (name = "stock"),
        (name = "items"),
        (name = "stores")
    )
)]
pub struct ApiDoc;
