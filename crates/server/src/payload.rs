//! JSON request and response bodies of the HTTP surface.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemModel {
    pub public_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub seller_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreModel {
    pub public_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub owner_id: String,
}

/// Body of `POST /{ownerId}/store/{storeId}/stock`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockRequestModel {
    /// public id of the item to stock
    #[serde(default)]
    pub item: String,
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
}

/// A stock entry. As a PUT body only the stock fields are read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItemModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreModel>,
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
}

/// One page of a store's stock; `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockResponseModel {
    pub items: Vec<StockItemModel>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestModel {
    /// generated when absent on create; taken from the path on update
    #[serde(default)]
    pub public_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequestModel {
    #[serde(default)]
    pub public_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, default 1
    pub page: Option<u32>,
    /// page size, default from configuration
    pub size: Option<u32>,
}

/// Body of a domain error response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
