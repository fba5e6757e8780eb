//! Conversions between HTTP payloads and service DTOs.
//!
//! Each pair of types has its own function. Conversions copy fields by name and
//! fall back to defaults for absent optional fields; they never validate. A
//! value that cannot be represented in the target type fails with
//! [`MappingError`], which handlers report as an internal error.

use thiserror::Error;

use service::dto::{ItemDto, ItemRef, NewStockItem, StockDto, StockFields, StockItemDto, StoreDto, StoreRef};

use crate::payload::{
    ItemModel, ItemRequestModel, StockItemModel, StockRequestModel, StockResponseModel, StoreModel,
    StoreRequestModel,
};

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("field `{field}` value {value} does not fit the target type")]
    OutOfRange { field: &'static str, value: i64 },
}

fn quantity(value: i64) -> Result<i32, MappingError> {
    i32::try_from(value).map_err(|_| MappingError::OutOfRange { field: "quantity", value })
}

/// POST body plus the store from the path. The item and store are attached as
/// references only.
pub fn new_stock_item(store_id: &str, body: StockRequestModel) -> Result<NewStockItem, MappingError> {
    Ok(NewStockItem {
        item: ItemRef::new(body.item),
        store: StoreRef::new(store_id),
        fields: StockFields { quantity: quantity(body.quantity)?, price: body.price, cost: body.cost },
    })
}

/// PUT body to the replacement stock fields.
pub fn stock_fields(body: &StockItemModel) -> Result<StockFields, MappingError> {
    Ok(StockFields { quantity: quantity(body.quantity)?, price: body.price, cost: body.cost })
}

pub fn item_model(dto: ItemDto) -> ItemModel {
    ItemModel { public_id: dto.public_id, name: dto.name, description: dto.description, seller_id: dto.seller_id }
}

pub fn store_model(dto: StoreDto) -> StoreModel {
    StoreModel { public_id: dto.public_id, name: dto.name, address: dto.address, owner_id: dto.owner_id }
}

pub fn stock_item_model(dto: StockItemDto) -> StockItemModel {
    StockItemModel {
        item: Some(item_model(dto.item)),
        store: Some(store_model(dto.store)),
        quantity: i64::from(dto.fields.quantity),
        price: dto.fields.price,
        cost: dto.fields.cost,
    }
}

pub fn stock_response(dto: StockDto) -> StockResponseModel {
    let total_pages = dto.total_pages();
    StockResponseModel {
        page: dto.page + 1,
        size: dto.size,
        total_elements: dto.total_elements,
        total_pages,
        items: dto.items.into_iter().map(stock_item_model).collect(),
    }
}

/// `public_id` overrides the body's id when present (the id from the path).
pub fn item_dto(seller_id: &str, public_id: Option<&str>, body: ItemRequestModel) -> ItemDto {
    ItemDto {
        public_id: public_id.map(str::to_string).or(body.public_id).unwrap_or_default(),
        name: body.name,
        description: body.description,
        seller_id: seller_id.to_string(),
    }
}

pub fn store_dto(owner_id: &str, public_id: Option<&str>, body: StoreRequestModel) -> StoreDto {
    StoreDto {
        public_id: public_id.map(str::to_string).or(body.public_id).unwrap_or_default(),
        name: body.name,
        address: body.address,
        owner_id: owner_id.to_string(),
    }
}
