//! Data carried between controllers and services.
//!
//! DTOs live for a single request. Entities are addressed by their public
//! identifier only; storage keys never leave the repository.

use std::fmt;

use models::{errors::ModelError, stock_item};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDto {
    pub public_id: String,
    pub name: String,
    pub description: Option<String>,
    pub seller_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreDto {
    pub public_id: String,
    pub name: String,
    pub address: Option<String>,
    pub owner_id: String,
}

/// Quantity and pricing of one item in one store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StockFields {
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,
}

impl StockFields {
    pub fn validate(&self) -> Result<(), ModelError> {
        stock_item::validate_quantity(self.quantity)?;
        stock_item::validate_amount("price", self.price)?;
        stock_item::validate_amount("cost", self.cost)?;
        Ok(())
    }
}

/// A stock entry with its item and store resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItemDto {
    pub item: ItemDto,
    pub store: StoreDto,
    pub fields: StockFields,
}

/// One page of a store's stock.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDto {
    pub items: Vec<StockItemDto>,
    /// zero-based page index
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl StockDto {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 { 0 } else { self.total_elements.div_ceil(self.size) }
    }
}

/// Reference to an item by public id; the service resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemRef {
    public_id: String,
}

impl ItemRef {
    pub fn new(public_id: impl Into<String>) -> Self { Self { public_id: public_id.into() } }
    pub fn as_str(&self) -> &str { &self.public_id }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.public_id) }
}

/// Reference to a store by public id; the service resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreRef {
    public_id: String,
}

impl StoreRef {
    pub fn new(public_id: impl Into<String>) -> Self { Self { public_id: public_id.into() } }
    pub fn as_str(&self) -> &str { &self.public_id }
}

impl fmt::Display for StoreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.public_id) }
}

impl From<&ItemDto> for ItemRef {
    fn from(item: &ItemDto) -> Self { ItemRef::new(item.public_id.clone()) }
}

impl From<&StoreDto> for StoreRef {
    fn from(store: &StoreDto) -> Self { StoreRef::new(store.public_id.clone()) }
}

/// Input of `add_stock_item`: what to stock, where, and how much.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStockItem {
    pub item: ItemRef,
    pub store: StoreRef,
    pub fields: StockFields,
}
