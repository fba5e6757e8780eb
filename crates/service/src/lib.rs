//! Service layer providing inventory operations on top of models.
//! - Separates business rules from data access (`repository` trait, `repo` impls).
//! - Reuses validation and entity definitions in `models` crate.
//! - Domain failures carry a status and client message (`errors::ServiceError`).
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//! use service::dto::{ItemDto, ItemRef, NewStockItem, StockFields, StoreDto, StoreRef};
//! use service::repository::{mock::MockInventoryRepository, InventoryRepository};
//! use service::services::{InventoryStockService, StockService};
//!
//! let repo = Arc::new(MockInventoryRepository::default());
//! tokio_test::block_on(async {
//!     repo.insert_store(StoreDto { public_id: "s1".into(), name: "Main".into(), address: None, owner_id: "o1".into() }).await.unwrap();
//!     repo.insert_item(ItemDto { public_id: "i1".into(), name: "Bolt".into(), description: None, seller_id: "o1".into() }).await.unwrap();
//! });
//!
//! let svc = InventoryStockService::new(repo);
//! let new = NewStockItem { item: ItemRef::new("i1"), store: StoreRef::new("s1"), fields: StockFields { quantity: 3, price: 1.5, cost: 1.0 } };
//! let created = tokio_test::block_on(svc.add_stock_item(new)).unwrap();
//! assert_eq!(created.item.name, "Bolt");
//! ```

pub mod dto;
pub mod errors;
pub mod pagination;
pub mod repo;
pub mod repository;
pub mod services;
#[cfg(test)]
pub mod test_support;
