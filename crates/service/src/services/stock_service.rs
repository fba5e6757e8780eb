use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::dto::{ItemRef, NewStockItem, StockDto, StockFields, StockItemDto, StoreRef};
use crate::errors::ServiceError;
use crate::repository::InventoryRepository;

/// Stock placement of items in stores.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn add_stock_item(&self, new: NewStockItem) -> Result<StockItemDto, ServiceError>;
    /// `page` is the zero-based page index.
    async fn get_stock(&self, store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError>;
    async fn edit_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<StockItemDto, ServiceError>;
    /// Returns the deleted entry.
    async fn remove_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<StockItemDto, ServiceError>;
}

pub struct InventoryStockService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryStockService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    async fn require_store(&self, store: &StoreRef) -> Result<(), ServiceError> {
        models::validate_public_id("store id", store.as_str())?;
        match self.repo.find_store(store).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Store")),
        }
    }

    async fn require_item(&self, item: &ItemRef) -> Result<(), ServiceError> {
        models::validate_public_id("item id", item.as_str())?;
        match self.repo.find_item(item).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Item")),
        }
    }
}

#[async_trait]
impl<R: InventoryRepository> StockService for InventoryStockService<R> {
    #[instrument(skip(self, new), fields(store_id = %new.store, item_id = %new.item))]
    async fn add_stock_item(&self, new: NewStockItem) -> Result<StockItemDto, ServiceError> {
        models::validate_public_id("item id", new.item.as_str())?;
        new.fields.validate()?;
        self.require_store(&new.store).await?;
        self.require_item(&new.item).await?;

        if self.repo.find_stock_item(&new.store, &new.item).await?.is_some() {
            debug!("stock entry exists");
            return Err(ServiceError::Conflict("Item is already stocked in this store".into()));
        }

        let created = self.repo.insert_stock_item(&new.store, &new.item, new.fields).await?;
        info!(quantity = created.fields.quantity, "stock_item_added");
        Ok(created)
    }

    #[instrument(skip(self), fields(store_id = %store))]
    async fn get_stock(&self, store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError> {
        if size == 0 {
            return Err(ServiceError::Validation("size must be at least 1".into()));
        }
        self.require_store(store).await?;
        self.repo.page_stock(store, page, size).await
    }

    #[instrument(skip(self, update), fields(store_id = %store, item_id = %item))]
    async fn edit_stock_item(&self, store: &StoreRef, item: &ItemRef, update: StockFields) -> Result<StockItemDto, ServiceError> {
        models::validate_public_id("item id", item.as_str())?;
        update.validate()?;
        self.require_store(store).await?;
        self.require_item(item).await?;

        let updated = self
            .repo
            .update_stock_item(store, item, update)
            .await?
            .ok_or_else(|| ServiceError::not_found("Stock item"))?;
        info!(quantity = updated.fields.quantity, "stock_item_edited");
        Ok(updated)
    }

    #[instrument(skip(self), fields(store_id = %store, item_id = %item))]
    async fn remove_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<StockItemDto, ServiceError> {
        models::validate_public_id("item id", item.as_str())?;
        self.require_store(store).await?;
        self.require_item(item).await?;

        let removed = self
            .repo
            .delete_stock_item(store, item)
            .await?
            .ok_or_else(|| ServiceError::not_found("Stock item"))?;
        info!("stock_item_removed");
        Ok(removed)
    }
}
