use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};
use uuid::Uuid;

use models::item;

use crate::dto::{ItemDto, ItemRef};
use crate::errors::ServiceError;
use crate::repository::InventoryRepository;

/// Catalogue of items offered by sellers.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Registers a new item; an empty `public_id` gets a generated one.
    async fn register_item(&self, item: ItemDto) -> Result<ItemDto, ServiceError>;
    async fn edit_item(&self, item: ItemDto) -> Result<ItemDto, ServiceError>;
    /// Returns the deleted item. Stock entries of the item go with it.
    async fn delete_item(&self, seller_id: &str, item: &ItemRef) -> Result<ItemDto, ServiceError>;
    async fn get_items(&self, seller_id: &str) -> Result<Vec<ItemDto>, ServiceError>;
}

pub struct InventoryItemService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Item owned by `seller_id`; items of other sellers are reported as missing.
    async fn owned(&self, seller_id: &str, item: &ItemRef) -> Result<ItemDto, ServiceError> {
        models::validate_public_id("item id", item.as_str())?;
        match self.repo.find_item(item).await? {
            Some(found) if found.seller_id == seller_id => Ok(found),
            _ => Err(ServiceError::not_found("Item")),
        }
    }
}

fn validate(item: &ItemDto) -> Result<(), ServiceError> {
    models::validate_public_id("seller id", &item.seller_id)?;
    models::validate_public_id("item id", &item.public_id)?;
    item::validate_name(&item.name)?;
    Ok(())
}

#[async_trait]
impl<R: InventoryRepository> ItemService for InventoryItemService<R> {
    #[instrument(skip(self, item), fields(seller_id = %item.seller_id))]
    async fn register_item(&self, mut item: ItemDto) -> Result<ItemDto, ServiceError> {
        if item.public_id.trim().is_empty() {
            item.public_id = Uuid::new_v4().simple().to_string();
        }
        item.name = item.name.trim().to_string();
        validate(&item)?;

        if self.repo.find_item(&ItemRef::from(&item)).await?.is_some() {
            return Err(ServiceError::Conflict(format!("Item {} already exists", item.public_id)));
        }
        let created = self.repo.insert_item(item).await?;
        info!(item_id = %created.public_id, "item_registered");
        Ok(created)
    }

    #[instrument(skip(self, item), fields(seller_id = %item.seller_id, item_id = %item.public_id))]
    async fn edit_item(&self, mut item: ItemDto) -> Result<ItemDto, ServiceError> {
        item.name = item.name.trim().to_string();
        validate(&item)?;
        self.owned(&item.seller_id, &ItemRef::from(&item)).await?;

        let updated = self
            .repo
            .update_item(item)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item"))?;
        info!("item_edited");
        Ok(updated)
    }

    #[instrument(skip(self), fields(item_id = %item))]
    async fn delete_item(&self, seller_id: &str, item: &ItemRef) -> Result<ItemDto, ServiceError> {
        self.owned(seller_id, item).await?;
        let deleted = self
            .repo
            .delete_item(item)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item"))?;
        info!("item_deleted");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn get_items(&self, seller_id: &str) -> Result<Vec<ItemDto>, ServiceError> {
        models::validate_public_id("seller id", seller_id)?;
        self.repo.list_items_by_seller(seller_id).await
    }
}
