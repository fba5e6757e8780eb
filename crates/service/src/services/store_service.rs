use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};
use uuid::Uuid;

use models::store;

use crate::dto::{StoreDto, StoreRef};
use crate::errors::ServiceError;
use crate::repository::InventoryRepository;

/// Stores owned by an owner.
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Creates a store; an empty `public_id` gets a generated one.
    async fn create_store(&self, store: StoreDto) -> Result<StoreDto, ServiceError>;
    async fn edit_store(&self, store: StoreDto) -> Result<StoreDto, ServiceError>;
    /// Returns the deleted store. Its stock goes with it.
    async fn delete_store(&self, owner_id: &str, store: &StoreRef) -> Result<StoreDto, ServiceError>;
    async fn get_stores(&self, owner_id: &str) -> Result<Vec<StoreDto>, ServiceError>;
}

pub struct InventoryStoreService<R: InventoryRepository> {
    repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryStoreService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    async fn owned(&self, owner_id: &str, store: &StoreRef) -> Result<StoreDto, ServiceError> {
        models::validate_public_id("store id", store.as_str())?;
        match self.repo.find_store(store).await? {
            Some(found) if found.owner_id == owner_id => Ok(found),
            _ => Err(ServiceError::not_found("Store")),
        }
    }
}

fn normalize(s: &mut StoreDto) {
    s.name = s.name.trim().to_string();
    s.address = s.address.take().map(|a| a.trim().to_string()).filter(|a| !a.is_empty());
}

fn validate(s: &StoreDto) -> Result<(), ServiceError> {
    models::validate_public_id("owner id", &s.owner_id)?;
    models::validate_public_id("store id", &s.public_id)?;
    store::validate_name(&s.name)?;
    store::validate_address(s.address.as_deref())?;
    Ok(())
}

#[async_trait]
impl<R: InventoryRepository> StoreService for InventoryStoreService<R> {
    #[instrument(skip(self, store), fields(owner_id = %store.owner_id))]
    async fn create_store(&self, mut store: StoreDto) -> Result<StoreDto, ServiceError> {
        if store.public_id.trim().is_empty() {
            store.public_id = Uuid::new_v4().simple().to_string();
        }
        normalize(&mut store);
        validate(&store)?;

        if self.repo.find_store(&StoreRef::from(&store)).await?.is_some() {
            return Err(ServiceError::Conflict(format!("Store {} already exists", store.public_id)));
        }
        let created = self.repo.insert_store(store).await?;
        info!(store_id = %created.public_id, "store_created");
        Ok(created)
    }

    #[instrument(skip(self, store), fields(owner_id = %store.owner_id, store_id = %store.public_id))]
    async fn edit_store(&self, mut store: StoreDto) -> Result<StoreDto, ServiceError> {
        normalize(&mut store);
        validate(&store)?;
        self.owned(&store.owner_id, &StoreRef::from(&store)).await?;

        let updated = self
            .repo
            .update_store(store)
            .await?
            .ok_or_else(|| ServiceError::not_found("Store"))?;
        info!("store_edited");
        Ok(updated)
    }

    #[instrument(skip(self), fields(store_id = %store))]
    async fn delete_store(&self, owner_id: &str, store: &StoreRef) -> Result<StoreDto, ServiceError> {
        self.owned(owner_id, store).await?;
        let deleted = self
            .repo
            .delete_store(store)
            .await?
            .ok_or_else(|| ServiceError::not_found("Store"))?;
        info!("store_deleted");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn get_stores(&self, owner_id: &str) -> Result<Vec<StoreDto>, ServiceError> {
        models::validate_public_id("owner id", owner_id)?;
        self.repo.list_stores_by_owner(owner_id).await
    }
}
