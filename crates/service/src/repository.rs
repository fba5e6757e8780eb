use async_trait::async_trait;

use crate::dto::{ItemDto, ItemRef, StockDto, StockFields, StockItemDto, StoreDto, StoreRef};
use crate::errors::ServiceError;

/// Repository abstraction for inventory persistence.
///
/// Lookups return `Ok(None)` for unknown public ids; deciding whether that is a
/// domain error is left to the services.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn find_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError>;
    async fn list_items_by_seller(&self, seller_id: &str) -> Result<Vec<ItemDto>, ServiceError>;
    async fn insert_item(&self, item: ItemDto) -> Result<ItemDto, ServiceError>;
    async fn update_item(&self, item: ItemDto) -> Result<Option<ItemDto>, ServiceError>;
    async fn delete_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError>;

    async fn find_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError>;
    async fn list_stores_by_owner(&self, owner_id: &str) -> Result<Vec<StoreDto>, ServiceError>;
    async fn insert_store(&self, store: StoreDto) -> Result<StoreDto, ServiceError>;
    async fn update_store(&self, store: StoreDto) -> Result<Option<StoreDto>, ServiceError>;
    async fn delete_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError>;

    async fn find_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError>;
    /// `page` is zero-based; `size` must be at least 1.
    async fn page_stock(&self, store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError>;
    async fn insert_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<StockItemDto, ServiceError>;
    async fn update_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<Option<StockItemDto>, ServiceError>;
    async fn delete_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        // insertion order is the listing order
        items: Vec<ItemDto>,
        stores: Vec<StoreDto>,
        stock: Vec<(String, String, StockFields)>, // (store public id, item public id, fields)
    }

    impl State {
        fn item(&self, public_id: &str) -> Option<&ItemDto> {
            self.items.iter().find(|i| i.public_id == public_id)
        }

        fn store(&self, public_id: &str) -> Option<&StoreDto> {
            self.stores.iter().find(|s| s.public_id == public_id)
        }

        fn stock_position(&self, store: &str, item: &str) -> Option<usize> {
            self.stock.iter().position(|(s, i, _)| s == store && i == item)
        }

        fn resolve(&self, store: &str, item: &str, fields: StockFields) -> Result<StockItemDto, ServiceError> {
            let store = self.store(store).cloned().ok_or_else(|| ServiceError::not_found("Store"))?;
            let item = self.item(item).cloned().ok_or_else(|| ServiceError::not_found("Item"))?;
            Ok(StockItemDto { item, store, fields })
        }
    }

    #[derive(Default)]
    pub struct MockInventoryRepository {
        state: Mutex<State>,
    }

    impl MockInventoryRepository {
        fn state(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[async_trait]
    impl InventoryRepository for MockInventoryRepository {
        async fn find_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError> {
            Ok(self.state().item(item.as_str()).cloned())
        }

        async fn list_items_by_seller(&self, seller_id: &str) -> Result<Vec<ItemDto>, ServiceError> {
            Ok(self.state().items.iter().filter(|i| i.seller_id == seller_id).cloned().collect())
        }

        async fn insert_item(&self, item: ItemDto) -> Result<ItemDto, ServiceError> {
            let mut state = self.state();
            if state.item(&item.public_id).is_some() {
                return Err(ServiceError::Conflict(format!("Item {} already exists", item.public_id)));
            }
            state.items.push(item.clone());
            Ok(item)
        }

        async fn update_item(&self, item: ItemDto) -> Result<Option<ItemDto>, ServiceError> {
            let mut state = self.state();
            let Some(existing) = state.items.iter_mut().find(|i| i.public_id == item.public_id) else {
                return Ok(None);
            };
            *existing = item.clone();
            Ok(Some(item))
        }

        async fn delete_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError> {
            let mut state = self.state();
            let Some(pos) = state.items.iter().position(|i| i.public_id == item.as_str()) else {
                return Ok(None);
            };
            state.stock.retain(|(_, i, _)| i != item.as_str());
            Ok(Some(state.items.remove(pos)))
        }

        async fn find_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError> {
            Ok(self.state().store(store.as_str()).cloned())
        }

        async fn list_stores_by_owner(&self, owner_id: &str) -> Result<Vec<StoreDto>, ServiceError> {
            Ok(self.state().stores.iter().filter(|s| s.owner_id == owner_id).cloned().collect())
        }

        async fn insert_store(&self, store: StoreDto) -> Result<StoreDto, ServiceError> {
            let mut state = self.state();
            if state.store(&store.public_id).is_some() {
                return Err(ServiceError::Conflict(format!("Store {} already exists", store.public_id)));
            }
            state.stores.push(store.clone());
            Ok(store)
        }

        async fn update_store(&self, store: StoreDto) -> Result<Option<StoreDto>, ServiceError> {
            let mut state = self.state();
            let Some(existing) = state.stores.iter_mut().find(|s| s.public_id == store.public_id) else {
                return Ok(None);
            };
            *existing = store.clone();
            Ok(Some(store))
        }

        async fn delete_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError> {
            let mut state = self.state();
            let Some(pos) = state.stores.iter().position(|s| s.public_id == store.as_str()) else {
                return Ok(None);
            };
            state.stock.retain(|(s, _, _)| s != store.as_str());
            Ok(Some(state.stores.remove(pos)))
        }

        async fn find_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError> {
            let state = self.state();
            match state.stock_position(store.as_str(), item.as_str()) {
                Some(pos) => {
                    let fields = state.stock[pos].2;
                    state.resolve(store.as_str(), item.as_str(), fields).map(Some)
                }
                None => Ok(None),
            }
        }

        async fn page_stock(&self, store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError> {
            let state = self.state();
            if state.store(store.as_str()).is_none() {
                return Err(ServiceError::not_found("Store"));
            }
            if size == 0 {
                return Err(ServiceError::Validation("size must be at least 1".into()));
            }
            let rows: Vec<_> = state.stock.iter().filter(|(s, _, _)| s == store.as_str()).collect();
            let total_elements = rows.len() as u64;
            let items = rows
                .into_iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .map(|(s, i, fields)| state.resolve(s, i, *fields))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(StockDto { items, page, size, total_elements })
        }

        async fn insert_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<StockItemDto, ServiceError> {
            let mut state = self.state();
            if state.stock_position(store.as_str(), item.as_str()).is_some() {
                return Err(ServiceError::Conflict("Item is already stocked in this store".into()));
            }
            let created = state.resolve(store.as_str(), item.as_str(), fields)?;
            state.stock.push((store.as_str().to_string(), item.as_str().to_string(), fields));
            Ok(created)
        }

        async fn update_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<Option<StockItemDto>, ServiceError> {
            let mut state = self.state();
            let Some(pos) = state.stock_position(store.as_str(), item.as_str()) else {
                return Ok(None);
            };
            state.stock[pos].2 = fields;
            state.resolve(store.as_str(), item.as_str(), fields).map(Some)
        }

        async fn delete_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError> {
            let mut state = self.state();
            let Some(pos) = state.stock_position(store.as_str(), item.as_str()) else {
                return Ok(None);
            };
            let fields = state.stock[pos].2;
            let deleted = state.resolve(store.as_str(), item.as_str(), fields)?;
            state.stock.remove(pos);
            Ok(Some(deleted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockInventoryRepository;
    use super::*;

    #[tokio::test]
    async fn duplicate_inserts_are_conflicts() {
        let repo = MockInventoryRepository::default();
        let store = StoreDto { public_id: "s1".into(), name: "Main".into(), address: None, owner_id: "o1".into() };
        let item = ItemDto { public_id: "i1".into(), name: "Bolt".into(), description: None, seller_id: "o1".into() };
        repo.insert_store(store.clone()).await.unwrap();
        repo.insert_item(item.clone()).await.unwrap();

        let err = repo.insert_store(store).await.unwrap_err();
        assert_eq!(err.domain_message(), Some("Store s1 already exists"));
        let err = repo.insert_item(item).await.unwrap_err();
        assert_eq!(err.domain_message(), Some("Item i1 already exists"));

        let fields = StockFields { quantity: 1, price: 1.0, cost: 0.5 };
        let (s, i) = (StoreRef::new("s1"), ItemRef::new("i1"));
        repo.insert_stock_item(&s, &i, fields).await.unwrap();
        let err = repo.insert_stock_item(&s, &i, fields).await.unwrap_err();
        assert_eq!(err.status_code(), Some(409));
    }
}
