use std::sync::Arc;

use configs::PaginationConfig;
use service::repository::InventoryRepository;
use service::services::{
    InventoryItemService, InventoryStockService, InventoryStoreService, ItemService, StockService, StoreService,
};

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub stock: Arc<dyn StockService>,
    pub items: Arc<dyn ItemService>,
    pub stores: Arc<dyn StoreService>,
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Wire all services over one repository.
    pub fn from_repository<R: InventoryRepository + 'static>(repo: Arc<R>, pagination: PaginationConfig) -> Self {
        Self {
            stock: Arc::new(InventoryStockService::new(Arc::clone(&repo))),
            items: Arc::new(InventoryItemService::new(Arc::clone(&repo))),
            stores: Arc::new(InventoryStoreService::new(repo)),
            pagination,
        }
    }
}
