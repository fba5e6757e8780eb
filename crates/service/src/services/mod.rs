pub mod item_service;
pub mod stock_service;
pub mod store_service;

pub use item_service::{InventoryItemService, ItemService};
pub use stock_service::{InventoryStockService, StockService};
pub use store_service::{InventoryStoreService, StoreService};
