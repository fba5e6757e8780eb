use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use models::{item, stock_item, store};

use crate::dto::{ItemDto, ItemRef, StockDto, StockFields, StockItemDto, StoreDto, StoreRef};
use crate::errors::ServiceError;
use crate::repository::InventoryRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmInventoryRepository {
    pub db: DatabaseConnection,
}

fn item_dto(m: item::Model) -> ItemDto {
    ItemDto { public_id: m.public_id, name: m.name, description: m.description, seller_id: m.seller_id }
}

fn store_dto(m: store::Model) -> StoreDto {
    StoreDto { public_id: m.public_id, name: m.name, address: m.address, owner_id: m.owner_id }
}

fn fields_of(m: &stock_item::Model) -> StockFields {
    StockFields { quantity: m.quantity, price: m.price, cost: m.cost }
}

/// Insert failure: a unique-key violation is a conflict, anything else a database error.
fn insert_err(e: DbErr, conflict: impl FnOnce() -> String) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Conflict(conflict()),
        _ => ServiceError::Db(e.to_string()),
    }
}

impl SeaOrmInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn item_model(&self, item: &ItemRef) -> Result<Option<item::Model>, ServiceError> {
        Ok(item::Entity::find()
            .filter(item::Column::PublicId.eq(item.as_str()))
            .one(&self.db)
            .await?)
    }

    async fn store_model(&self, store: &StoreRef) -> Result<Option<store::Model>, ServiceError> {
        Ok(store::Entity::find()
            .filter(store::Column::PublicId.eq(store.as_str()))
            .one(&self.db)
            .await?)
    }

    /// Resolve both sides of a stock entry plus the row itself.
    async fn stock_row(
        &self,
        store: &StoreRef,
        item: &ItemRef,
    ) -> Result<Option<(store::Model, item::Model, stock_item::Model)>, ServiceError> {
        let Some(s) = self.store_model(store).await? else { return Ok(None) };
        let Some(i) = self.item_model(item).await? else { return Ok(None) };
        let row = stock_item::Entity::find()
            .filter(stock_item::Column::StoreId.eq(s.id))
            .filter(stock_item::Column::ItemId.eq(i.id))
            .one(&self.db)
            .await?;
        Ok(row.map(|r| (s, i, r)))
    }
}

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn find_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError> {
        Ok(self.item_model(item).await?.map(item_dto))
    }

    async fn list_items_by_seller(&self, seller_id: &str) -> Result<Vec<ItemDto>, ServiceError> {
        let rows = item::Entity::find()
            .filter(item::Column::SellerId.eq(seller_id))
            .order_by_asc(item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(item_dto).collect())
    }

    async fn insert_item(&self, item: ItemDto) -> Result<ItemDto, ServiceError> {
        let now = Utc::now();
        let am = item::ActiveModel {
            id: Set(Uuid::new_v4()),
            public_id: Set(item.public_id.clone()),
            seller_id: Set(item.seller_id),
            name: Set(item.name),
            description: Set(item.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let public_id = item.public_id.clone();
        let created = am
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, || format!("Item {public_id} already exists")))?;
        Ok(item_dto(created))
    }

    async fn update_item(&self, item: ItemDto) -> Result<Option<ItemDto>, ServiceError> {
        let Some(existing) = self.item_model(&ItemRef::from(&item)).await? else { return Ok(None) };
        let mut am: item::ActiveModel = existing.into();
        am.name = Set(item.name);
        am.description = Set(item.description);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(item_dto(updated)))
    }

    async fn delete_item(&self, item: &ItemRef) -> Result<Option<ItemDto>, ServiceError> {
        let Some(existing) = self.item_model(item).await? else { return Ok(None) };
        existing.clone().delete(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(item_dto(existing)))
    }

    async fn find_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError> {
        Ok(self.store_model(store).await?.map(store_dto))
    }

    async fn list_stores_by_owner(&self, owner_id: &str) -> Result<Vec<StoreDto>, ServiceError> {
        let rows = store::Entity::find()
            .filter(store::Column::OwnerId.eq(owner_id))
            .order_by_asc(store::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(store_dto).collect())
    }

    async fn insert_store(&self, store: StoreDto) -> Result<StoreDto, ServiceError> {
        let now = Utc::now();
        let am = store::ActiveModel {
            id: Set(Uuid::new_v4()),
            public_id: Set(store.public_id.clone()),
            owner_id: Set(store.owner_id),
            name: Set(store.name),
            address: Set(store.address),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let public_id = store.public_id.clone();
        let created = am
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, || format!("Store {public_id} already exists")))?;
        Ok(store_dto(created))
    }

    async fn update_store(&self, store: StoreDto) -> Result<Option<StoreDto>, ServiceError> {
        let Some(existing) = self.store_model(&StoreRef::from(&store)).await? else { return Ok(None) };
        let mut am: store::ActiveModel = existing.into();
        am.name = Set(store.name);
        am.address = Set(store.address);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(store_dto(updated)))
    }

    async fn delete_store(&self, store: &StoreRef) -> Result<Option<StoreDto>, ServiceError> {
        let Some(existing) = self.store_model(store).await? else { return Ok(None) };
        existing.clone().delete(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(store_dto(existing)))
    }

    async fn find_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError> {
        Ok(self.stock_row(store, item).await?.map(|(s, i, row)| StockItemDto {
            fields: fields_of(&row),
            item: item_dto(i),
            store: store_dto(s),
        }))
    }

    async fn page_stock(&self, store: &StoreRef, page: u64, size: u64) -> Result<StockDto, ServiceError> {
        let Some(s) = self.store_model(store).await? else { return Err(ServiceError::not_found("Store")) };
        if size == 0 {
            return Err(ServiceError::Validation("size must be at least 1".into()));
        }
        let paginator = stock_item::Entity::find()
            .filter(stock_item::Column::StoreId.eq(s.id))
            .order_by_asc(stock_item::Column::CreatedAt)
            .find_also_related(item::Entity)
            .paginate(&self.db, size);
        let total_elements = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let rows = paginator.fetch_page(page).await.map_err(|e| ServiceError::Db(e.to_string()))?;

        let store_view = store_dto(s);
        let mut items = Vec::with_capacity(rows.len());
        for (row, maybe_item) in rows {
            let Some(i) = maybe_item else {
                return Err(ServiceError::Db(format!("stock row {} has no item", row.id)));
            };
            items.push(StockItemDto { fields: fields_of(&row), item: item_dto(i), store: store_view.clone() });
        }
        Ok(StockDto { items, page, size, total_elements })
    }

    async fn insert_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<StockItemDto, ServiceError> {
        let s = self.store_model(store).await?.ok_or_else(|| ServiceError::not_found("Store"))?;
        let i = self.item_model(item).await?.ok_or_else(|| ServiceError::not_found("Item"))?;
        let now = Utc::now();
        let am = stock_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            store_id: Set(s.id),
            item_id: Set(i.id),
            quantity: Set(fields.quantity),
            price: Set(fields.price),
            cost: Set(fields.cost),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let row = am
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, || "Item is already stocked in this store".to_string()))?;
        Ok(StockItemDto { fields: fields_of(&row), item: item_dto(i), store: store_dto(s) })
    }

    async fn update_stock_item(&self, store: &StoreRef, item: &ItemRef, fields: StockFields) -> Result<Option<StockItemDto>, ServiceError> {
        let Some((s, i, row)) = self.stock_row(store, item).await? else { return Ok(None) };
        let mut am: stock_item::ActiveModel = row.into();
        am.quantity = Set(fields.quantity);
        am.price = Set(fields.price);
        am.cost = Set(fields.cost);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(StockItemDto { fields: fields_of(&updated), item: item_dto(i), store: store_dto(s) }))
    }

    async fn delete_stock_item(&self, store: &StoreRef, item: &ItemRef) -> Result<Option<StockItemDto>, ServiceError> {
        let Some((s, i, row)) = self.stock_row(store, item).await? else { return Ok(None) };
        let deleted = StockItemDto { fields: fields_of(&row), item: item_dto(i), store: store_dto(s) };
        stock_item::Entity::delete_by_id(row.id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(deleted))
    }
}
