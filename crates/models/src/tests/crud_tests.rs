use crate::db::connect;
use crate::{item, stock_item, store};
use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set};
use uuid::Uuid;

fn skip_db() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_stock_item_relations_and_cascade() -> Result<()> {
    if skip_db() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    let now = Utc::now();

    let s = store::ActiveModel {
        id: Set(Uuid::new_v4()),
        public_id: Set(format!("store-{}", Uuid::new_v4().simple())),
        owner_id: Set("owner-1".into()),
        name: Set("Downtown".into()),
        address: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let i = item::ActiveModel {
        id: Set(Uuid::new_v4()),
        public_id: Set(format!("sku-{}", Uuid::new_v4().simple())),
        seller_id: Set("seller-1".into()),
        name: Set("Widget".into()),
        description: Set(Some("A widget".into())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let row = stock_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(s.id),
        item_id: Set(i.id),
        quantity: Set(10),
        price: Set(2.5),
        cost: Set(1.0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let (found, found_item) = stock_item::Entity::find_by_id(row.id)
        .find_also_related(item::Entity)
        .one(&db)
        .await?
        .expect("stock row");
    assert_eq!(found.quantity, 10);
    assert_eq!(found_item.map(|m| m.public_id), Some(i.public_id.clone()));

    let in_store = s.find_related(stock_item::Entity).all(&db).await?;
    assert_eq!(in_store.len(), 1);

    // deleting the store removes its stock rows
    store::Entity::delete_by_id(s.id).exec(&db).await?;
    let left = stock_item::Entity::find()
        .filter(stock_item::Column::ItemId.eq(i.id))
        .all(&db)
        .await?;
    assert!(left.is_empty());

    item::Entity::delete_by_id(i.id).exec(&db).await?;
    Ok(())
}
