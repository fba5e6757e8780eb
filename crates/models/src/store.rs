use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, stock_item};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub public_id: String,
    pub owner_id: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { StockItem }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::StockItem => Entity::has_many(stock_item::Entity).into(),
        }
    }
}

impl Related<stock_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::StockItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    let n = name.trim();
    if n.is_empty() { return Err(errors::ModelError::Validation("store name required".into())); }
    if n.len() > 128 { return Err(errors::ModelError::Validation("store name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_address(address: Option<&str>) -> Result<(), errors::ModelError> {
    match address {
        Some(a) if a.len() > 256 => Err(errors::ModelError::Validation("store address too long (<=256)".into())),
        _ => Ok(()),
    }
}
