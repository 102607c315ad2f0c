use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Directory record. Every column is free text; `last_login` carries no
/// timestamp semantics.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
    pub last_login: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Full-table read in storage iteration order; no sort is applied.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Primary-key delete; returns the number of rows removed (0 or 1).
pub async fn delete_by_id(db: &DatabaseConnection, id: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

/// Insert a record as-is. Records are created out-of-band; this exists for
/// seeding and tests, not for any HTTP endpoint.
pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(model.id),
        code: Set(model.code),
        email: Set(model.email),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        status: Set(model.status),
        last_login: Set(model.last_login),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
