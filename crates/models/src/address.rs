use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, geo::Coordinate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate { latitude: self.latitude, longitude: self.longitude }
    }
}

/// Body of create and update requests; `id` is always assigned by storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

fn db_err(e: DbErr) -> errors::ModelError {
    errors::ModelError::Db(e.to_string())
}

pub async fn create(db: &DatabaseConnection, input: &AddressInput) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(input.name.clone()),
        city: Set(input.city.clone()),
        state: Set(input.state.clone()),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        ..Default::default()
    };
    am.insert(db).await.map_err(db_err)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// All rows in id order, which is insertion order for auto-increment keys.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(db_err)
}

/// Overwrite name, city and coordinates. `state` is not part of the mutable set.
pub async fn update(db: &DatabaseConnection, id: i32, input: &AddressInput) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = find(db, id).await? else { return Ok(None) };
    overwrite(db, found, input).await
}

// A row deleted between the read and the write surfaces as `RecordNotUpdated`.
async fn overwrite(db: &DatabaseConnection, found: Model, input: &AddressInput) -> Result<Option<Model>, errors::ModelError> {
    let mut am: ActiveModel = found.into();
    am.name = Set(input.name.clone());
    am.city = Set(input.city.clone());
    am.latitude = Set(input.latitude);
    am.longitude = Set(input.longitude);
    match am.update(db).await {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(db_err(e)),
    }
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
