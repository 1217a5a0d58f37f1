use async_trait::async_trait;
use models::address::{self, AddressInput, Model};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Storage seam for address entries. Implementations persist exactly what they
/// are given; coordinate rules are enforced by the service above.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn create(&self, input: &AddressInput) -> Result<Model, ServiceError>;
    /// `Ok(None)` when no row has this id.
    async fn update(&self, id: i32, input: &AddressInput) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(address::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(address::find(&self.db, id).await?)
    }

    async fn create(&self, input: &AddressInput) -> Result<Model, ServiceError> {
        Ok(address::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: &AddressInput) -> Result<Option<Model>, ServiceError> {
        Ok(address::update(&self.db, id, input).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(address::delete(&self.db, id).await?)
    }
}
