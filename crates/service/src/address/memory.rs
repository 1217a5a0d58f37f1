use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI32, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use models::address::{AddressInput, Model};
use tokio::sync::RwLock;

use super::repository::AddressRepository;
use crate::errors::ServiceError;

/// Process-local repository backed by an ordered map.
///
/// Ids start at 1 and are never reused, matching an auto-increment column.
/// Iteration follows id order, so `list` returns entries in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryAddressRepository {
    inner: Arc<RwLock<BTreeMap<i32, Model>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn create(&self, input: &AddressInput) -> Result<Model, ServiceError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let model = Model {
            id,
            name: input.name.clone(),
            city: input.city.clone(),
            state: input.state.clone(),
            latitude: input.latitude,
            longitude: input.longitude,
        };
        self.inner.write().await.insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: i32, input: &AddressInput) -> Result<Option<Model>, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(found) = map.get_mut(&id) else { return Ok(None) };
        found.name = input.name.clone();
        found.city = input.city.clone();
        found.latitude = input.latitude;
        found.longitude = input.longitude;
        Ok(Some(found.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        Ok(map.remove(&id).is_some())
    }
}
