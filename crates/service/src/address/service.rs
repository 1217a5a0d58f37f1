use std::sync::Arc;

use common::metrics::{
    ADDRESSES_CREATED_TOTAL, ADDRESSES_DELETED_TOTAL, PROXIMITY_SEARCHES_TOTAL, PROXIMITY_SEARCH_DURATION,
};
use models::address::{AddressInput, Model};
use models::geo::{validate_coordinates, Coordinate};
use tracing::{debug, info, instrument, warn};

use super::repository::AddressRepository;
use crate::errors::ServiceError;

/// Application service for address entries.
///
/// Owns the coordinate rules: create, update and proximity search all validate
/// their input before touching storage.
pub struct AddressService<R: AddressRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AddressRepository + ?Sized> Clone for AddressService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: AddressRepository + ?Sized> AddressService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: AddressInput) -> Result<Model, ServiceError> {
        validate_coordinates(input.latitude, input.longitude)?;
        let created = self.repo.create(&input).await?;
        ADDRESSES_CREATED_TOTAL.inc();
        info!(id = created.id, "address created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| {
            warn!(id, "address not found");
            ServiceError::not_found(id)
        })
    }

    /// Overwrites name, city, latitude and longitude. `input.state` is ignored.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: AddressInput) -> Result<Model, ServiceError> {
        validate_coordinates(input.latitude, input.longitude)?;
        let updated = self.repo.update(id, &input).await?.ok_or_else(|| {
            warn!(id, "address not found");
            ServiceError::not_found(id)
        })?;
        info!(id, "address updated");
        Ok(updated)
    }

    /// Returns a confirmation message naming the deleted id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<String, ServiceError> {
        if !self.repo.delete(id).await? {
            warn!(id, "address not found");
            return Err(ServiceError::no_record(id));
        }
        ADDRESSES_DELETED_TOTAL.inc();
        let msg = format!("Deleted record with id {}", id);
        info!(id, "{}", msg);
        Ok(msg)
    }

    /// Every entry strictly closer than `radius_km` to the reference point, in
    /// storage order. A full scan; the radius itself is not range-checked.
    #[instrument(skip(self))]
    pub async fn find_within_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Model>, ServiceError> {
        let origin = Coordinate::new(latitude, longitude)?;
        let _timer = PROXIMITY_SEARCH_DURATION.start_timer();
        PROXIMITY_SEARCHES_TOTAL.inc();

        let all = self.repo.list().await?;
        let scanned = all.len();
        let matches: Vec<Model> = all
            .into_iter()
            .filter(|entry| {
                let distance_km = origin.distance_km(&entry.coordinate());
                let within = distance_km < radius_km;
                if within {
                    debug!(id = entry.id, name = %entry.name, distance_km, "within radius");
                }
                within
            })
            .collect();
        info!(scanned, count = matches.len(), "proximity search done");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{InMemoryAddressRepository, SeaOrmAddressRepository};
    use crate::test_support::get_db;
    use models::geo::haversine_km;

    fn service() -> AddressService<InMemoryAddressRepository> {
        AddressService::new(Arc::new(InMemoryAddressRepository::new()))
    }

    fn input(name: &str, latitude: f64, longitude: f64) -> AddressInput {
        AddressInput {
            name: name.into(),
            city: "Bangalore".into(),
            state: "Karnataka".into(),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() -> Result<(), anyhow::Error> {
        let svc = service();
        let req = input("EastVantage", 12.95176, 77.60798);
        let created = svc.create(req.clone()).await?;
        let found = svc.get(created.id).await?;
        assert_eq!(found, created);
        assert_eq!(
            AddressInput {
                name: found.name,
                city: found.city,
                state: found.state,
                latitude: found.latitude,
                longitude: found.longitude,
            },
            req
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_coordinates() {
        let svc = service();
        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.1), (0.0, -181.0), (f64::NAN, 0.0)] {
            let err = svc.create(input("bad", lat, lon)).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidCoordinate(_)), "{lat},{lon}: {err}");
        }
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = service().get(7).await.unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert_eq!(msg, "ID-7 not found"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("a", 1.0, 1.0)).await?;
        assert_eq!(svc.delete(a.id).await?, format!("Deleted record with id {}", a.id));
        assert!(matches!(svc.get(a.id).await, Err(ServiceError::NotFound(_))));
        match svc.delete(a.id).await {
            Err(ServiceError::NotFound(msg)) => {
                assert_eq!(msg, format!("Found no address record with id {}", a.id))
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_leaves_storage_unchanged() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("a", 1.0, 1.0)).await?;
        let before = svc.list().await?;
        let err = svc.update(a.id + 100, input("x", 2.0, 2.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_all_but_state() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("a", 1.0, 1.0)).await?;
        let mut req = input("renamed", -33.86, 151.21);
        req.city = "Sydney".into();
        req.state = "NSW".into();
        let updated = svc.update(a.id, req).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.city, "Sydney");
        assert_eq!(updated.state, "Karnataka");
        assert_eq!((updated.latitude, updated.longitude), (-33.86, 151.21));
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_coordinates() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("a", 1.0, 1.0)).await?;
        let err = svc.update(a.id, input("a", 1.0, 500.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCoordinate(_)));
        assert_eq!(svc.get(a.id).await?.longitude, 1.0);
        Ok(())
    }

    #[tokio::test]
    async fn proximity_search_scenario() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("A", 12.95, 77.60)).await?;
        let b = svc.create(input("B", 12.96, 77.61)).await?;
        svc.create(input("C", 40.0, -70.0)).await?;

        let found = svc.find_within_radius(12.95, 77.60, 5.0).await?;
        assert_eq!(found, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn proximity_search_excludes_boundary() -> Result<(), anyhow::Error> {
        let svc = service();
        let origin = Coordinate { latitude: 10.0, longitude: 20.0 };
        let target = svc.create(input("edge", 10.5, 20.5)).await?;
        let exact = haversine_km(origin, target.coordinate());

        assert!(svc.find_within_radius(10.0, 20.0, exact).await?.is_empty());
        let slightly_more = svc.find_within_radius(10.0, 20.0, exact + 1e-9).await?;
        assert_eq!(slightly_more, vec![target]);
        Ok(())
    }

    #[tokio::test]
    async fn proximity_search_validates_reference_point() {
        let svc = service();
        for (lat, lon) in [(95.0, 0.0), (0.0, -190.0)] {
            let err = svc.find_within_radius(lat, lon, 10.0).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidCoordinate(_)));
        }
    }

    #[tokio::test]
    async fn non_positive_radius_matches_nothing() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(input("here", 0.0, 0.0)).await?;
        assert!(svc.find_within_radius(0.0, 0.0, 0.0).await?.is_empty());
        assert!(svc.find_within_radius(0.0, 0.0, -1.0).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn proximity_search_over_database() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let svc = AddressService::new(Arc::new(SeaOrmAddressRepository::new(db)));
        let a = svc.create(input("A", 12.95, 77.60)).await?;
        let b = svc.create(input("B", 12.96, 77.61)).await?;
        svc.create(input("C", 40.0, -70.0)).await?;

        let ids: Vec<i32> = svc
            .find_within_radius(12.95, 77.60, 5.0)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
        Ok(())
    }
}
