use std::sync::Arc;

use crate::logic::filter::AirplaneCriteria;
use crate::model::{Airplane, Id, NewAirplane};
use crate::store::traits::{AirplaneStore, StoreResult};

/// Airplane business operations on top of an injected store.
pub struct AirplaneService<S> {
    store: Arc<S>,
}

impl<S: AirplaneStore> AirplaneService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: NewAirplane) -> StoreResult<Airplane> {
        let id = self.store.create_airplane(new.clone()).await?;
        Ok(new.into_airplane(id))
    }

    pub async fn get(&self, id: &Id) -> StoreResult<Airplane> {
        self.store.get_airplane(id).await
    }

    pub async fn update(&self, id: &Id, new: NewAirplane) -> StoreResult<Airplane> {
        self.store.update_airplane(id, new).await
    }

    pub async fn delete(&self, id: &Id) -> StoreResult<()> {
        self.store.delete_airplane(id).await
    }

    /// Same contract as the product search: the storage-layer name hint is
    /// an optimization, the full predicate always runs in-process.
    pub async fn search(&self, criteria: AirplaneCriteria) -> StoreResult<Vec<Airplane>> {
        let candidates = self.store.list_airplanes(criteria.name_hint()).await?;
        Ok(candidates
            .into_iter()
            .filter(|airplane| criteria.matches(airplane))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::traits::StoreError;

    fn service() -> AirplaneService<MemoryStore> {
        AirplaneService::new(Arc::new(MemoryStore::new()))
    }

    fn new_airplane(name: &str, model: &str, capacity: u32) -> NewAirplane {
        NewAirplane {
            name: name.to_string(),
            model: model.to_string(),
            passenger_capacity: capacity,
        }
    }

    #[tokio::test]
    async fn boeing_search_scenario() {
        let service = service();
        service
            .create(new_airplane("Boeing 737", "737-800", 189))
            .await
            .unwrap();
        service
            .create(new_airplane("Airbus A320", "A320neo", 180))
            .await
            .unwrap();

        let results = service
            .search(AirplaneCriteria {
                name: Some("boeing".to_string()),
                model: None,
                min_passengers: Some(150),
            })
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Boeing 737");
        assert_eq!(results[0].model, "737-800");
        assert_eq!(results[0].passenger_capacity, 189);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = service();
        let created = service
            .create(new_airplane("Cessna 172", "Skyhawk", 4))
            .await
            .unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_replaces_every_mutable_field() {
        let service = service();
        let created = service
            .create(new_airplane("Boeing 737", "737-700", 140))
            .await
            .unwrap();

        let updated = service
            .update(&created.id, new_airplane("Boeing 737", "737-800", 189))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.model, "737-800");
        assert_eq!(updated.passenger_capacity, 189);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let created = service
            .create(new_airplane("Airbus A320", "A320neo", 180))
            .await
            .unwrap();

        service.delete(&created.id).await.unwrap();
        let err = service.get(&created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn min_passengers_alone_filters_small_aircraft() {
        let service = service();
        service
            .create(new_airplane("Boeing 737", "737-800", 189))
            .await
            .unwrap();
        service
            .create(new_airplane("Cessna 172", "Skyhawk", 4))
            .await
            .unwrap();

        let results = service
            .search(AirplaneCriteria {
                name: None,
                model: None,
                min_passengers: Some(100),
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Boeing 737");
    }
}
