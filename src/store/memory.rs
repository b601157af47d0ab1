use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::model::{Airplane, Id, NewAirplane, NewProduct, Product};
use crate::store::traits::{AirplaneStore, ProductStore, Store, StoreError, StoreResult};

/// In-memory store backed by ordered vectors. Insertion order is preserved
/// for listing, and deletion keeps the relative order of the remaining
/// records. Each instance owns its collections; wiring constructs one and
/// shares it behind an `Arc`, so tests can build independent stores.
///
/// All mutation goes through the write lock, which keeps concurrent axum
/// workers from losing updates.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    airplanes: RwLock<Vec<Airplane>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonically increasing counter rendered as a decimal string.
    /// Shared across both collections, so ids stay unique store-wide.
    fn next_id(&self) -> Id {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        id.to_string()
    }
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn create_product(&self, new: NewProduct) -> StoreResult<Id> {
        let id = self.next_id();
        let mut products = self.products.write().await;
        products.push(new.into_product(id.clone()));
        Ok(id)
    }

    async fn get_product(&self, id: &Id) -> StoreResult<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound("product"))
    }

    async fn update_product(&self, id: &Id, new: NewProduct) -> StoreResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|product| product.id == *id)
            .ok_or(StoreError::NotFound("product"))?;
        product.apply(new);
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &Id) -> StoreResult<()> {
        let mut products = self.products.write().await;
        let position = products
            .iter()
            .position(|product| product.id == *id)
            .ok_or(StoreError::NotFound("product"))?;
        products.remove(position);
        Ok(())
    }

    async fn list_products(&self, name_hint: Option<&str>) -> StoreResult<Vec<Product>> {
        let products = self.products.read().await;
        let needle = name_hint.map(str::to_lowercase);
        Ok(products
            .iter()
            .filter(|product| match &needle {
                Some(needle) => product.name.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl AirplaneStore for MemoryStore {
    async fn create_airplane(&self, new: NewAirplane) -> StoreResult<Id> {
        let id = self.next_id();
        let mut airplanes = self.airplanes.write().await;
        airplanes.push(new.into_airplane(id.clone()));
        Ok(id)
    }

    async fn get_airplane(&self, id: &Id) -> StoreResult<Airplane> {
        let airplanes = self.airplanes.read().await;
        airplanes
            .iter()
            .find(|airplane| airplane.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound("airplane"))
    }

    async fn update_airplane(&self, id: &Id, new: NewAirplane) -> StoreResult<Airplane> {
        let mut airplanes = self.airplanes.write().await;
        let airplane = airplanes
            .iter_mut()
            .find(|airplane| airplane.id == *id)
            .ok_or(StoreError::NotFound("airplane"))?;
        airplane.apply(new);
        Ok(airplane.clone())
    }

    async fn delete_airplane(&self, id: &Id) -> StoreResult<()> {
        let mut airplanes = self.airplanes.write().await;
        let position = airplanes
            .iter()
            .position(|airplane| airplane.id == *id)
            .ok_or(StoreError::NotFound("airplane"))?;
        airplanes.remove(position);
        Ok(())
    }

    async fn list_airplanes(&self, name_hint: Option<&str>) -> StoreResult<Vec<Airplane>> {
        let airplanes = self.airplanes.read().await;
        let needle = name_hint.map(str::to_lowercase);
        Ok(airplanes
            .iter()
            .filter(|airplane| match &needle {
                Some(needle) => airplane.name.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect())
    }
}

impl Store for MemoryStore {}
