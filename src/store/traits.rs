use crate::model::{Airplane, Id, NewAirplane, NewProduct, Product};
use thiserror::Error;

/// Store-level failure taxonomy. Handlers map these 1:1 to HTTP status
/// codes; nothing in the store retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid id '{0}'")]
    InvalidId(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Assign an id, persist the record, and return the assigned id.
    async fn create_product(&self, new: NewProduct) -> StoreResult<Id>;
    async fn get_product(&self, id: &Id) -> StoreResult<Product>;
    /// Replace all mutable fields of the product with the given id. The id
    /// itself never changes. Fails with `NotFound` when absent, leaving the
    /// collection untouched.
    async fn update_product(&self, id: &Id, new: NewProduct) -> StoreResult<Product>;
    async fn delete_product(&self, id: &Id) -> StoreResult<()>;
    /// List products, optionally pre-narrowed by a case-insensitive name
    /// substring at the storage layer. Callers must not rely on the hint
    /// for correctness; the full predicate is applied in-process.
    async fn list_products(&self, name_hint: Option<&str>) -> StoreResult<Vec<Product>>;
}

#[async_trait::async_trait]
pub trait AirplaneStore: Send + Sync {
    async fn create_airplane(&self, new: NewAirplane) -> StoreResult<Id>;
    async fn get_airplane(&self, id: &Id) -> StoreResult<Airplane>;
    async fn update_airplane(&self, id: &Id, new: NewAirplane) -> StoreResult<Airplane>;
    async fn delete_airplane(&self, id: &Id) -> StoreResult<()>;
    async fn list_airplanes(&self, name_hint: Option<&str>) -> StoreResult<Vec<Airplane>>;
}

pub trait Store: ProductStore + AirplaneStore + Send + Sync {}
