use std::sync::Arc;

use crate::logic::filter::ProductCriteria;
use crate::model::{Id, NewProduct, Product};
use crate::store::traits::{ProductStore, StoreResult};

/// Product business operations on top of an injected store. The store is
/// chosen at wiring time, so tests can substitute the in-memory variant.
pub struct ProductService<S> {
    store: Arc<S>,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persist the request and return the canonical record with the
    /// store-assigned id.
    pub async fn create(&self, new: NewProduct) -> StoreResult<Product> {
        let id = self.store.create_product(new.clone()).await?;
        Ok(new.into_product(id))
    }

    pub async fn get(&self, id: &Id) -> StoreResult<Product> {
        self.store.get_product(id).await
    }

    pub async fn update(&self, id: &Id, new: NewProduct) -> StoreResult<Product> {
        self.store.update_product(id, new).await
    }

    pub async fn delete(&self, id: &Id) -> StoreResult<()> {
        self.store.delete_product(id).await
    }

    /// List candidates (pre-narrowed by the storage layer where it can),
    /// then apply the full predicate in-process. Correctness never depends
    /// on what the storage layer pre-filtered. An empty result is a valid
    /// outcome, not an error.
    pub async fn search(&self, criteria: ProductCriteria) -> StoreResult<Vec<Product>> {
        let candidates = self.store.list_products(criteria.name_hint()).await?;
        Ok(candidates
            .into_iter()
            .filter(|product| criteria.matches(product))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::MemoryStore;
    use crate::store::traits::StoreError;

    fn service() -> ProductService<MemoryStore> {
        ProductService::new(Arc::new(MemoryStore::new()))
    }

    fn new_product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            category: Category {
                id: "cat_1".to_string(),
                name: "Electrónicos".to_string(),
                description: "Gadgets".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_request_fields_plus_id() {
        let service = service();
        let created = service.create(new_product("Smartphone", 599.99)).await.unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price, 599.99);
        assert_eq!(fetched.category.name, "Electrónicos");
    }

    #[tokio::test]
    async fn empty_criteria_return_every_record_in_store_order() {
        let service = service();
        service.create(new_product("Smartphone", 599.99)).await.unwrap();
        service.create(new_product("Laptop", 1299.99)).await.unwrap();
        service.create(new_product("Cafetera", 49.90)).await.unwrap();

        let all = service.search(ProductCriteria::default()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|product| product.name.as_str()).collect();
        assert_eq!(names, vec!["Smartphone", "Laptop", "Cafetera"]);
    }

    #[tokio::test]
    async fn non_matching_search_is_an_empty_vector_not_an_error() {
        let service = service();
        service.create(new_product("Smartphone", 599.99)).await.unwrap();

        let results = service
            .search(ProductCriteria {
                name: Some("televisor".to_string()),
                min_price: None,
            })
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_combines_name_and_price_bound() {
        let service = service();
        service.create(new_product("Smartphone", 599.99)).await.unwrap();
        service.create(new_product("Smartwatch", 199.99)).await.unwrap();

        let results = service
            .search(ProductCriteria {
                name: Some("smart".to_string()),
                min_price: Some(500.0),
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Smartphone");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let created = service.create(new_product("Smartphone", 599.99)).await.unwrap();

        service.delete(&created.id).await.unwrap();

        let err = service.get(&created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let service = service();
        let err = service
            .update(&"999".to_string(), new_product("Ghost", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
