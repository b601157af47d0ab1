pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{AirplaneCriteria, AirplaneService, ProductCriteria, ProductService};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store, StoreError};

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use crate::config::StorageBackend;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = config.database_url()?;
            let postgres_store = crate::store::PostgresStore::new(&database_url).await?;
            postgres_store.migrate().await?;

            let store = Arc::new(postgres_store);
            let app = crate::api::routes::create_router().with_state(store);
            serve(listener, app).await?;
        }
        StorageBackend::Memory => {
            let store = Arc::new(crate::store::MemoryStore::new());
            let app = crate::api::routes::create_router().with_state(store);
            serve(listener, app).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::model::{Airplane, NewProduct};

    #[test]
    fn new_product_requires_a_category() {
        let json = r#"{"name": "Smartphone", "description": "", "price": 599.99}"#;
        assert!(serde_json::from_str::<NewProduct>(json).is_err());

        let json = r#"{
            "name": "Smartphone",
            "description": "",
            "price": 599.99,
            "category": {"id": "cat_1", "name": "Electrónicos", "description": ""}
        }"#;
        let product: NewProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.category.name, "Electrónicos");
    }

    #[test]
    fn airplane_serializes_with_snake_case_field_names() {
        let airplane = Airplane {
            id: "1".to_string(),
            name: "Boeing 737".to_string(),
            model: "737-800".to_string(),
            passenger_capacity: 189,
        };
        let json = serde_json::to_value(&airplane).unwrap();
        assert_eq!(json["passenger_capacity"], 189);
        assert_eq!(json["model"], "737-800");
    }
}
