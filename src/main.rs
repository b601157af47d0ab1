use axum::serve;
use catalog_api::api::routes::create_router;
use catalog_api::config::{AppConfig, StorageBackend};
use catalog_api::seed;
use catalog_api::store::{MemoryStore, PostgresStore, Store};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn)
        .init();

    println!("Catalog API: Products & Airplanes CRUD Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    match config.storage.backend {
        StorageBackend::Postgres => {
            println!("Connecting to PostgreSQL...");
            let database_url = config.database_url()?;
            let postgres_store = PostgresStore::new(&database_url).await?;

            println!("Running database migrations...");
            postgres_store.migrate().await?;

            let store = Arc::new(postgres_store);
            load_seed_data_if_requested(&*store).await?;
            run_server(create_router().with_state(store), &config).await?;
        }
        StorageBackend::Memory => {
            println!("Using in-memory store");
            let store = Arc::new(MemoryStore::new());
            load_seed_data_if_requested(&*store).await?;
            run_server(create_router().with_state(store), &config).await?;
        }
    }

    Ok(())
}

// Load seed data for demonstration (optional)
async fn load_seed_data_if_requested<S: Store + ?Sized>(store: &S) -> anyhow::Result<()> {
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(store).await?;
        println!("Seed data loaded successfully");
    }
    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Catalog API server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
