use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Product management
        .route("/products", post(handlers::create_product::<S>))
        .route("/products", get(handlers::search_products::<S>))
        .route("/products/:id", get(handlers::get_product::<S>))
        .route("/products/:id", put(handlers::update_product::<S>))
        .route("/products/:id", delete(handlers::delete_product::<S>))
        // Airplane management
        .route("/airplanes", post(handlers::create_airplane::<S>))
        .route("/airplanes", get(handlers::search_airplanes::<S>))
        .route("/airplanes/:id", get(handlers::get_airplane::<S>))
        .route("/airplanes/:id", put(handlers::update_airplane::<S>))
        .route("/airplanes/:id", delete(handlers::delete_airplane::<S>))
}
