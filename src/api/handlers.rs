use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{AirplaneCriteria, AirplaneService, ProductCriteria, ProductService};
use crate::model::{Airplane, Id, NewAirplane, NewProduct, Product};
use crate::store::traits::{Store, StoreError};

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Query parameters for product search. Numeric bounds arrive as raw
/// strings so unparsable input clamps to "unconstrained" instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub min_price: Option<String>,
}

/// Query parameters for airplane search.
#[derive(Debug, Deserialize)]
pub struct AirplaneQuery {
    pub name: Option<String>,
    pub model: Option<String>,
    pub min_passengers: Option<String>,
}

impl ProductQuery {
    fn into_criteria(self) -> ProductCriteria {
        ProductCriteria {
            name: self.name,
            min_price: self.min_price.as_deref().and_then(|raw| raw.parse().ok()),
        }
    }
}

impl AirplaneQuery {
    fn into_criteria(self) -> AirplaneCriteria {
        AirplaneCriteria {
            name: self.name,
            model: self.model,
            min_passengers: self
                .min_passengers
                .as_deref()
                .and_then(|raw| raw.parse().ok()),
        }
    }
}

/// Map store failures onto the documented status codes: missing records
/// and malformed ids are both 404, infrastructure failures are 500.
fn error_response(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        StoreError::NotFound(resource) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(&format!("{} not found", resource))),
        ),
        StoreError::InvalidId(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(&format!("invalid id '{}'", id))),
        ),
        StoreError::Storage(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&err.to_string())),
        ),
    }
}

fn validation_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(&message)))
}

// Product handlers

pub async fn create_product<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(payload): RequestJson<NewProduct>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = payload.validate() {
        return Err(validation_error(message));
    }

    match ProductService::new(store).create(payload).await {
        Ok(product) => Ok((StatusCode::CREATED, Json(product))),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn search_products<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ListResponse<Product>>, (StatusCode, Json<ErrorResponse>)> {
    match ProductService::new(store).search(query.into_criteria()).await {
        Ok(items) => Ok(Json(ListResponse {
            total: items.len(),
            items,
        })),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn get_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    match ProductService::new(store).get(&id).await {
        Ok(product) => Ok(Json(product)),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn update_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(payload): RequestJson<NewProduct>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = payload.validate() {
        return Err(validation_error(message));
    }

    match ProductService::new(store).update(&id, payload).await {
        Ok(product) => Ok(Json(product)),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn delete_product<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    match ProductService::new(store).delete(&id).await {
        Ok(()) => Ok(Json(DeleteResponse {
            message: format!("product '{}' deleted", id),
        })),
        Err(err) => Err(error_response(err)),
    }
}

// Airplane handlers

pub async fn create_airplane<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(payload): RequestJson<NewAirplane>,
) -> Result<(StatusCode, Json<Airplane>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = payload.validate() {
        return Err(validation_error(message));
    }

    match AirplaneService::new(store).create(payload).await {
        Ok(airplane) => Ok((StatusCode::CREATED, Json(airplane))),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn search_airplanes<S: Store>(
    State(store): State<AppState<S>>,
    Query(query): Query<AirplaneQuery>,
) -> Result<Json<ListResponse<Airplane>>, (StatusCode, Json<ErrorResponse>)> {
    match AirplaneService::new(store).search(query.into_criteria()).await {
        Ok(items) => Ok(Json(ListResponse {
            total: items.len(),
            items,
        })),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn get_airplane<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<Airplane>, (StatusCode, Json<ErrorResponse>)> {
    match AirplaneService::new(store).get(&id).await {
        Ok(airplane) => Ok(Json(airplane)),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn update_airplane<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    RequestJson(payload): RequestJson<NewAirplane>,
) -> Result<Json<Airplane>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = payload.validate() {
        return Err(validation_error(message));
    }

    match AirplaneService::new(store).update(&id, payload).await {
        Ok(airplane) => Ok(Json(airplane)),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn delete_airplane<S: Store>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    match AirplaneService::new(store).delete(&id).await {
        Ok(()) => Ok(Json(DeleteResponse {
            message: format!("airplane '{}' deleted", id),
        })),
        Err(err) => Err(error_response(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_numeric_bound_clamps_to_unconstrained() {
        let query = AirplaneQuery {
            name: Some("boeing".to_string()),
            model: None,
            min_passengers: Some("abc".to_string()),
        };
        let criteria = query.into_criteria();
        assert_eq!(criteria.name.as_deref(), Some("boeing"));
        assert_eq!(criteria.min_passengers, None);
    }

    #[test]
    fn numeric_bound_parses_when_well_formed() {
        let query = ProductQuery {
            name: None,
            min_price: Some("599.99".to_string()),
        };
        let criteria = query.into_criteria();
        assert_eq!(criteria.min_price, Some(599.99));
    }
}
