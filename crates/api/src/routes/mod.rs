//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health               - Liveness check
//! GET   /health/ready         - Readiness check (store reachable)
//!
//! # Auth
//! POST  /api/login            - Verify username/password
//!
//! # Products
//! GET   /api/produtos         - List products
//! GET   /api/produtos/{id}    - Product detail
//! PATCH /api/produtos/{id}    - Update availability
//! POST  /api/produtos-add     - Create product
//!
//! # Categories
//! GET   /api/categorias       - List categories
//! POST  /api/categorias-add   - Create category
//! ```

pub mod auth;
pub mod categories;
pub mod health;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Response body for insert endpoints.
#[derive(Debug, Serialize)]
pub struct Created<I> {
    /// Generated ID of the new row.
    pub id: I,
    pub message: &'static str,
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/produtos", get(products::index))
        .route("/produtos/{id}", get(products::show).patch(products::update_availability))
        .route("/produtos-add", post(products::create))
        .route("/categorias", get(categories::index))
        .route("/categorias-add", post(categories::create))
}

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}

/// Treat absent and empty strings alike when checking required fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" ".to_string())), Some(" ".to_string()));
        assert_eq!(non_empty(Some("Fossils".to_string())), Some("Fossils".to_string()));
    }
}
