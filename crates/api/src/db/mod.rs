//! Database operations for the catalog `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `products` - Catalog products (`category_id` references `categorias`)
//! - `categorias` - Product categories, looked up by name on product insert
//! - `users` - Login credentials (`username`, argon2 `password_hash`)
//!
//! The schema is provisioned by the operator; this crate never creates or
//! alters tables. Every repository method issues exactly one statement.

pub mod categories;
pub mod products;
pub mod users;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use crate::config::DatabaseConfig;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a lazily-connected `PostgreSQL` connection pool.
///
/// No connection is opened until the first query acquires one; the pool
/// serializes connection setup and replaces broken connections.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection settings are invalid.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(options))
}
