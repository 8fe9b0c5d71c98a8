//! End-to-end tests for the Jurassic catalog API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API against a scratch database
//! JURASSIC_DATABASE_URL=postgres://localhost/jurassic_test cargo run -p jurassic-api
//!
//! # Run the ignored tests one at a time (they reset shared tables)
//! JURASSIC_DATABASE_URL=postgres://localhost/jurassic_test \
//!     cargo test -p jurassic-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Server under test (default `http://localhost:3005`)
//! - `JURASSIC_DATABASE_URL` or `DATABASE_URL` - Same database the server uses

use reqwest::Client;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use jurassic_api::services::auth::hash_password;
use jurassic_core::{CategoryId, Username};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Base URL of the server under test.
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3005".to_string())
}

/// HTTP client plus a direct handle on the server's database.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: PgPool,
}

impl TestContext {
    /// Connect to the database, create missing tables, and empty them.
    ///
    /// # Panics
    ///
    /// Panics if no database URL is set or the database is unreachable.
    pub async fn new() -> Self {
        let url = std::env::var("JURASSIC_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("JURASSIC_DATABASE_URL or DATABASE_URL must be set");

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("Failed to apply schema");

        let ctx = Self {
            client: Client::new(),
            base_url: api_base_url(),
            pool,
        };
        ctx.reset().await;
        ctx
    }

    /// Absolute URL for an API path such as `/api/produtos`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Remove every row and restart generated ids at 1.
    ///
    /// # Panics
    ///
    /// Panics if the truncate fails.
    pub async fn reset(&self) {
        sqlx::query("TRUNCATE products, categorias, users RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .expect("Failed to reset tables");
    }

    /// Insert a category row directly.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn insert_category(&self, name: &str) -> CategoryId {
        sqlx::query_scalar::<_, CategoryId>(
            "INSERT INTO categorias (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert category")
    }

    /// Store a user with an argon2 hash of `password`.
    ///
    /// # Panics
    ///
    /// Panics if the username is invalid or the insert fails.
    pub async fn insert_user(&self, username: &str, password: &str) {
        let username = Username::parse(username).expect("Invalid test username");
        let hash = hash_password(password).expect("Failed to hash test password");

        sqlx::query("INSERT INTO users (username, password_hash) VALUES ($1, $2)")
            .bind(&username)
            .bind(hash)
            .execute(&self.pool)
            .await
            .expect("Failed to insert user");
    }

    /// Number of stored products.
    ///
    /// # Panics
    ///
    /// Panics if the count query fails.
    pub async fn product_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count products")
    }
}
