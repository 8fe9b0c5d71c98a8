//! Product repository for database operations.

use sqlx::PgPool;

use jurassic_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use crate::models::{NewProduct, Product};

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    price: Price,
    description: String,
    image: Option<String>,
    availability: Option<bool>,
    category_id: CategoryId,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            image: row.image,
            availability: row.availability,
            category_id: row.category_id,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, image, availability, category_id
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, price, description, image, availability, category_id
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Insert a product and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including a
    /// foreign key violation when the category was removed concurrently.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id = sqlx::query_scalar::<_, ProductId>(
            r"
            INSERT INTO products (name, price, description, image, availability, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.image.as_deref())
        .bind(product.availability)
        .bind(product.category_id)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Set the availability flag of a product.
    ///
    /// No existence check is performed: updating an unknown ID succeeds and
    /// affects zero rows, as does a `None` ID. A `None` flag stores `NULL`.
    /// The number of affected rows is returned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_availability(
        &self,
        id: Option<ProductId>,
        availability: Option<bool>,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET availability = $1
            WHERE id = $2
            ",
        )
        .bind(availability)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
