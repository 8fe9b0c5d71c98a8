//! User credential repository.
//!
//! Credentials are provisioned out-of-band (see `jurassic-cli user create`);
//! the API only reads them.

use sqlx::PgPool;

use jurassic_core::Username;

use super::RepositoryError;

/// Repository for user credential lookups.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the stored password hash for a username.
    ///
    /// Returns `None` when no user has that name; an empty result set is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<String>, RepositoryError> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(hash)
    }

    /// Create a user or replace the password hash of an existing one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn upsert(&self, username: &Username, password_hash: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
            ",
        )
        .bind(username)
        .bind(password_hash)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
