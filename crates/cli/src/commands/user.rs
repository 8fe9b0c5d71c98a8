//! User credential commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a user, or reset the password of an existing one
//! jurassic-cli user create -u TESTE -p 'TESTE123'
//!
//! # Print an argon2 hash without touching the database
//! jurassic-cli user hash -p 'TESTE123'
//! ```
//!
//! # Environment Variables
//!
//! Same store settings as the API server (`JURASSIC_DATABASE_URL`,
//! `DATABASE_URL`, or the discrete `JURASSIC_DB_*` variables).

use thiserror::Error;

use jurassic_api::config::{ApiConfig, ConfigError};
use jurassic_api::db::{self, RepositoryError, UserRepository};
use jurassic_api::services::AuthError;
use jurassic_api::services::auth::hash_password;
use jurassic_core::{Username, UsernameError};

/// Minimum password length accepted when provisioning.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Store configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection or statement error.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Pool could not be built from the configuration.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Invalid username.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Password rejected before hashing.
    #[error("Password must be at least 8 characters")]
    WeakPassword,

    /// Hashing failed.
    #[error("Hashing error: {0}")]
    Hash(#[from] AuthError),
}

/// Create a user, or replace the password hash of an existing one.
///
/// # Errors
///
/// Returns an error if the username or password is invalid, the store is not
/// configured, or the upsert fails.
pub async fn create(username: &str, password: &str) -> Result<(), UserError> {
    let username = Username::parse(username)?;
    let password_hash = hash_checked(password)?;

    let config = ApiConfig::from_env()?;
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database)?;

    UserRepository::new(&pool)
        .upsert(&username, &password_hash)
        .await?;

    tracing::info!("User provisioned: {}", username);
    Ok(())
}

/// Hash a password and return the PHC string.
///
/// # Errors
///
/// Returns an error if the password is too short or hashing fails.
pub fn hash(password: &str) -> Result<String, UserError> {
    hash_checked(password)
}

fn hash_checked(password: &str) -> Result<String, UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::WeakPassword);
    }
    Ok(hash_password(password)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jurassic_api::services::auth::verify_password;

    use super::*;

    #[test]
    fn test_hash_rejects_short_password() {
        assert!(matches!(hash("short"), Err(UserError::WeakPassword)));
    }

    #[test]
    fn test_hash_is_verifiable() {
        let phc = hash("TESTE123").unwrap();
        assert!(verify_password("TESTE123", &phc).is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_username_before_connecting() {
        let err = create("two words", "TESTE123").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidUsername(_)));
    }
}
