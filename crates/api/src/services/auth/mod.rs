//! Authentication service.
//!
//! Verifies a username/password pair against the argon2 hash stored in the
//! `users` table. No session or token is issued; callers only learn whether
//! the pair matched.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::LazyLock;

use sqlx::PgPool;

use jurassic_core::Username;

use crate::db::UserRepository;

/// Hash checked on the miss path so unknown users cost the same as a wrong
/// password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("jurassic-dummy-password").ok());

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Check a username and password against the stored credential.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: both yield `AuthError::InvalidCredentials`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not match.
    /// Returns `AuthError::PasswordHash` if the stored hash cannot be verified.
    /// Returns `AuthError::Repository` if the lookup fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        // A name that could never have been provisioned cannot match
        let stored = match Username::parse(username) {
            Ok(username) => self.users.get_password_hash(&username).await?,
            Err(_) => None,
        };

        // Argon2 is CPU-bound; keep it off the async workers
        let password = password.to_owned();
        let Some(password_hash) = stored else {
            tokio::task::spawn_blocking(move || burn_verification(&password))
                .await
                .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
            return Err(AuthError::InvalidCredentials);
        };

        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?
    }
}

/// Run a full verification against the dummy hash and discard the outcome.
fn burn_verification(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Hash a password using Argon2id with a random salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against a PHC-format hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on mismatch and
/// `AuthError::PasswordHash` if the hash is malformed or verification fails.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|e| match e {
            password_hash::Error::Password => AuthError::InvalidCredentials,
            other => AuthError::PasswordHash(other.to_string()),
        })
}
