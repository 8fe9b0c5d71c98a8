//! Business logic services.
//!
//! - `auth` - Password login against stored argon2 hashes

pub mod auth;

pub use auth::{AuthError, AuthService};
