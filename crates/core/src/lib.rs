//! Jurassic Core - Shared types library.
//!
//! This crate provides common types used across the Jurassic catalog components:
//! - `api` - HTTP/JSON backend for products, categories, and login
//! - `cli` - Operator tooling for provisioning user credentials
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and usernames

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
