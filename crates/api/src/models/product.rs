//! Product domain types.

use serde::Serialize;

use jurassic_core::{CategoryId, Price, ProductId};

/// A catalog product as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, serialized as a decimal string.
    pub price: Price,
    /// Free-form description.
    pub description: String,
    /// Image URL or path.
    pub image: Option<String>,
    /// Whether the product can currently be purchased.
    pub availability: Option<bool>,
    /// Category this product belongs to.
    pub category_id: CategoryId,
}

/// A validated product awaiting insertion.
///
/// The category is already resolved from its name to an ID.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: Option<String>,
    pub availability: Option<bool>,
    pub category_id: CategoryId,
}
