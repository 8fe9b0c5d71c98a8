//! Category domain type.

use serde::Serialize;

use jurassic_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Human-facing name, also the lookup key on product insert.
    pub name: String,
}
