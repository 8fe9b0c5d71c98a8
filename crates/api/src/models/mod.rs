//! Domain models for the catalog.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::{NewProduct, Product};
