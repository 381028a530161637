//! Product resources and the product catalog.
//!
//! The catalog is read-only from the ordering engine's point of view: it is
//! loaded once and queried for line-item names, prices and supplier
//! ownership.

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::{Product, ProductAttributes, ProductRelationships};
