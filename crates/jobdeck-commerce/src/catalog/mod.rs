//! Service catalog module.
//!
//! Contains the sellable career services and their package relationships.
//! The catalog is read-only to the cart and checkout code.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{Product, ServiceCategory};
