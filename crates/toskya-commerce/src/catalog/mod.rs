//! Product catalog module.
//!
//! Contains the menu products, portion sizes, and the read-only catalog.

mod product;
mod size;

pub use product::{Catalog, Product};
pub use size::Size;
