//! Product catalog published language.
//!
//! Catalog lookup itself lives elsewhere; this crate only carries the product
//! snapshot other modules receive (and a builder to assemble one).

pub mod builder;
pub mod product;

pub use builder::ProductDataBuilder;
pub use product::{ProductData, ProductType};
