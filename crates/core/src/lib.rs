//! `catalog-core` — catalog value objects.
//!
//! This crate contains **pure domain** primitives (no indexing, no IO).

pub mod attribute;
pub mod error;
pub mod id;
pub mod item;
pub mod value_object;

pub use attribute::{Color, Size};
pub use error::{CatalogError, CatalogResult};
pub use id::ItemId;
pub use item::Item;
pub use value_object::ValueObject;
