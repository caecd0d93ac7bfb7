//! Catalog index: groups a fixed item list by (color, size) and answers
//! color/size filter queries with per-attribute counts.
//!
//! Pure in-memory logic (no IO, no storage). The index is immutable once built.

pub mod catalog;
pub mod options;
pub mod results;

pub use catalog::{BucketKey, CatalogIndex};
pub use options::SearchOptions;
pub use results::{ColorCount, SearchResults, SizeCount};
