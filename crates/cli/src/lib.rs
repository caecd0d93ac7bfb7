//! Thin command-line surface over the catalog index.

pub mod config;
pub mod sample;

pub use config::CliConfig;
pub use sample::sample_catalog;
