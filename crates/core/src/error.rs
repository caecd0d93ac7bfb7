//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Searching never fails; these only arise when turning external text (names,
/// environment values) into catalog types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A color name did not match any member of `Color::ALL`.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A size name did not match any member of `Size::ALL`.
    #[error("unknown size: {0}")]
    UnknownSize(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A configuration value was malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor(name.into())
    }

    pub fn unknown_size(name: impl Into<String>) -> Self {
        Self::UnknownSize(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
