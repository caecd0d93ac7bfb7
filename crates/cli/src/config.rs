//! Environment-driven configuration for the `catalog-search` binary.

use core::str::FromStr;

use catalog_core::{CatalogError, CatalogResult, Color, Size};
use catalog_index::SearchOptions;
use catalog_observability::LogFormat;

pub const SAMPLE_SIZE_VAR: &str = "CATALOG_SAMPLE_SIZE";
pub const COLORS_VAR: &str = "CATALOG_SEARCH_COLORS";
pub const SIZES_VAR: &str = "CATALOG_SEARCH_SIZES";
pub const SEARCH_ALL_VAR: &str = "CATALOG_SEARCH_ALL";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

pub const DEFAULT_SAMPLE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Number of generated sample items.
    pub sample_size: usize,
    /// `None` searches without options (whole catalog).
    pub options: Option<SearchOptions>,
    /// Color/size filters were given alongside the search-all flag and dropped.
    pub ignored_filters: bool,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            options: Some(SearchOptions::new()),
            ignored_filters: false,
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sample_size = match get(SAMPLE_SIZE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| CatalogError::config(format!("{SAMPLE_SIZE_VAR}: {e}")))?,
            None => DEFAULT_SAMPLE_SIZE,
        };

        let search_all = match get(SEARCH_ALL_VAR) {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| CatalogError::config(format!("{SEARCH_ALL_VAR}: {raw}")))?,
            None => false,
        };

        let colors: Vec<Color> = parse_list(get(COLORS_VAR).as_deref())?;
        let sizes: Vec<Size> = parse_list(get(SIZES_VAR).as_deref())?;
        let ignored_filters = search_all && (!colors.is_empty() || !sizes.is_empty());
        let options = if search_all {
            None
        } else {
            Some(SearchOptions::new().with_colors(colors).with_sizes(sizes))
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| CatalogError::config(format!("{LOG_FORMAT_VAR}: {e}")))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            sample_size,
            options,
            ignored_filters,
            log_format,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Comma-separated names; empty segments are skipped.
fn parse_list<T>(raw: Option<&str>) -> CatalogResult<Vec<T>>
where
    T: FromStr<Err = CatalogError>,
{
    raw.unwrap_or_default()
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<T>())
        .collect()
}
