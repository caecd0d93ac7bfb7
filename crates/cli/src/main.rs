use anyhow::Context;

use catalog_cli::config::SEARCH_ALL_VAR;
use catalog_cli::{CliConfig, sample_catalog};
use catalog_index::CatalogIndex;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("failed to read configuration")?;
    catalog_observability::init_with(config.log_format);
    if config.ignored_filters {
        tracing::warn!("{SEARCH_ALL_VAR} set; ignoring color/size filters");
    }

    tracing::info!(
        sample_size = config.sample_size,
        filtered = config.options.is_some(),
        "building sample catalog"
    );
    let index = CatalogIndex::from(sample_catalog(config.sample_size));

    let results = index.search(config.options.as_ref());
    tracing::info!(matched = results.len(), "search complete");

    let out = serde_json::to_string_pretty(&results).context("failed to encode results")?;
    println!("{out}");
    Ok(())
}
