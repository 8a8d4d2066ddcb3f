use std::path::PathBuf;

use anyhow::{Context, Result};
use cellar::{Cellar, CellarConfig, FilterState, RangeFilter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filter and fuzzy-search a wine catalog.
#[derive(Debug, Parser)]
#[command(name = "cellar", version, about)]
struct Cli {
    /// JSON file holding an array of wine records
    catalog: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Typo-tolerant search query
    #[arg(long)]
    search: Option<String>,

    /// Keep only these countries (repeatable)
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Keep only these wine types (repeatable)
    #[arg(long = "type")]
    wine_types: Vec<String>,

    /// Upper price bound in KRW, inclusive
    #[arg(long)]
    max_price: Option<u64>,

    /// Print the available filter options as JSON instead of results
    #[arg(long)]
    options: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CellarConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CellarConfig::default(),
    };
    let cellar = Cellar::open(&cli.catalog, &config)
        .with_context(|| format!("opening catalog {}", cli.catalog.display()))?;

    if cli.options {
        let options = cellar.options();
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let mut state = FilterState::default();
    for country in &cli.countries {
        if !state.countries.contains(country.as_str()) {
            cellar.toggle_country(&mut state, country);
        }
    }
    for wine_type in &cli.wine_types {
        state.wine_types.insert(wine_type.clone());
    }
    if let Some(max) = cli.max_price {
        let min = state.price.min.min(max);
        state.set_price_range(RangeFilter::try_new(min, max)?);
    }

    let query = cli.search.as_deref().unwrap_or_default();
    for record in cellar.browse(&state, query) {
        println!("{}", record.name);
    }

    Ok(())
}
