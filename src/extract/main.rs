//! Sushi shop extraction.
//!
//! Reads an OSM PBF file twice (node index, then classification),
//! deduplicates and writes a GeoJSON FeatureCollection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sushimap::classify::LocalityFilter;
use sushimap::config::Config;
use sushimap::output::write_collection;
use sushimap::source::PbfSource;
use sushimap::{ExtractOptions, Extractor};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "extract")]
#[command(about = "Extract sushi restaurants from an OSM PBF file as GeoJSON")]
struct Args {
    /// Input OSM PBF file
    input: PathBuf,

    /// Output GeoJSON file
    output: PathBuf,

    /// Filter by prefecture (e.g. tokyo, osaka)
    #[arg(long)]
    pref: Option<String>,

    /// Disable deduplication
    #[arg(long)]
    no_dedup: bool,

    /// TOML file with extra locality names
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show a progress spinner
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Processing: {}", args.input.display());

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };

    let locality = args.pref.as_deref().map(|token| {
        let filter = LocalityFilter::new(token, &config.locality_table());
        info!(
            "Prefecture filter: {} ({})",
            filter.token(),
            filter.variants().join(", ")
        );
        filter
    });

    let options = ExtractOptions {
        locality,
        dedup: !args.no_dedup,
    };

    let mut source = PbfSource::open(&args.input)
        .with_context(|| format!("Failed to open PBF file: {}", args.input.display()))?;

    let mut extractor = Extractor::new(options);
    if args.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} objects ({per_sec}) {msg}")?,
        );
        extractor = extractor.with_progress(pb);
    }

    let report = extractor
        .run(&mut source)
        .context("Failed to process OSM data")?;

    write_collection(&args.output, &report.collection)
        .with_context(|| format!("Failed to write output: {}", args.output.display()))?;

    info!(
        "Indexed {} nodes, {} raw matches, {} features written",
        report.indexed_points,
        report.raw_matches,
        report.collection.len()
    );

    Ok(())
}
