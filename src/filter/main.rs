//! Bounding-box filter for extracted GeoJSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sushimap::bbox::{filter_collection, BoundingBox};
use sushimap::config::Config;
use sushimap::output::{read_collection, write_collection};

#[derive(Parser, Debug)]
#[command(name = "filter")]
#[command(about = "Keep only features inside a bounding box")]
struct Args {
    /// Input GeoJSON file
    input: PathBuf,

    /// Output GeoJSON file
    output: PathBuf,

    /// Named box from the config file (built in: tokyo)
    #[arg(long, default_value = "tokyo", conflicts_with = "bbox")]
    region: String,

    /// Explicit box as west,south,east,north
    #[arg(long, value_parser = parse_bbox)]
    bbox: Option<BoundingBox>,

    /// TOML file with named bounds
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_bbox(s: &str) -> std::result::Result<BoundingBox, String> {
    s.parse::<BoundingBox>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };

    let bbox = match args.bbox {
        Some(bbox) => bbox,
        None => config
            .bounds(&args.region)
            .with_context(|| format!("Unknown region: {}", args.region))?,
    };

    info!("Reading: {}", args.input.display());
    let collection = read_collection(&args.input)
        .with_context(|| format!("Failed to read GeoJSON: {}", args.input.display()))?;
    info!("Original features: {}", collection.len());

    let filtered = filter_collection(collection, &bbox);
    info!(
        "Features inside [{}, {}, {}, {}]: {}",
        bbox.west,
        bbox.south,
        bbox.east,
        bbox.north,
        filtered.len()
    );

    write_collection(&args.output, &filtered)
        .with_context(|| format!("Failed to write output: {}", args.output.display()))?;

    Ok(())
}
