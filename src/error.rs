//! Error type shared by the library modules.

use thiserror::Error;

/// Fatal failures. Per-entity problems (bad locations, dangling member
/// references, missing tags) are never errors; those entities are skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to decode OSM data: {0}")]
    Decode(#[from] osmpbfreader::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid bounding box: {0}")]
    InvalidBounds(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
