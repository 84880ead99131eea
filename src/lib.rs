//! Sushimap - sushi shop extraction from OpenStreetMap data
//!
//! This library provides the extraction pipeline and shared types for the
//! `extract` and `filter` binaries.

pub mod bbox;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod source;

pub use error::{ExtractError, Result};
pub use models::{Feature, FeatureCollection, MapEntity, OsmType};
pub use pipeline::{ExtractOptions, ExtractReport, Extractor};
