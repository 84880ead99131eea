//! Bounding-box post-filter for extracted collections.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ExtractError;
use crate::models::{Feature, FeatureCollection};

/// Inclusive lon/lat rectangle
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// The 23 wards and Tama area of Tokyo
    pub const TOKYO: BoundingBox = BoundingBox {
        north: 35.82,
        south: 35.53,
        east: 139.91,
        west: 139.50,
    };

    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self, ExtractError> {
        let bbox = Self {
            north,
            south,
            east,
            west,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        let finite = [self.north, self.south, self.east, self.west]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.south > self.north || self.west > self.east {
            return Err(ExtractError::InvalidBounds(format!(
                "west={} south={} east={} north={}",
                self.west, self.south, self.east, self.north
            )));
        }
        Ok(())
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.west..=self.east).contains(&lon) && (self.south..=self.north).contains(&lat)
    }

    pub fn contains_feature(&self, feature: &Feature) -> bool {
        self.contains(feature.geometry.lon(), feature.geometry.lat())
    }
}

/// Parses "west,south,east,north"
impl FromStr for BoundingBox {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|e| ExtractError::InvalidBounds(format!("{s}: {e}")))?;

        match parts.as_slice() {
            [west, south, east, north] => Self::new(*west, *south, *east, *north),
            _ => Err(ExtractError::InvalidBounds(format!(
                "{s}: expected west,south,east,north"
            ))),
        }
    }
}

/// Keep only features inside `bbox`, preserving order
pub fn filter_collection(collection: FeatureCollection, bbox: &BoundingBox) -> FeatureCollection {
    let features = collection
        .features
        .into_iter()
        .filter(|f| bbox.contains_feature(f))
        .collect();
    FeatureCollection::new(features)
}
