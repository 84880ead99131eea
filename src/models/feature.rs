//! GeoJSON output document.

use serde::{Deserialize, Serialize};

use super::Location;

/// Constant provenance marker carried on every feature
pub const SOURCE_OSM: &str = "OSM";

/// GeoJSON point geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub coordinates: [f64; 2], // [lon, lat]
}

impl PointGeometry {
    pub fn new(location: Location) -> Self {
        Self {
            geo_type: "Point".to_string(),
            coordinates: [location.lon, location.lat],
        }
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Normalized attributes of a shop. Missing keys read back as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    /// "{osm_type}/{osm_id}"
    pub osm_id: String,
    pub name: String,
    /// Reading of the name (hiragana, kana or romaji), used for sorting
    pub name_reading: String,
    pub amenity: String,
    pub shop: String,
    pub cuisine: String,
    #[serde(rename = "addr:prefecture")]
    pub addr_prefecture: String,
    #[serde(rename = "addr:city")]
    pub addr_city: String,
    #[serde(rename = "addr:full")]
    pub addr_full: String,
    pub source: String,
}

/// A single GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub geometry: PointGeometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn new(location: Location, properties: FeatureProperties) -> Self {
        Self {
            geo_type: "Feature".to_string(),
            geometry: PointGeometry::new(location),
            properties,
        }
    }
}

/// Top-level GeoJSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub geo_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            geo_type: "FeatureCollection".to_string(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
