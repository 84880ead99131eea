//! Decoded map entities as consumed by the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form OSM tag set
pub type Tags = HashMap<String, String>;

/// Type of OSM object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
}

impl std::fmt::Display for OsmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmType::Node => write!(f, "node"),
            OsmType::Way => write!(f, "way"),
            OsmType::Relation => write!(f, "relation"),
        }
    }
}

/// Geographic location (lon/lat, WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// A location is valid when both axes are finite and within WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// Reference from a way or relation to another entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRef {
    pub kind: OsmType,
    pub id: i64,
}

impl MemberRef {
    pub fn node(id: i64) -> Self {
        Self {
            kind: OsmType::Node,
            id,
        }
    }
}

/// Geometric payload of an entity
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A node; `None` when the decoder had no usable location
    Point(Option<Location>),
    /// A way or relation; members in source order, possibly dangling
    Composite(Vec<MemberRef>),
}

/// One entity from the source stream.
///
/// Ids are only unique per kind: `node/5` and `way/5` are distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntity {
    pub osm_type: OsmType,
    pub id: i64,
    pub tags: Tags,
    pub shape: Shape,
}

impl MapEntity {
    pub fn node(id: i64, location: Option<Location>, tags: Tags) -> Self {
        Self {
            osm_type: OsmType::Node,
            id,
            tags,
            shape: Shape::Point(location),
        }
    }

    /// A way; every member is a node reference
    pub fn way(id: i64, nodes: impl IntoIterator<Item = i64>, tags: Tags) -> Self {
        Self {
            osm_type: OsmType::Way,
            id,
            tags,
            shape: Shape::Composite(nodes.into_iter().map(MemberRef::node).collect()),
        }
    }

    pub fn relation(id: i64, members: Vec<MemberRef>, tags: Tags) -> Self {
        Self {
            osm_type: OsmType::Relation,
            id,
            tags,
            shape: Shape::Composite(members),
        }
    }

    /// Source identifier: "{osm_type}/{osm_id}"
    pub fn qualified_id(&self) -> String {
        format!("{}/{}", self.osm_type, self.id)
    }

    /// Tag value, or the empty string when the key is absent
    pub fn tag(&self, key: &str) -> &str {
        tag(&self.tags, key)
    }
}

/// Tag lookup treating missing keys as empty
pub fn tag<'a>(tags: &'a Tags, key: &str) -> &'a str {
    tags.get(key).map(String::as_str).unwrap_or("")
}

/// Build a tag set from literal pairs
pub fn tags_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Tags
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
