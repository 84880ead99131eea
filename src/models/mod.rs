//! Core data models for the extraction pipeline.

pub mod entity;
pub mod feature;

pub use entity::{tag, tags_from, Location, MapEntity, MemberRef, OsmType, Shape, Tags};
pub use feature::{Feature, FeatureCollection, FeatureProperties, PointGeometry, SOURCE_OSM};
