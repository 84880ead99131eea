//! Two-pass extraction pipeline.
//!
//! Pass 1 indexes every node location. Pass 2 classifies each entity,
//! applies the locality filter, resolves a representative point and builds
//! the feature. Ways and relations may reference nodes that appear later in
//! the stream, so the index is complete before pass 2 starts.

mod builder;
mod dedup;

pub use builder::{FeatureBuilder, READING_KEYS};
pub use dedup::{deduplicate, KEY_DECIMALS};

use indicatif::ProgressBar;
use tracing::info;

use crate::classify::{is_target, matches_locality, LocalityFilter};
use crate::error::Result;
use crate::geometry::{CoordinateIndex, GeometryResolver};
use crate::models::{Feature, FeatureCollection, MapEntity};
use crate::source::EntitySource;

/// Runtime switches for a run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub locality: Option<LocalityFilter>,
    pub dedup: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            locality: None,
            dedup: true,
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Node locations held in the coordinate index
    pub indexed_points: usize,
    /// Features built before deduplication
    pub raw_matches: usize,
    pub collection: FeatureCollection,
}

pub struct Extractor {
    options: ExtractOptions,
    progress: Option<ProgressBar>,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            progress: None,
        }
    }

    /// Tick `progress` once per decoded entity in both passes
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run both passes and deduplicate (if enabled).
    ///
    /// Any decoder error aborts the whole run; nothing is returned partially.
    pub fn run<S: EntitySource + ?Sized>(&self, source: &mut S) -> Result<ExtractReport> {
        if let Some(pb) = &self.progress {
            pb.set_message("pass 1/2: indexing nodes");
        }
        let index = CoordinateIndex::build_with_progress(source, self.progress.as_ref())?;

        if let Some(pb) = &self.progress {
            pb.set_message("pass 2/2: extracting shops");
        }
        let features = self.collect_features(source, &index)?;
        let raw_matches = features.len();

        let features = if self.options.dedup {
            let unique = deduplicate(features);
            info!("After deduplication: {} features", unique.len());
            unique
        } else {
            features
        };

        if let Some(pb) = &self.progress {
            pb.finish_with_message("Processing complete");
        }

        Ok(ExtractReport {
            indexed_points: index.len(),
            raw_matches,
            collection: FeatureCollection::new(features),
        })
    }

    /// Second pass: every entity that passes all gates, in stream order
    pub fn collect_features<S: EntitySource + ?Sized>(
        &self,
        source: &mut S,
        index: &CoordinateIndex,
    ) -> Result<Vec<Feature>> {
        info!("Pass 2: Extracting sushi restaurants...");
        source.rewind()?;

        let resolver = GeometryResolver::new(index);
        let mut features = Vec::new();

        for entity in source.entities() {
            let entity = entity?;
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
            if let Some(feature) = self.extract_feature(&entity, &resolver) {
                features.push(feature);
            }
        }

        info!("Found {} sushi restaurants", features.len());
        Ok(features)
    }

    /// Classification, locality and geometry are independent gates; all must pass.
    pub fn extract_feature(
        &self,
        entity: &MapEntity,
        resolver: &GeometryResolver<'_>,
    ) -> Option<Feature> {
        if !is_target(&entity.tags) {
            return None;
        }
        if !matches_locality(&entity.tags, self.options.locality.as_ref()) {
            return None;
        }
        let location = resolver.resolve(entity)?;
        Some(FeatureBuilder::build(entity, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LocalityTable;
    use crate::models::{tags_from, Location, MemberRef, Tags};
    use crate::source::MemorySource;

    fn sushi_tags(name: &str) -> Tags {
        tags_from([
            ("amenity", "restaurant"),
            ("cuisine", "sushi"),
            ("name", name),
        ])
    }

    fn run(entities: Vec<MapEntity>, options: ExtractOptions) -> ExtractReport {
        let mut source = MemorySource::new(entities);
        Extractor::new(options).run(&mut source).unwrap()
    }

    #[test]
    fn test_single_node() {
        let report = run(
            vec![MapEntity::node(
                1,
                Some(Location::new(139.70, 35.68)),
                sushi_tags("寿司太郎"),
            )],
            ExtractOptions::default(),
        );

        assert_eq!(report.indexed_points, 1);
        assert_eq!(report.collection.len(), 1);
        let feature = &report.collection.features[0];
        assert_eq!(feature.geometry.coordinates, [139.70, 35.68]);
        assert_eq!(feature.properties.name, "寿司太郎");
        assert_eq!(feature.properties.osm_id, "node/1");
    }

    #[test]
    fn test_node_and_way_collapse() {
        let entities = vec![
            MapEntity::node(1, Some(Location::new(139.0, 35.0)), sushi_tags("X")),
            MapEntity::way(1, vec![1], sushi_tags("X")),
        ];

        let report = run(entities.clone(), ExtractOptions::default());
        assert_eq!(report.raw_matches, 2);
        assert_eq!(report.collection.len(), 1);
        assert_eq!(report.collection.features[0].properties.osm_id, "node/1");

        let no_dedup = ExtractOptions {
            dedup: false,
            ..Default::default()
        };
        let report = run(entities, no_dedup);
        assert_eq!(report.collection.len(), 2);
    }

    #[test]
    fn test_relation_centroid() {
        let report = run(
            vec![
                MapEntity::relation(
                    9,
                    vec![MemberRef::node(1), MemberRef::node(2)],
                    sushi_tags("鮨"),
                ),
                MapEntity::node(1, Some(Location::new(135.50001, 34.00001)), Tags::new()),
                MapEntity::node(2, Some(Location::new(135.50002, 34.00002)), Tags::new()),
            ],
            ExtractOptions::default(),
        );

        assert_eq!(report.collection.len(), 1);
        let feature = &report.collection.features[0];
        assert_eq!(feature.properties.osm_id, "relation/9");
        assert!((feature.geometry.lon() - 135.500015).abs() < 1e-9);
        assert!((feature.geometry.lat() - 34.000015).abs() < 1e-9);
    }

    #[test]
    fn test_way_before_its_nodes() {
        let report = run(
            vec![
                MapEntity::way(5, vec![1, 2, 3, 1], sushi_tags("すし処")),
                MapEntity::node(1, Some(Location::new(0.0, 0.0)), Tags::new()),
                MapEntity::node(2, Some(Location::new(2.0, 0.0)), Tags::new()),
                MapEntity::node(3, Some(Location::new(2.0, 2.0)), Tags::new()),
            ],
            ExtractOptions::default(),
        );

        assert_eq!(report.collection.len(), 1);
        // closing node counted twice: (0+2+2+0)/4, (0+0+2+0)/4
        assert_eq!(
            report.collection.features[0].geometry.coordinates,
            [1.0, 0.5]
        );
    }

    #[test]
    fn test_unresolvable_composite_dropped() {
        let report = run(
            vec![
                MapEntity::way(5, vec![100, 101], sushi_tags("すし処")),
                MapEntity::node(7, None, sushi_tags("寿司")),
            ],
            ExtractOptions::default(),
        );
        assert_eq!(report.raw_matches, 0);
        assert!(report.collection.is_empty());
    }

    #[test]
    fn test_unclassified_entities_skipped() {
        let report = run(
            vec![
                MapEntity::node(1, Some(Location::new(1.0, 1.0)), Tags::new()),
                MapEntity::node(
                    2,
                    Some(Location::new(1.0, 1.0)),
                    tags_from([("amenity", "restaurant"), ("name", "Trattoria")]),
                ),
            ],
            ExtractOptions::default(),
        );
        assert_eq!(report.indexed_points, 2);
        assert!(report.collection.is_empty());
    }

    #[test]
    fn test_locality_gate() {
        let mut tokyo = sushi_tags("寿司A");
        tokyo.insert("addr:prefecture".into(), "東京都".into());
        let mut osaka = sushi_tags("寿司B");
        osaka.insert("addr:prefecture".into(), "大阪府".into());

        let table = LocalityTable::builtin();
        let options = ExtractOptions {
            locality: Some(LocalityFilter::new("tokyo", &table)),
            dedup: true,
        };
        let report = run(
            vec![
                MapEntity::node(1, Some(Location::new(139.7, 35.6)), tokyo),
                MapEntity::node(2, Some(Location::new(135.5, 34.7)), osaka),
                MapEntity::node(3, Some(Location::new(135.5, 34.7)), sushi_tags("寿司C")),
            ],
            options,
        );

        assert_eq!(report.collection.len(), 1);
        assert_eq!(report.collection.features[0].properties.name, "寿司A");
    }

    #[test]
    fn test_empty_source() {
        let report = run(vec![], ExtractOptions::default());
        assert_eq!(report.indexed_points, 0);
        assert_eq!(report.raw_matches, 0);
        assert!(report.collection.is_empty());
        assert_eq!(report.collection.geo_type, "FeatureCollection");
    }
}
