use crate::models::{Feature, FeatureProperties, Location, MapEntity, SOURCE_OSM};

/// Reading tags in priority order: hiragana, kana, romaji, then plain
/// Japanese (which is often kana in practice).
pub const READING_KEYS: &[&str] = &["name:ja-Hira", "name:ja_kana", "name:ja_rm", "name:ja"];

/// Builds output features from classified, located entities
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Callers must have already applied classification, locality and
    /// geometry resolution.
    pub fn build(entity: &MapEntity, location: Location) -> Feature {
        let properties = FeatureProperties {
            osm_id: entity.qualified_id(),
            name: entity.tag("name").to_string(),
            name_reading: Self::reading(entity).to_string(),
            amenity: entity.tag("amenity").to_string(),
            shop: entity.tag("shop").to_string(),
            cuisine: entity.tag("cuisine").to_string(),
            addr_prefecture: entity.tag("addr:prefecture").to_string(),
            addr_city: entity.tag("addr:city").to_string(),
            addr_full: entity.tag("addr:full").to_string(),
            source: SOURCE_OSM.to_string(),
        };
        Feature::new(location, properties)
    }

    /// First non-empty reading tag, or ""
    pub fn reading(entity: &MapEntity) -> &str {
        READING_KEYS
            .iter()
            .map(|key| entity.tag(key))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{tags_from, Tags};

    #[test]
    fn test_build_copies_tags() {
        let entity = MapEntity::way(
            42,
            vec![1],
            tags_from([
                ("name", "すし匠"),
                ("amenity", "restaurant"),
                ("cuisine", "sushi"),
                ("addr:prefecture", "東京都"),
                ("addr:city", "新宿区"),
            ]),
        );
        let feature = FeatureBuilder::build(&entity, Location::new(139.7, 35.69));

        assert_eq!(feature.geometry.coordinates, [139.7, 35.69]);
        let p = &feature.properties;
        assert_eq!(p.osm_id, "way/42");
        assert_eq!(p.name, "すし匠");
        assert_eq!(p.amenity, "restaurant");
        assert_eq!(p.shop, "");
        assert_eq!(p.cuisine, "sushi");
        assert_eq!(p.addr_prefecture, "東京都");
        assert_eq!(p.addr_city, "新宿区");
        assert_eq!(p.addr_full, "");
        assert_eq!(p.source, "OSM");
    }

    #[test]
    fn test_reading_priority() {
        let entity = MapEntity::node(
            1,
            None,
            tags_from([("name:ja_rm", "sushi sho"), ("name:ja_kana", "スシショウ")]),
        );
        assert_eq!(FeatureBuilder::reading(&entity), "スシショウ");

        let entity = MapEntity::node(
            1,
            None,
            tags_from([
                ("name:ja", "すし匠"),
                ("name:ja-Hira", "すししょう"),
                ("name:ja_kana", "スシショウ"),
            ]),
        );
        assert_eq!(FeatureBuilder::reading(&entity), "すししょう");

        let entity = MapEntity::node(1, None, tags_from([("name:ja", "すし匠")]));
        assert_eq!(FeatureBuilder::reading(&entity), "すし匠");
    }

    #[test]
    fn test_reading_skips_empty_values() {
        let entity = MapEntity::node(
            1,
            None,
            tags_from([("name:ja-Hira", ""), ("name:ja_rm", "sushi sho")]),
        );
        assert_eq!(FeatureBuilder::reading(&entity), "sushi sho");
        assert_eq!(FeatureBuilder::reading(&MapEntity::node(1, None, Tags::new())), "");
    }
}
