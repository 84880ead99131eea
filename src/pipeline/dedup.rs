//! Removal of features that are indistinguishable at ~1m precision.

use hashbrown::HashSet;

use crate::models::Feature;

/// Decimal places kept in the comparison key (about 1 meter)
pub const KEY_DECIMALS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey {
    lon: String,
    lat: String,
    name: String,
}

/// Decimal rounding of the exact stored value. Negative zero is folded
/// into zero so that `-0.000001` and `0.000001` share a key.
fn rounded(value: f64) -> String {
    let text = format!("{:.*}", KEY_DECIMALS, value);
    match text.strip_prefix('-') {
        Some(abs) if abs.bytes().all(|b| b == b'0' || b == b'.') => abs.to_string(),
        _ => text,
    }
}

impl DedupKey {
    fn of(feature: &Feature) -> Self {
        Self {
            lon: rounded(feature.geometry.lon()),
            lat: rounded(feature.geometry.lat()),
            name: feature.properties.name.clone(),
        }
    }
}

/// Keep the first feature for each (rounded lon, rounded lat, name) key.
///
/// Order of survivors is preserved and stored coordinates are untouched;
/// rounding only affects the key.
pub fn deduplicate(features: Vec<Feature>) -> Vec<Feature> {
    let mut seen = HashSet::with_capacity(features.len());
    features
        .into_iter()
        .filter(|f| seen.insert(DedupKey::of(f)))
        .collect()
}
