//! Tag rules deciding whether an entity is a sushi shop.

use crate::models::{tag, Tags};

/// Literal tokens meaning "sushi" in hiragana, katakana, kanji (two forms)
/// and Latin script. Matched as substrings of the lower-cased name.
pub const SUSHI_KEYWORDS: &[&str] = &["寿司", "すし", "スシ", "鮨", "sushi"];

/// `cuisine` may be a `;`/`,` separated list; containment is enough.
fn has_sushi_cuisine(tags: &Tags) -> bool {
    tag(tags, "cuisine").to_lowercase().contains("sushi")
}

fn has_sushi_name(tags: &Tags) -> bool {
    let name = tag(tags, "name").to_lowercase();
    SUSHI_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// True when any of these hold:
/// - `amenity=restaurant` with sushi in `cuisine`
/// - `amenity=restaurant` with a sushi keyword in `name`
/// - `shop=seafood` with a sushi keyword in `name`
/// - `amenity=fast_food` with sushi in `cuisine` (conveyor belt shops)
pub fn is_target(tags: &Tags) -> bool {
    let amenity = tag(tags, "amenity");
    let shop = tag(tags, "shop");

    (amenity == "restaurant" && has_sushi_cuisine(tags))
        || (amenity == "restaurant" && has_sushi_name(tags))
        || (shop == "seafood" && has_sushi_name(tags))
        || (amenity == "fast_food" && has_sushi_cuisine(tags))
}
