//! Prefecture filtering on address tags.

use std::collections::HashMap;

use crate::models::{tag, Tags};

/// Address tags searched for a prefecture name, in order.
/// `addr:city` sometimes carries the prefecture as well.
pub const ADDRESS_KEYS: &[&str] = &["addr:prefecture", "addr:full", "addr:city"];

/// Prefecture key -> accepted spellings (official, short, romanized)
const PREFECTURES: &[(&str, &[&str])] = &[
    ("hokkaido", &["北海道", "Hokkaido"]),
    ("aomori", &["青森県", "青森", "Aomori"]),
    ("iwate", &["岩手県", "岩手", "Iwate"]),
    ("miyagi", &["宮城県", "宮城", "Miyagi"]),
    ("akita", &["秋田県", "秋田", "Akita"]),
    ("yamagata", &["山形県", "山形", "Yamagata"]),
    ("fukushima", &["福島県", "福島", "Fukushima"]),
    ("ibaraki", &["茨城県", "茨城", "Ibaraki"]),
    ("tochigi", &["栃木県", "栃木", "Tochigi"]),
    ("gunma", &["群馬県", "群馬", "Gunma"]),
    ("saitama", &["埼玉県", "埼玉", "Saitama"]),
    ("chiba", &["千葉県", "千葉", "Chiba"]),
    ("tokyo", &["東京都", "東京", "Tokyo"]),
    ("kanagawa", &["神奈川県", "神奈川", "Kanagawa"]),
    ("niigata", &["新潟県", "新潟", "Niigata"]),
    ("toyama", &["富山県", "富山", "Toyama"]),
    ("ishikawa", &["石川県", "石川", "Ishikawa"]),
    ("fukui", &["福井県", "福井", "Fukui"]),
    ("yamanashi", &["山梨県", "山梨", "Yamanashi"]),
    ("nagano", &["長野県", "長野", "Nagano"]),
    ("gifu", &["岐阜県", "岐阜", "Gifu"]),
    ("shizuoka", &["静岡県", "静岡", "Shizuoka"]),
    ("aichi", &["愛知県", "愛知", "Aichi"]),
    ("mie", &["三重県", "三重", "Mie"]),
    ("shiga", &["滋賀県", "滋賀", "Shiga"]),
    ("kyoto", &["京都府", "京都", "Kyoto"]),
    ("osaka", &["大阪府", "大阪", "Osaka"]),
    ("hyogo", &["兵庫県", "兵庫", "Hyogo"]),
    ("nara", &["奈良県", "奈良", "Nara"]),
    ("wakayama", &["和歌山県", "和歌山", "Wakayama"]),
    ("tottori", &["鳥取県", "鳥取", "Tottori"]),
    ("shimane", &["島根県", "島根", "Shimane"]),
    ("okayama", &["岡山県", "岡山", "Okayama"]),
    ("hiroshima", &["広島県", "広島", "Hiroshima"]),
    ("yamaguchi", &["山口県", "山口", "Yamaguchi"]),
    ("tokushima", &["徳島県", "徳島", "Tokushima"]),
    ("kagawa", &["香川県", "香川", "Kagawa"]),
    ("ehime", &["愛媛県", "愛媛", "Ehime"]),
    ("kochi", &["高知県", "高知", "Kochi"]),
    ("fukuoka", &["福岡県", "福岡", "Fukuoka"]),
    ("saga", &["佐賀県", "佐賀", "Saga"]),
    ("nagasaki", &["長崎県", "長崎", "Nagasaki"]),
    ("kumamoto", &["熊本県", "熊本", "Kumamoto"]),
    ("oita", &["大分県", "大分", "Oita"]),
    ("miyazaki", &["宮崎県", "宮崎", "Miyazaki"]),
    ("kagoshima", &["鹿児島県", "鹿児島", "Kagoshima"]),
    ("okinawa", &["沖縄県", "沖縄", "Okinawa"]),
];

/// Lookup table from region key to accepted name variants
#[derive(Debug, Clone, Default)]
pub struct LocalityTable {
    entries: HashMap<String, Vec<String>>,
}

impl LocalityTable {
    /// All 47 prefectures
    pub fn builtin() -> Self {
        let entries = PREFECTURES
            .iter()
            .map(|(key, names)| {
                (
                    key.to_string(),
                    names.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Add or replace entries; keys are case-insensitive
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        for (key, variants) in entries {
            self.entries.insert(key.to_lowercase(), variants);
        }
    }

    /// Accepted variants for a token. Unknown tokens match only themselves.
    pub fn variants(&self, token: &str) -> Vec<String> {
        self.entries
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_else(|| vec![token.to_string()])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A configured locality constraint
#[derive(Debug, Clone)]
pub struct LocalityFilter {
    token: String,
    variants: Vec<String>,
}

impl LocalityFilter {
    pub fn new(token: &str, table: &LocalityTable) -> Self {
        Self {
            token: token.to_string(),
            variants: table.variants(token),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Case-sensitive substring match of any variant in any address tag
    pub fn matches(&self, tags: &Tags) -> bool {
        ADDRESS_KEYS.iter().any(|key| {
            let value = tag(tags, key);
            self.variants.iter().any(|v| value.contains(v.as_str()))
        })
    }
}

/// Always true when no filter is configured
pub fn matches_locality(tags: &Tags, filter: Option<&LocalityFilter>) -> bool {
    filter.map_or(true, |f| f.matches(tags))
}
