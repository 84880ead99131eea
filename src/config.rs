//! Optional TOML configuration.
//!
//! ```toml
//! [localities]
//! kanto = ["東京", "神奈川", "千葉", "埼玉"]
//!
//! [bounds.shibuya]
//! north = 35.68
//! south = 35.64
//! east = 139.72
//! west = 139.66
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::bbox::BoundingBox;
use crate::classify::LocalityTable;
use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Extra or replacement entries for the prefecture table
    #[serde(default)]
    pub localities: HashMap<String, Vec<String>>,
    /// Named boxes for the post-filter
    #[serde(default)]
    pub bounds: HashMap<String, BoundingBox>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        for bbox in config.bounds.values() {
            bbox.validate()?;
        }
        Ok(config)
    }

    /// Built-in prefectures with this config's entries applied on top
    pub fn locality_table(&self) -> LocalityTable {
        let mut table = LocalityTable::builtin();
        table.extend(self.localities.clone());
        table
    }

    /// Named box lookup; "tokyo" is always available
    pub fn bounds(&self, name: &str) -> Option<BoundingBox> {
        let key = name.to_lowercase();
        self.bounds
            .iter()
            .find(|(k, _)| k.to_lowercase() == key)
            .map(|(_, b)| *b)
            .or_else(|| (key == "tokyo").then_some(BoundingBox::TOKYO))
    }
}
