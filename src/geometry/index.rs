//! Node coordinate index built during the first pass.

use hashbrown::HashMap;
use indicatif::ProgressBar;
use tracing::info;

use crate::error::Result;
use crate::models::Location;
use crate::source::EntitySource;

/// Node id -> location for every node with a valid location
#[derive(Debug, Clone, Default)]
pub struct CoordinateIndex {
    coords: HashMap<i64, Location>,
}

impl CoordinateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index by scanning the whole source once.
    ///
    /// Must finish before any way or relation is resolved, since members
    /// may appear after the entity referencing them.
    pub fn build<S: EntitySource + ?Sized>(source: &mut S) -> Result<Self> {
        Self::build_with_progress(source, None)
    }

    pub fn build_with_progress<S: EntitySource + ?Sized>(
        source: &mut S,
        progress: Option<&ProgressBar>,
    ) -> Result<Self> {
        info!("Pass 1: Collecting node coordinates...");
        source.rewind()?;

        let mut index = Self::new();
        for record in source.points() {
            let (id, location) = record?;
            if let Some(pb) = progress {
                pb.inc(1);
            }
            if let Some(location) = location {
                index.insert(id, location);
            }
        }

        info!("Collected {} node coordinates", index.len());
        Ok(index)
    }

    /// Record a node location. Invalid locations are ignored; a repeated id
    /// overwrites the earlier entry.
    pub fn insert(&mut self, id: i64, location: Location) -> bool {
        if !location.is_valid() {
            return false;
        }
        self.coords.insert(id, location);
        true
    }

    pub fn get(&self, id: i64) -> Option<Location> {
        self.coords.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl FromIterator<(i64, Location)> for CoordinateIndex {
    fn from_iter<I: IntoIterator<Item = (i64, Location)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (id, location) in iter {
            index.insert(id, location);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MapEntity, Tags};
    use crate::source::MemorySource;

    #[test]
    fn test_build_keeps_only_valid_nodes() {
        let mut source = MemorySource::new(vec![
            MapEntity::way(100, vec![1, 2], Tags::new()),
            MapEntity::node(1, Some(Location::new(139.0, 35.0)), Tags::new()),
            MapEntity::node(2, None, Tags::new()),
            MapEntity::node(3, Some(Location::new(200.0, 35.0)), Tags::new()),
        ]);

        let index = CoordinateIndex::build(&mut source).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(1), Some(Location::new(139.0, 35.0)));
        assert_eq!(index.get(2), None);
        assert_eq!(index.get(3), None);
        // way ids never enter the index
        assert_eq!(index.get(100), None);
    }

    #[test]
    fn test_later_entry_overwrites() {
        let index: CoordinateIndex = vec![
            (1, Location::new(1.0, 1.0)),
            (1, Location::new(2.0, 2.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(1), Some(Location::new(2.0, 2.0)));
    }
}
