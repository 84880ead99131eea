//! Entity sources feeding the two extraction passes.
//!
//! The pipeline never talks to the PBF decoder directly. It reads
//! [`MapEntity`] values from an [`EntitySource`], which must be rewindable
//! because the stream is traversed twice.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use osmpbfreader::{OsmId, OsmObj, OsmPbfReader};

use crate::error::{ExtractError, Result};
use crate::models::{Location, MapEntity, MemberRef, OsmType, Shape, Tags};

pub type PointRecord = (i64, Option<Location>);

/// A rewindable stream of decoded map entities
pub trait EntitySource {
    /// Reset the stream to its first entity
    fn rewind(&mut self) -> Result<()>;

    /// Iterate over every entity from the current position
    fn entities(&mut self) -> Box<dyn Iterator<Item = Result<MapEntity>> + '_>;

    /// Iterate over node ids and locations only.
    ///
    /// Sources that can skip tag decoding should override this.
    fn points(&mut self) -> Box<dyn Iterator<Item = Result<PointRecord>> + '_> {
        Box::new(self.entities().filter_map(|res| match res {
            Ok(MapEntity {
                id,
                shape: Shape::Point(location),
                ..
            }) => Some(Ok((id, location))),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        }))
    }
}

/// Entities decoded from an OSM PBF file
pub struct PbfSource<R: Read + Seek> {
    reader: OsmPbfReader<R>,
}

impl PbfSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> PbfSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: OsmPbfReader::new(reader),
        }
    }
}

impl<R: Read + Seek> EntitySource for PbfSource<R> {
    fn rewind(&mut self) -> Result<()> {
        self.reader.rewind()?;
        Ok(())
    }

    fn entities(&mut self) -> Box<dyn Iterator<Item = Result<MapEntity>> + '_> {
        Box::new(
            self.reader
                .iter()
                .map(|res| res.map(|obj| MapEntity::from(&obj)).map_err(ExtractError::from)),
        )
    }

    fn points(&mut self) -> Box<dyn Iterator<Item = Result<PointRecord>> + '_> {
        Box::new(self.reader.iter().filter_map(|res| match res {
            Ok(OsmObj::Node(node)) => Some(Ok((node.id.0, Some(node_location(&node))))),
            Ok(_) => None,
            Err(e) => Some(Err(ExtractError::from(e))),
        }))
    }
}

/// In-memory entity list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entities: Vec<MapEntity>,
}

impl MemorySource {
    pub fn new(entities: Vec<MapEntity>) -> Self {
        Self { entities }
    }
}

impl EntitySource for MemorySource {
    fn rewind(&mut self) -> Result<()> {
        Ok(())
    }

    fn entities(&mut self) -> Box<dyn Iterator<Item = Result<MapEntity>> + '_> {
        Box::new(self.entities.iter().cloned().map(Ok))
    }
}

fn node_location(node: &osmpbfreader::Node) -> Location {
    Location::new(node.lon(), node.lat())
}

fn convert_tags(tags: &osmpbfreader::Tags) -> Tags {
    tags.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn member_ref(id: OsmId) -> MemberRef {
    match id {
        OsmId::Node(n) => MemberRef {
            kind: OsmType::Node,
            id: n.0,
        },
        OsmId::Way(w) => MemberRef {
            kind: OsmType::Way,
            id: w.0,
        },
        OsmId::Relation(r) => MemberRef {
            kind: OsmType::Relation,
            id: r.0,
        },
    }
}

impl From<&OsmObj> for MapEntity {
    fn from(obj: &OsmObj) -> Self {
        match obj {
            OsmObj::Node(node) => {
                MapEntity::node(node.id.0, Some(node_location(node)), convert_tags(&node.tags))
            }
            OsmObj::Way(way) => MapEntity::way(
                way.id.0,
                way.nodes.iter().map(|n| n.0),
                convert_tags(&way.tags),
            ),
            OsmObj::Relation(rel) => MapEntity::relation(
                rel.id.0,
                rel.refs.iter().map(|r| member_ref(r.member)).collect(),
                convert_tags(&rel.tags),
            ),
        }
    }
}
