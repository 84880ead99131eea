use geo::{Centroid, MultiPoint, Point};
use tracing::debug;

use super::CoordinateIndex;
use crate::models::{Location, MapEntity, MemberRef, OsmType, Shape};

/// Resolves a single representative point for any entity kind
pub struct GeometryResolver<'a> {
    index: &'a CoordinateIndex,
}

impl<'a> GeometryResolver<'a> {
    pub fn new(index: &'a CoordinateIndex) -> Self {
        Self { index }
    }

    /// Nodes use their own location. Ways and relations use the unweighted
    /// mean of their resolvable node members; `None` when nothing resolves.
    pub fn resolve(&self, entity: &MapEntity) -> Option<Location> {
        match &entity.shape {
            Shape::Point(location) => location.filter(Location::is_valid),
            Shape::Composite(members) => {
                let center = self.resolve_members(members);
                if center.is_none() {
                    debug!(
                        "Could not resolve geometry for {}",
                        entity.qualified_id()
                    );
                }
                center
            }
        }
    }

    /// Mean of member node coordinates.
    ///
    /// Only direct node members are looked up; way and relation members are
    /// skipped, as are nodes missing from the index. Repeated refs (e.g. the
    /// closing node of a ring) count once per occurrence.
    pub fn resolve_members(&self, members: &[MemberRef]) -> Option<Location> {
        let points: Vec<Point<f64>> = members
            .iter()
            .filter(|m| m.kind == OsmType::Node)
            .filter_map(|m| self.index.get(m.id))
            .map(|loc| Point::new(loc.lon, loc.lat))
            .collect();

        MultiPoint::new(points)
            .centroid()
            .map(|p| Location::new(p.x(), p.y()))
    }
}
