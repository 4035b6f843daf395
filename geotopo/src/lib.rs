//! Geotopo is a planar topology engine. It builds half-edge graphs of noded linework, tracks how the edges are
//! located relative to one or two input geometries, and assembles the edges selected by an overlay operation back into
//! polygons.
//!
//! # Main components
//!
//! * [`label`] and [`depth`] classify every edge relative to the input geometries: whether the edge itself and the
//!   areas on its left and right sides are in the interior, on the boundary or in the exterior of each geometry.
//! * [`graph`] contains the [`PlanarGraph`] of [`Edge`](graph::Edge)s and their two
//!   [`DirectedEdge`](graph::DirectedEdge)s. The directed edges leaving a node are sorted by angle, which allows to
//!   propagate side depths around nodes and to link result edges into rings.
//! * [`ring`] walks linked directed edges into [`EdgeRing`](ring::EdgeRing)s, and [`polygon_assembler`] classifies
//!   the rings into shells and holes and assigns holes to shells.
//! * [`line_graph`] is a separate graph of the segments of a single line. It finds the self-intersections of the line,
//!   splits it at the crossing points and extracts simple lines again.
//! * [`hull`] and [`mbc`] compute convex hulls and minimum bounding circles of point sets.
//!
//! # Assembling polygons
//!
//! ```
//! use geotopo::graph::{Edge, OverlayOp, PlanarGraph};
//! use geotopo::label::Label;
//! use geotopo::polygon_assembler::PolygonAssembler;
//! use geotopo_types::cartesian::Coord;
//! use geotopo_types::Location;
//!
//! let square = vec![
//!     Coord::new(0.0, 0.0),
//!     Coord::new(10.0, 0.0),
//!     Coord::new(10.0, 10.0),
//!     Coord::new(0.0, 10.0),
//!     Coord::new(0.0, 0.0),
//! ];
//!
//! // Counter-clockwise ring: the interior of the first geometry is on the left.
//! let mut label = Label::area_for(0, Location::Boundary, Location::Interior, Location::Exterior);
//! label.set_all_locations(1, Location::Exterior);
//!
//! let mut graph = PlanarGraph::new();
//! graph.add_edge(Edge::new(square, label)?);
//! graph.mark_result_area_edges(OverlayOp::Union);
//!
//! let assembly = PolygonAssembler::default().assemble(&mut graph)?;
//! assert_eq!(assembly.polygons().len(), 1);
//! # Ok::<(), geotopo::error::GeotopoError>(())
//! ```
//!
//! # Errors
//!
//! Inconsistent input topology is reported with [`TopologyError`](error::TopologyError) variants carrying the
//! coordinate where the inconsistency was found. Recoverable input quality issues are logged with the [`log`] crate
//! and handled with a documented fallback.

pub mod config;
pub mod depth;
pub mod error;
pub mod graph;
pub mod hull;
pub mod label;
pub mod line_graph;
pub mod mbc;
pub mod polygon_assembler;
mod position;
pub mod ring;

pub use geotopo_types;

pub use config::EngineConfig;
pub use graph::PlanarGraph;
pub use hull::ConvexHull;
pub use line_graph::LineStringGraph;
pub use mbc::MinimumBoundingCircle;
pub use polygon_assembler::PolygonAssembler;
pub use position::Position;

use geotopo_types::cartesian::Coord;
use geotopo_types::Geom;

/// Convex hull of the points with default options. See [`ConvexHull::hull`].
pub fn convex_hull(points: &[Coord]) -> Geom<Coord> {
    ConvexHull::new(points.iter().copied()).hull()
}

/// Minimum bounding circle of the vertices of the geometry.
pub fn minimum_bounding_circle(geom: &Geom<Coord>) -> MinimumBoundingCircle {
    MinimumBoundingCircle::new(geom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::impls::Contour;

    #[test]
    fn hull_and_circle_of_line() {
        let points = [Coord::new(0.0, 0.0), Coord::new(4.0, 0.0), Coord::new(2.0, 0.0)];
        let hull = convex_hull(&points);
        assert_eq!(
            hull,
            Geom::Contour(Contour::open(vec![Coord::new(0.0, 0.0), Coord::new(4.0, 0.0)]))
        );

        let circle = minimum_bounding_circle(&hull);
        assert_eq!(circle.center(), Some(Coord::new(2.0, 0.0)));
        assert_eq!(circle.radius(), 2.0);
    }
}
