//! Geometry kernel used by the `geotopo` planar topology engine.
//!
//! The crate is trait based in the same way the geometry types of a map engine usually are: algorithms are written
//! against [`CartesianPoint2d`](cartesian::CartesianPoint2d), [`Contour`] and [`Polygon`] traits, so that they can be
//! applied to any point or geometry type that implements them. Simple implementations of the traits are provided in
//! the [`impls`] module, and the [`Coord`](cartesian::Coord) type is the coordinate the topology engine works with.
//!
//! The kernel provides the primitives the engine consumes:
//! * [`Orientation`](cartesian::Orientation) of a triplet of points,
//! * [`Segment::intersection`](segment::Segment::intersection) of two segments,
//! * bounding rectangles ([`Rect`](cartesian::Rect)),
//! * ray-crossing location of a point relative to a ring ([`ring_location`](cartesian::ring_location)),
//! * signed area and [`Winding`](cartesian::Winding) of closed contours.
//!
//! No attempt is made to provide robust (exact) arithmetic: all predicates are evaluated with plain floating point
//! operations.

pub mod cartesian;
pub mod contour;
pub mod error;
mod geometry;
pub mod impls;
mod location;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use geometry::Geom;
pub use location::Location;
pub use polygon::Polygon;
