//! Integration with the `geo-types` crate.
//!
//! Kernel traits are implemented for `geo-types` coordinates, line strings and polygons, and `geo-types` geometries
//! can be converted into [`Geom<Coord>`](crate::Geom) to be fed into the topology engine.

mod coord;
mod geometry;
mod linestring;
mod polygon;
