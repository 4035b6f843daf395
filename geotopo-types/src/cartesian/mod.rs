//! Types and functions on geometries in cartesian coordinates.

mod impls;
mod orient;
mod ray_crossing;
mod rect;
mod traits;

pub use impls::Coord;
pub use orient::Orientation;
pub use ray_crossing::{ring_location, RayCrossingCounter};
pub use rect::Rect;
pub use traits::*;
