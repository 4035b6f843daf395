//! Implementations of geometry traits.

mod contour;
mod multi_point;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use multi_point::MultiPoint;
pub use polygon::Polygon;
