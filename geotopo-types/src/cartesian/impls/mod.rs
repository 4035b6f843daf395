mod coord;

pub use coord::Coord;
