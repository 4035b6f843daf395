use geo_types::{coord, CoordNum};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive};

use crate::cartesian::{CartesianPoint2d, Coord, NewCartesianPoint2d};

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for geo_types::Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<T> for geo_types::Coord<T> {
    fn new(x: T, y: T) -> Self {
        coord!(x: x, y: y)
    }
}

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        coord!(x: value.x(), y: value.y())
    }
}

impl From<geo_types::Point<f64>> for Coord {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::CartesianPoint2dFloat;

    #[test]
    fn geo_types_coord_is_a_point() {
        let a = coord!(x: 0.0, y: 0.0);
        let b = coord!(x: 3.0, y: 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(Coord::from(b), Coord::new(3.0, 4.0));
        assert_eq!(geo_types::Coord::from(Coord::new(1.0, 2.0)), coord!(x: 1.0, y: 2.0));
    }
}
