use crate::cartesian::ray_crossing::RayCrossingCounter;
use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::contour::{ClosedContour, Contour};
use crate::Location;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Area and orientation of rings in cartesian coordinates. This trait is auto-implemented for all closed contours.
pub trait CartesianClosedContour {
    /// Type of the points of the contour.
    type Point: CartesianPoint2d;

    /// Signed area of the contour. The area is positive for counterclockwise contours.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num
    where
        Self: Sized;

    /// Winding direction of the contour. Degenerate contours with zero area are reported as clockwise.
    fn winding(&self) -> Winding
    where
        Self: Sized,
    {
        let zero: <Self::Point as CartesianPoint2d>::Num = Zero::zero();
        if self.area_signed() <= zero {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Location of the point relative to the area enclosed by the contour.
    fn locate_point<P>(&self, point: &P) -> Location
    where
        Self: Sized,
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num
    where
        Self: Sized,
    {
        let twice_area = self.iter_segments().fold(P::Num::zero(), |area, segment| {
            area + segment.0.x() * segment.1.y() - segment.1.x() * segment.0.y()
        });

        twice_area / (P::Num::one() + P::Num::one())
    }

    fn locate_point<Other>(&self, point: &Other) -> Location
    where
        Self: Sized,
        Other: CartesianPoint2d<Num = P::Num>,
    {
        let mut counter = RayCrossingCounter::new(point);
        for segment in self.iter_segments() {
            counter.count_segment(segment.0, segment.1);
        }

        counter.location()
    }
}

/// Direction in which the points of a ring go around its interior.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

impl Winding {
    /// The opposite winding.
    pub fn reverse(&self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Coord;
    use crate::impls;

    #[test]
    fn area_and_winding() {
        let cw = impls::ClosedContour::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 0.0),
        ]);
        assert_eq!(cw.area_signed(), -0.5);
        assert_eq!(cw.winding(), Winding::Clockwise);

        let ccw = impls::ClosedContour::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(0.0, 1.0),
        ]);
        assert_eq!(ccw.area_signed(), 0.5);
        assert_eq!(ccw.winding(), Winding::CounterClockwise);
        assert_eq!(ccw.winding().reverse(), Winding::Clockwise);
    }

    #[test]
    fn locate_point() {
        let triangle = impls::ClosedContour::new(vec![
            Coord::new(0.0, 0.0),
            Coord::new(4.0, 0.0),
            Coord::new(0.0, 4.0),
        ]);
        assert_eq!(triangle.locate_point(&Coord::new(1.0, 1.0)), Location::Interior);
        assert_eq!(triangle.locate_point(&Coord::new(2.0, 2.0)), Location::Boundary);
        assert_eq!(triangle.locate_point(&Coord::new(3.0, 3.0)), Location::Exterior);
    }
}
