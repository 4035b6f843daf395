use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::cartesian::traits::contour::CartesianClosedContour;
use crate::contour::ClosedContour;
use crate::polygon::Polygon;
use crate::Location;

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all eligible types.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d;

    /// Location of the point relative to the polygon.
    ///
    /// Points on the outer contour or on any of the inner contours are on the boundary. Points inside an inner
    /// contour are outside of the polygon.
    fn locate_point<P>(&self, point: &P) -> Location
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>;

    /// Returns true if the `point` lies inside or on one of the polygon's sides.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as CartesianPoint2d>::Num>,
    {
        self.locate_point(point) != Location::Exterior
    }
}

impl<P, C, T> CartesianPolygon for T
where
    P: CartesianPoint2d,
    C: ClosedContour<Point = P>,
    T: Polygon<Contour = C>,
{
    type Point = P;

    fn locate_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> Location {
        match self.outer_contour().locate_point(point) {
            Location::Interior => {}
            location => return location,
        }

        for hole in self.inner_contours() {
            match hole.locate_point(point) {
                Location::Interior => return Location::Exterior,
                Location::Boundary => return Location::Boundary,
                Location::Exterior => {}
            }
        }

        Location::Interior
    }
}
