use crate::cartesian::{CartesianPoint2d, Rect};
use crate::impls::{Contour, MultiPoint, Polygon};
use crate::polygon::Polygon as _;

/// A geometry of any supported type.
///
/// This is the input and output type of the algorithms that accept or produce geometries of different dimensions,
/// e.g. a convex hull of a set of points can be a point, a line or a polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Set of points. An empty set represents an empty geometry.
    MultiPoint(MultiPoint<P>),
    /// Open or closed line.
    Contour(Contour<P>),
    /// Polygon with holes.
    Polygon(Polygon<P>),
}

impl<P> Geom<P> {
    /// Empty geometry.
    pub fn empty() -> Self {
        Self::MultiPoint(MultiPoint::from(vec![]))
    }

    /// Returns true if the geometry has no points.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) => false,
            Geom::MultiPoint(v) => v.is_empty(),
            Geom::Contour(v) => v.is_empty(),
            Geom::Polygon(v) => v.is_empty(),
        }
    }

    /// Iterates over all vertices of the geometry. Polygon vertices are returned contour by contour, starting with
    /// the outer one.
    pub fn iter_points(&self) -> Box<dyn Iterator<Item = &'_ P> + '_> {
        match self {
            Geom::Point(v) => Box::new(std::iter::once(v)),
            Geom::MultiPoint(v) => Box::new(v.iter_points()),
            Geom::Contour(v) => Box::new(v.points().iter()),
            Geom::Polygon(v) => Box::new(v.iter_contours().flat_map(|c| c.points.iter())),
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Bounding rectangle of the geometry, or `None` for an empty geometry.
    pub fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.iter_points())
    }
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Coord;
    use crate::impls::ClosedContour;

    #[test]
    fn iter_points_of_polygon() {
        let polygon = Polygon::new(
            ClosedContour::new(vec![
                Coord::new(0.0, 0.0),
                Coord::new(10.0, 0.0),
                Coord::new(0.0, 10.0),
            ]),
            vec![ClosedContour::new(vec![
                Coord::new(1.0, 1.0),
                Coord::new(1.0, 2.0),
                Coord::new(2.0, 1.0),
            ])],
        );
        let geom = Geom::<Coord>::from(polygon);
        assert_eq!(geom.iter_points().count(), 6);
        if let Geom::Polygon(polygon) = &geom {
            assert_eq!(polygon.vertex_count(), 6);
        }

        let rect = geom.bounding_rectangle().expect("not empty");
        assert_eq!(rect, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn empty_geometry() {
        let geom: Geom<Coord> = Geom::empty();
        assert!(geom.is_empty());
        assert!(geom.bounding_rectangle().is_none());
        assert!(!Geom::Point(Coord::new(1.0, 1.0)).is_empty());
    }
}
