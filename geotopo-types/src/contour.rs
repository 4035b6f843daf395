//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A line that is checked for
//!   self-intersections is an open contour.
//! * **closed** - the first and the last points of the contour are connected. Rings of polygons are closed contours.
//!
//! Both open and closed contours are represented by the [`Contour`] trait, but there is also a separate
//! [`ClosedContour`] trait for situations when only a closed contour makes sense. All closed contours implement the
//! `Contour` trait automatically.
//!
//! # Contour vs OGC LineString
//!
//! An OGC `LineString` is considered to be closed when its first and last points are exactly the same. A `Contour`
//! does not duplicate the first point at the end; the closing segment of closed contours is produced by
//! [`Contour::iter_points_closing`] and [`Contour::iter_segments`] instead.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour, without repeating the first point for closed contours.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        let closing = if self.is_closed() {
            self.iter_points().next()
        } else {
            None
        };

        self.iter_points().chain(closing)
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        let mut points = self.iter_points_closing();
        let first = points.next();
        points.scan(first, |prev, point| {
            let start = prev.replace(point)?;
            Some(Segment(start, point))
        })
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour. The first point is not repeated at the end.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}
