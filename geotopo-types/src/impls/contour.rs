use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Open or closed sequence of points. Implements [`crate::Contour`].
///
/// Closed contours do not store the closing point: the segment from the last point back to the first one is implied.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Contour<P> {
    points: Vec<P>,
    is_closed: bool,
}

impl<P> Contour<P> {
    /// Creates a new contour.
    pub fn new(points: Vec<P>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Open contour through the points.
    pub fn open(points: Vec<P>) -> Self {
        Self::new(points, false)
    }

    /// Closed contour through the points. The first point must not be repeated at the end.
    pub fn closed(points: Vec<P>) -> Self {
        Self::new(points, true)
    }

    /// Points of the contour.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Whether the last point connects back to the first one.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Takes the points out of the contour.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P: PartialEq> Contour<P> {
    /// Creates a contour from a point list that repeats the first point at the end when the line is closed.
    ///
    /// A list of more than two points with equal ends becomes a closed contour without the repeated point, any
    /// other list becomes an open contour.
    pub fn from_line_points(mut points: Vec<P>) -> Self {
        if points.len() > 2 && points.first() == points.last() {
            points.pop();
            Self::closed(points)
        } else {
            Self::open(points)
        }
    }
}

impl<P> Index<usize> for Contour<P> {
    type Output = P;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

/// Ring of points. Implements [`crate::ClosedContour`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ClosedContour<P> {
    /// Points of the ring, without repeating the first one at the end.
    pub points: Vec<P>,
}

impl<P> ClosedContour<P> {
    /// Creates a new ring.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self::closed(value.points)
    }
}

impl<P> crate::contour::ClosedContour for ClosedContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

impl<P> crate::contour::Contour for Contour<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::Contour as _;

    #[test]
    fn line_points_with_equal_ends_are_closed() {
        let ring = Contour::from_line_points(vec![1, 2, 3, 1]);
        assert!(ring.is_closed());
        assert_eq!(ring.points(), &[1, 2, 3]);
        assert_eq!(ring.iter_points_closing().copied().collect::<Vec<_>>(), vec![1, 2, 3, 1]);

        let back_and_forth = Contour::from_line_points(vec![1, 1]);
        assert!(!back_and_forth.is_closed());
        assert_eq!(back_and_forth.len(), 2);
    }
}
