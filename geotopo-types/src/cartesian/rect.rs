use crate::cartesian::traits::CartesianPoint2d;
use nalgebra::Scalar;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle, used as the envelope of segments, edges and rings.
///
/// All predicates treat the rectangle as closed: points and rectangles touching its border are inside it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar + FromPrimitive> Rect<N> {
    /// Creates a rectangle with the given corners, in any order.
    pub fn new(x1: N, y1: N, x2: N, y2: N) -> Self {
        let (x_min, x_max) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y_min, y_max) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Zero-size rectangle at the point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self::new(p.x(), p.y(), p.x(), p.y())
    }

    /// Envelope of the points. Returns `None` for an empty iterator.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |rect, p| rect.including(p)))
    }

    fn including(self, p: &impl CartesianPoint2d<Num = N>) -> Self {
        let pick = |keep_current: bool, current: N, new: N| if keep_current { current } else { new };
        Self {
            x_min: pick(self.x_min <= p.x(), self.x_min, p.x()),
            y_min: pick(self.y_min <= p.y(), self.y_min, p.y()),
            x_max: pick(self.x_max >= p.x(), self.x_max, p.x()),
            y_max: pick(self.y_max >= p.y(), self.y_max, p.y()),
        }
    }

    /// Minimum x.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Lower left corner as an `[x, y]` array.
    pub fn min_corner(&self) -> [N; 2] {
        [self.x_min, self.y_min]
    }

    /// Upper right corner as an `[x, y]` array.
    pub fn max_corner(&self) -> [N; 2] {
        [self.x_max, self.y_max]
    }

    /// Rectangle grown by `amount` to every side. Used to widen search envelopes by a snapping tolerance.
    pub fn expand(&self, amount: N) -> Self {
        Self {
            x_min: self.x_min - amount,
            x_max: self.x_max + amount,
            y_min: self.y_min - amount,
            y_max: self.y_max + amount,
        }
    }

    /// Smallest rectangle containing both rectangles.
    pub fn merge(&self, other: &Self) -> Self {
        let min = |a: N, b: N| if a <= b { a } else { b };
        let max = |a: N, b: N| if a >= b { a } else { b };
        Self {
            x_min: min(self.x_min, other.x_min),
            y_min: min(self.y_min, other.y_min),
            x_max: max(self.x_max, other.x_max),
            y_max: max(self.y_max, other.y_max),
        }
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        (self.x_min..=self.x_max).contains(&point.x()) && (self.y_min..=self.y_max).contains(&point.y())
    }

    /// Returns true if `other` lies inside `self`.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && other.x_max <= self.x_max
            && self.y_min <= other.y_min
            && other.y_max <= self.y_max
    }

    /// Returns true if the rectangles have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Coord;

    #[test]
    fn corners_are_normalized() {
        let rect = Rect::new(2.0, 3.0, 0.0, 1.0);
        assert_eq!(rect.min_corner(), [0.0, 1.0]);
        assert_eq!(rect.max_corner(), [2.0, 3.0]);
    }

    #[test]
    fn touching_rectangles_intersect() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(rect.intersects(&Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(rect.intersects(&Rect::new(0.2, 0.2, 0.3, 0.3)));
        assert!(!rect.intersects(&Rect::new(1.1, 0.0, 2.0, 1.0)));
        assert!(rect.expand(0.1).intersects(&Rect::new(1.1, 0.0, 2.0, 1.0)));
        assert!(rect.expand(0.1).contains_rect(&rect));
        assert!(!rect.contains_rect(&rect.expand(0.1)));
    }

    #[test]
    fn merge() {
        let merged = Rect::new(0.0, 0.0, 1.0, 1.0).merge(&Rect::new(2.0, -1.0, 3.0, 0.0));
        assert_eq!(merged, Rect::new(0.0, -1.0, 3.0, 1.0));
    }

    #[test]
    fn envelope_of_points() {
        let points = [
            Coord::new(1.0, 5.0),
            Coord::new(-1.0, 2.0),
            Coord::new(3.0, 0.0),
        ];
        let rect = Rect::from_points(points.iter()).expect("not empty");
        assert_eq!(rect, Rect::new(-1.0, 0.0, 3.0, 5.0));
        assert!(rect.contains(&Coord::new(3.0, 5.0)));
        assert!(!rect.contains(&Coord::new(3.1, 5.0)));
        assert!(Rect::from_points(std::iter::empty::<&Coord>()).is_none());
    }
}
