//! Straight line segments and their intersections.

use crate::cartesian::{CartesianPoint2d, CartesianPoint2dFloat, Coord, Orientation, Rect};
use num_traits::{One, Zero};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments have no common points.
    None,
    /// The segments have exactly one common point.
    Point(Coord),
    /// The segments are collinear and overlap. The overlap endpoints are ordered along the first segment.
    Overlap(Coord, Coord),
}

impl SegmentIntersection {
    /// Returns true if the segments do not intersect.
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }

    /// Intersection points: none, the single point, or both overlap endpoints.
    pub fn points(&self) -> Vec<Coord> {
        match *self {
            SegmentIntersection::None => vec![],
            SegmentIntersection::Point(p) => vec![p],
            SegmentIntersection::Overlap(a, b) => vec![a, b],
        }
    }
}

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the smaller one
    ///   of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Point,
    ) -> P::Num {
        if self.0.equal(self.1) {
            return self.0.distance_sq(point);
        }

        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let ds_len = ds.x * ds.x + ds.y * ds.y;

        let r = (dp.x * ds.x + dp.y * ds.y) / ds_len;
        if r <= P::Num::zero() {
            self.0.distance_sq(point)
        } else if r >= P::Num::one() {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Bounding box of the segment.
    pub fn envelope(&self) -> Rect<P::Num> {
        Rect::new(self.0.x(), self.0.y(), self.1.x(), self.1.y())
    }

    /// Returns true if the point is exactly equal to one of the endpoints of the segment.
    pub fn is_endpoint(&self, point: &impl CartesianPoint2d<Num = P::Num>) -> bool {
        point.equal(self.0) || point.equal(self.1)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, self.1, other.0);
        let o2 = Orientation::triplet(self.0, self.1, other.1);
        let o3 = Orientation::triplet(other.0, other.1, self.0);
        let o4 = Orientation::triplet(other.0, other.1, self.1);

        if o1 != o2
            && o3 != o4
            && o1 != Orientation::Collinear
            && o2 != Orientation::Collinear
            && o3 != Orientation::Collinear
            && o4 != Orientation::Collinear
        {
            return true;
        }

        let self_env = self.envelope();
        let other_env = other.envelope();

        (o1 == Orientation::Collinear && self_env.contains(other.0))
            || (o2 == Orientation::Collinear && self_env.contains(other.1))
            || (o3 == Orientation::Collinear && other_env.contains(self.0))
            || (o4 == Orientation::Collinear && other_env.contains(self.1))
    }
}

impl<'a, P: CartesianPoint2d<Num = f64>> Segment<'a, P> {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }

    /// Returns true if the point lies on the segment within `tolerance` but is not within `tolerance` of either of its
    /// endpoints.
    pub fn touches_interior(&self, point: &impl CartesianPoint2d<Num = f64>, tolerance: f64) -> bool {
        let tolerance_sq = tolerance * tolerance;
        self.distance_to_point_sq(point) <= tolerance_sq
            && self.0.distance_sq(point) > tolerance_sq
            && self.1.distance_sq(point) > tolerance_sq
    }

    /// Computes the intersection of two segments.
    ///
    /// When an endpoint of one segment lies on the other segment, that endpoint is returned exactly. A proper crossing
    /// point is computed in floating point and is kept inside the common envelope of the segments.
    pub fn intersection<Other: CartesianPoint2d<Num = f64>>(
        &self,
        other: &Segment<Other>,
    ) -> SegmentIntersection {
        let p1 = Coord::from_point(self.0);
        let p2 = Coord::from_point(self.1);
        let q1 = Coord::from_point(other.0);
        let q2 = Coord::from_point(other.1);

        let p_env = self.envelope();
        let q_env = other.envelope();
        if !p_env.intersects(&q_env) {
            return SegmentIntersection::None;
        }

        let o1 = Orientation::triplet(&p1, &p2, &q1);
        let o2 = Orientation::triplet(&p1, &p2, &q2);
        if o1 == o2 && o1 != Orientation::Collinear {
            return SegmentIntersection::None;
        }

        let o3 = Orientation::triplet(&q1, &q2, &p1);
        let o4 = Orientation::triplet(&q1, &q2, &p2);
        if o3 == o4 && o3 != Orientation::Collinear {
            return SegmentIntersection::None;
        }

        let collinear = Orientation::Collinear;
        if o1 == collinear && o2 == collinear && o3 == collinear && o4 == collinear {
            return collinear_intersection(p1, p2, q1, q2, &p_env, &q_env);
        }

        if p1 == q1 || p1 == q2 {
            return SegmentIntersection::Point(p1);
        }
        if p2 == q1 || p2 == q2 {
            return SegmentIntersection::Point(p2);
        }
        if o1 == collinear {
            return SegmentIntersection::Point(q1);
        }
        if o2 == collinear {
            return SegmentIntersection::Point(q2);
        }
        if o3 == collinear {
            return SegmentIntersection::Point(p1);
        }
        if o4 == collinear {
            return SegmentIntersection::Point(p2);
        }

        SegmentIntersection::Point(proper_intersection(p1, p2, q1, q2, &p_env, &q_env))
    }
}

fn collinear_intersection(
    p1: Coord,
    p2: Coord,
    q1: Coord,
    q2: Coord,
    p_env: &Rect,
    q_env: &Rect,
) -> SegmentIntersection {
    let mut points: Vec<Coord> = Vec::with_capacity(4);
    for candidate in [(p1, q_env), (p2, q_env), (q1, p_env), (q2, p_env)] {
        let (point, env) = candidate;
        if env.contains(&point) && !points.contains(&point) {
            points.push(point);
        }
    }

    match points.len() {
        0 => SegmentIntersection::None,
        1 => SegmentIntersection::Point(points[0]),
        _ => {
            points.sort_by(|a, b| p1.distance_sq(a).total_cmp(&p1.distance_sq(b)));
            SegmentIntersection::Overlap(points[0], points[points.len() - 1])
        }
    }
}

fn proper_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord, p_env: &Rect, q_env: &Rect) -> Coord {
    let dp = p2 - p1;
    let dq = q2 - q1;
    let denom = dp.x * dq.y - dp.y * dq.x;
    let t = ((q1.x() - p1.x()) * dq.y - (q1.y() - p1.y()) * dq.x) / denom;
    let point = Coord::new(p1.x() + t * dp.x, p1.y() + t * dp.y);

    if p_env.contains(&point) && q_env.contains(&point) && point.x().is_finite() && point.y().is_finite() {
        return point;
    }

    // Rounding pushed the point out of the segments: fall back to the endpoint closest to the other segment.
    let candidates = [
        (p1, Segment(&q1, &q2).distance_to_point_sq(&p1)),
        (p2, Segment(&q1, &q2).distance_to_point_sq(&p2)),
        (q1, Segment(&p1, &p2).distance_to_point_sq(&q1)),
        (q2, Segment(&p1, &p2).distance_to_point_sq(&q2)),
    ];
    candidates
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
        .unwrap_or(p1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn distance_to_point() {
        let (a, b) = (c(0.0, 0.0), c(10.0, 0.0));
        let segment = Segment(&a, &b);
        assert_eq!(segment.distance_to_point_sq(&c(5.0, 3.0)), 9.0);
        assert_eq!(segment.distance_to_point_sq(&c(-3.0, 4.0)), 25.0);
        assert_eq!(segment.distance_to_point_sq(&c(13.0, 4.0)), 25.0);
    }

    #[test]
    fn crossing_segments() {
        let points = [c(0.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(10.0, 0.0)];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[2], &points[3]);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), SegmentIntersection::Point(c(5.0, 5.0)));
    }

    #[test]
    fn disjoint_segments() {
        let points = [c(0.0, 0.0), c(10.0, 0.0), c(0.0, 1.0), c(10.0, 1.0)];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[2], &points[3]);
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());

        let points = [c(0.0, 0.0), c(1.0, 1.0), c(2.0, 0.0), c(1.5, 1.0)];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[2], &points[3]);
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn shared_endpoint() {
        let points = [c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0)];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[1], &points[2]);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), SegmentIntersection::Point(c(10.0, 0.0)));
    }

    #[test]
    fn endpoint_touches_interior() {
        let points = [c(0.0, 0.0), c(10.0, 0.0), c(10.0, 5.0), c(5.0, 0.0)];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[2], &points[3]);
        assert_eq!(a.intersection(&b), SegmentIntersection::Point(c(5.0, 0.0)));
        assert!(a.touches_interior(&c(5.0, 0.0), 0.0));
        assert!(!a.touches_interior(&c(10.0, 0.0), 0.0));
        assert!(!a.touches_interior(&c(5.0, 1.0), 0.5));
        assert!(a.touches_interior(&c(5.0, 1.0), 1.0));
    }

    #[test]
    fn collinear_overlap() {
        let points = [
            c(0.0, 0.0),
            c(10.0, 0.0),
            c(15.0, 0.0),
            c(5.0, 0.0),
            c(20.0, 0.0),
            c(11.0, 0.0),
        ];
        let a = Segment(&points[0], &points[1]);
        let b = Segment(&points[2], &points[3]);
        assert_eq!(
            a.intersection(&b),
            SegmentIntersection::Overlap(c(5.0, 0.0), c(10.0, 0.0))
        );
        assert!(a.intersects(&b));

        let touching = Segment(&points[1], &points[4]);
        assert_matches!(a.intersection(&touching), SegmentIntersection::Point(p) if p == c(10.0, 0.0));

        let apart = Segment(&points[5], &points[4]);
        assert!(a.intersection(&apart).is_none());
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn intersection_points() {
        assert_eq!(SegmentIntersection::None.points(), vec![]);
        assert_eq!(
            SegmentIntersection::Overlap(c(0.0, 0.0), c(1.0, 0.0)).points(),
            vec![c(0.0, 0.0), c(1.0, 0.0)]
        );
    }
}
