//! Smallest circle enclosing a geometry.

use std::f64::consts::FRAC_PI_2;

use geotopo_types::cartesian::{CartesianPoint2d, CartesianPoint2dFloat, Coord};
use geotopo_types::impls::{ClosedContour, Contour, Polygon};
use geotopo_types::Geom;
use nalgebra::Vector2;

use crate::hull::ConvexHull;

/// Minimum bounding circle of a set of points.
///
/// The circle is defined by one, two or three *extremal points* lying on it. It is computed over the vertices of the
/// convex hull of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumBoundingCircle {
    extremal_points: Vec<Coord>,
    center: Option<Coord>,
    radius: f64,
}

impl MinimumBoundingCircle {
    /// Computes the circle enclosing all vertices of the geometry.
    pub fn new(geom: &Geom<Coord>) -> Self {
        Self::from_hull(ConvexHull::from_geom(geom))
    }

    /// Computes the circle enclosing the points.
    pub fn from_points(points: impl IntoIterator<Item = Coord>) -> Self {
        Self::from_hull(ConvexHull::new(points))
    }

    fn from_hull(hull: ConvexHull) -> Self {
        let extremal_points = extremal_points(&hull.vertices());
        let center = match extremal_points.as_slice() {
            [] => None,
            [p] => Some(*p),
            [p, q] => Some(p.midpoint(q)),
            [p, q, r, ..] => Some(circumcentre(p, q, r)),
        };
        let radius = match (center, extremal_points.first()) {
            (Some(center), Some(point)) => center.distance(point),
            _ => 0.0,
        };

        Self {
            extremal_points,
            center,
            radius,
        }
    }

    /// Center of the circle, or `None` if the input had no points.
    pub fn center(&self) -> Option<Coord> {
        self.center
    }

    /// Radius of the circle. Zero for empty and single point inputs.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Points of the input lying on the circle that define it.
    pub fn extremal_points(&self) -> &[Coord] {
        &self.extremal_points
    }

    /// Longest segment between the extremal points.
    ///
    /// It is a point if the input has a single distinct point and `None` if the input is empty.
    pub fn diameter(&self) -> Option<Geom<Coord>> {
        match self.extremal_points.as_slice() {
            [] => None,
            [p] => Some(Geom::Point(*p)),
            points => {
                let mut longest = (points[0], points[1]);
                for (i, a) in points.iter().enumerate() {
                    for b in &points[i + 1..] {
                        if a.distance_sq(b) > longest.0.distance_sq(&longest.1) {
                            longest = (*a, *b);
                        }
                    }
                }

                Some(Geom::Contour(Contour::open(vec![longest.0, longest.1])))
            }
        }
    }

    /// Approximates the circle with a counter-clockwise polygon with `4 * segments_per_quadrant` vertices.
    ///
    /// Returns `None` for a circle of zero radius.
    pub fn to_polygon(&self, segments_per_quadrant: usize) -> Option<Polygon<Coord>> {
        let center = self.center?;
        if self.radius <= 0.0 {
            return None;
        }

        let segments = 4 * segments_per_quadrant.max(1);
        let step = FRAC_PI_2 / segments_per_quadrant.max(1) as f64;
        let points = (0..segments)
            .map(|i| {
                let angle = step * i as f64;
                Coord::new(
                    center.x() + self.radius * angle.cos(),
                    center.y() + self.radius * angle.sin(),
                )
            })
            .collect();

        Some(Polygon::new(ClosedContour::new(points), vec![]))
    }
}

/// Points defining the circle, found by turning a chord of the hull until it or the triangle it forms with a third
/// hull vertex encloses all others.
fn extremal_points(hull: &[Coord]) -> Vec<Coord> {
    if hull.len() <= 2 {
        return hull.to_vec();
    }

    let mut p = lowest_point(hull);
    let mut q = point_with_min_angle_with_x(hull, &p);

    for _ in 0..hull.len() {
        let Some(r) = point_with_min_angle_with_segment(hull, &p, &q) else {
            return vec![p, q];
        };

        if is_obtuse(&p, &r, &q) {
            return vec![p, q];
        }
        if is_obtuse(&r, &p, &q) {
            p = r;
            continue;
        }
        if is_obtuse(&r, &q, &p) {
            q = r;
            continue;
        }

        return vec![p, q, r];
    }

    log::warn!("Bounding circle search did not converge, using the last chord at {p} - {q}");
    vec![p, q]
}

fn lowest_point(points: &[Coord]) -> Coord {
    let mut lowest = points[0];
    for p in &points[1..] {
        if p.y() < lowest.y() {
            lowest = *p;
        }
    }

    lowest
}

fn point_with_min_angle_with_x(points: &[Coord], origin: &Coord) -> Coord {
    let mut min_sin = f64::MAX;
    let mut min_point = points[0];
    for p in points {
        if p == origin {
            continue;
        }

        let v = p.sub(origin);
        let sin = v.y.abs() / v.norm();
        if sin < min_sin {
            min_sin = sin;
            min_point = *p;
        }
    }

    min_point
}

fn point_with_min_angle_with_segment(points: &[Coord], p: &Coord, q: &Coord) -> Option<Coord> {
    let mut min_angle = f64::MAX;
    let mut min_point = None;
    for r in points {
        if r == p || r == q {
            continue;
        }

        let angle = angle_between(p, r, q);
        if angle < min_angle {
            min_angle = angle;
            min_point = Some(*r);
        }
    }

    min_point
}

/// Unsigned angle at `vertex` between the directions to `a` and `b`.
fn angle_between(a: &Coord, vertex: &Coord, b: &Coord) -> f64 {
    let va: Vector2<f64> = *a - *vertex;
    let vb: Vector2<f64> = *b - *vertex;
    va.angle(&vb)
}

/// Returns true if the angle at `vertex` is greater than the right angle.
fn is_obtuse(a: &Coord, vertex: &Coord, b: &Coord) -> bool {
    let va: Vector2<f64> = *a - *vertex;
    let vb: Vector2<f64> = *b - *vertex;
    va.dot(&vb) < 0.0
}

/// Center of the circle going through three points.
fn circumcentre(a: &Coord, b: &Coord, c: &Coord) -> Coord {
    let ca: Vector2<f64> = *a - *c;
    let cb: Vector2<f64> = *b - *c;
    let denom = 2.0 * ca.perp(&cb);

    let a_sq = ca.norm_squared();
    let b_sq = cb.norm_squared();
    let num_x = ca.y * b_sq - cb.y * a_sq;
    let num_y = ca.x * b_sq - cb.x * a_sq;

    Coord::new(c.x() - num_x / denom, c.y() + num_y / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn circle(points: &[(f64, f64)]) -> MinimumBoundingCircle {
        MinimumBoundingCircle::from_points(points.iter().map(|&p| Coord::from(p)))
    }

    #[test]
    fn empty_input() {
        let circle = circle(&[]);
        assert_eq!(circle.center(), None);
        assert_eq!(circle.radius(), 0.0);
        assert!(circle.extremal_points().is_empty());
        assert_eq!(circle.diameter(), None);
        assert_eq!(circle.to_polygon(4), None);
    }

    #[test]
    fn single_point() {
        let circle = circle(&[(3.0, 4.0), (3.0, 4.0)]);
        assert_eq!(circle.center(), Some(Coord::new(3.0, 4.0)));
        assert_eq!(circle.radius(), 0.0);
        assert_eq!(circle.diameter(), Some(Geom::Point(Coord::new(3.0, 4.0))));
    }

    #[test]
    fn two_points() {
        let circle = circle(&[(0.0, 0.0), (6.0, 8.0)]);
        assert_eq!(circle.center(), Some(Coord::new(3.0, 4.0)));
        assert_relative_eq!(circle.radius(), 5.0);
        assert_eq!(circle.extremal_points().len(), 2);
    }

    #[test]
    fn square() {
        let circle = circle(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)]);
        let center = circle.center().expect("not empty");
        assert_relative_eq!(center.x(), 1.0);
        assert_relative_eq!(center.y(), 1.0);
        assert_relative_eq!(circle.radius(), 2.0f64.sqrt());
        assert_eq!(circle.extremal_points().len(), 3);

        let Some(Geom::Contour(diameter)) = circle.diameter() else {
            panic!("expected a line");
        };
        assert_relative_eq!(diameter[0].distance(&diameter[1]), 2.0 * 2.0f64.sqrt());
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        let circle = circle(&[(0.0, 0.0), (10.0, 0.0), (5.0, 1.0)]);
        assert_eq!(circle.center(), Some(Coord::new(5.0, 0.0)));
        assert_relative_eq!(circle.radius(), 5.0);
        assert_eq!(
            circle.extremal_points(),
            &[Coord::new(0.0, 0.0), Coord::new(10.0, 0.0)]
        );
    }

    #[test]
    fn from_geometry() {
        let geom = Geom::Contour(Contour::open(vec![
            Coord::new(0.0, 0.0),
            Coord::new(4.0, 0.0),
            Coord::new(2.0, 0.5),
        ]));
        let circle = MinimumBoundingCircle::new(&geom);
        assert_eq!(circle.center(), Some(Coord::new(2.0, 0.0)));
        assert_relative_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn polygon_approximation() {
        let circle = circle(&[(-1.0, 0.0), (1.0, 0.0)]);
        let polygon = circle.to_polygon(2).expect("non zero radius");
        let points = &polygon.outer_contour.points;
        assert_eq!(points.len(), 8);
        assert_relative_eq!(points[0].x(), 1.0);
        assert_relative_eq!(points[2].y(), 1.0);
        for point in points {
            assert_relative_eq!(point.distance(&Coord::new(0.0, 0.0)), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn circumcentre_of_right_triangle() {
        let center = circumcentre(
            &Coord::new(0.0, 0.0),
            &Coord::new(4.0, 0.0),
            &Coord::new(0.0, 2.0),
        );
        assert_relative_eq!(center.x(), 2.0);
        assert_relative_eq!(center.y(), 1.0);
    }

    proptest! {
        #[test]
        fn circle_covers_all_points(points in prop::collection::vec((-100i32..100, -100i32..100), 1..60)) {
            let points: Vec<Coord> = points
                .into_iter()
                .map(|(x, y)| Coord::new(x as f64, y as f64))
                .collect();
            let circle = MinimumBoundingCircle::from_points(points.clone());
            let center = circle.center().expect("not empty");
            let tolerance = 1e-7 * circle.radius().max(1.0);

            for point in circle.extremal_points() {
                prop_assert!((center.distance(point) - circle.radius()).abs() <= tolerance);
            }
            for point in &points {
                prop_assert!(center.distance(point) <= circle.radius() + tolerance);
            }
        }
    }
}
