//! Convex hull of a point set.

use std::cmp::Ordering;

use geotopo_types::cartesian::{ring_location, CartesianPoint2d, Coord, Orientation};
use geotopo_types::impls::{ClosedContour, Contour, Polygon};
use geotopo_types::{Geom, Location};

use crate::config::HullOptions;

/// Convex hull computed with the Graham scan.
///
/// Large inputs are first reduced to the points lying outside the octagon spanned by the extreme points in the
/// axis and diagonal directions, since points inside it cannot be hull vertices.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Coord>,
    options: HullOptions,
}

impl ConvexHull {
    /// Creates a hull computation with default options. Repeated points are ignored.
    pub fn new(points: impl IntoIterator<Item = Coord>) -> Self {
        Self::with_options(points, HullOptions::default())
    }

    /// Creates a hull computation with the given options.
    pub fn with_options(points: impl IntoIterator<Item = Coord>, options: HullOptions) -> Self {
        let mut points: Vec<Coord> = points.into_iter().collect();
        points.sort_by(Coord::compare_xy);
        points.dedup();

        Self { points, options }
    }

    /// Creates a hull computation over all vertices of the geometry.
    pub fn from_geom(geom: &Geom<Coord>) -> Self {
        Self::new(geom.iter_points().copied())
    }

    /// Computes the hull.
    ///
    /// The result is an empty geometry for no points, a point for one point, a two-point line when all points are
    /// collinear, and otherwise a polygon with a counter-clockwise outer contour starting at the lowest (then leftmost)
    /// point.
    pub fn hull(&self) -> Geom<Coord> {
        let vertices = self.vertices();
        match vertices.len() {
            0 => Geom::empty(),
            1 => Geom::Point(vertices[0]),
            2 => Geom::Contour(Contour::open(vertices)),
            _ => Geom::Polygon(Polygon::new(ClosedContour::new(vertices), vec![])),
        }
    }

    /// Vertices of the hull in counter-clockwise order, without repeating the first one.
    pub(crate) fn vertices(&self) -> Vec<Coord> {
        if self.points.len() < 3 {
            return self.points.clone();
        }

        let mut points = if self.points.len() > self.options.reduction_threshold {
            reduce(&self.points)
        } else {
            self.points.clone()
        };

        if points.len() < 3 {
            log::warn!(
                "Only {} points left after hull reduction, padding with the first point",
                points.len()
            );
            pad_to_three(&mut points);
        }

        let Some(origin_pos) = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.y().total_cmp(&b.y()).then_with(|| a.x().total_cmp(&b.x())))
            .map(|(i, _)| i)
        else {
            return vec![];
        };
        points.swap(0, origin_pos);

        let origin = points[0];
        points[1..].sort_by(|a, b| polar_compare(&origin, a, b));

        let ring = graham_scan(&points);
        clean_ring(ring)
    }
}

/// Orders points by the angle around the origin, closer points first when the angle is the same.
///
/// The origin is the lowest point, so the angle is ordered by the negated cotangent, with points level with the origin
/// first. Keys are compared with `total_cmp`, which keeps the order total for nearly collinear points where the
/// orientation determinant is not transitive. Exactly collinear points get equal keys since division is correctly
/// rounded.
fn polar_compare(origin: &Coord, a: &Coord, b: &Coord) -> Ordering {
    let angle_key = |p: &Coord| {
        let dy = p.y() - origin.y();
        if dy == 0.0 {
            f64::NEG_INFINITY
        } else {
            -(p.x() - origin.x()) / dy
        }
    };

    angle_key(a)
        .total_cmp(&angle_key(b))
        .then_with(|| origin.distance_sq(a).total_cmp(&origin.distance_sq(b)))
}

/// Expects the origin at position 0 and the rest of the points sorted by [`polar_compare`].
fn graham_scan(points: &[Coord]) -> Vec<Coord> {
    let mut stack: Vec<Coord> = Vec::with_capacity(points.len());
    for &point in points {
        if stack.last() == Some(&point) {
            continue;
        }

        while stack.len() >= 2
            && Orientation::triplet(&stack[stack.len() - 2], &stack[stack.len() - 1], &point)
                != Orientation::Counterclockwise
        {
            stack.pop();
        }
        stack.push(point);
    }

    stack
}

/// Removes repeated vertices and the vertices lying on the straight line between their neighbours.
fn clean_ring(ring: Vec<Coord>) -> Vec<Coord> {
    let mut ring = ring;
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() < 3 {
        return ring;
    }

    let mut cleaned = Vec::with_capacity(ring.len());
    let n = ring.len();
    for i in 0..n {
        let prev = cleaned.last().copied().unwrap_or(ring[(i + n - 1) % n]);
        let current = ring[i];
        let next = ring[(i + 1) % n];
        if !is_between(&prev, &current, &next) {
            cleaned.push(current);
        }
    }

    cleaned
}

fn is_between(prev: &Coord, point: &Coord, next: &Coord) -> bool {
    if Orientation::triplet(prev, point, next) != Orientation::Collinear {
        return false;
    }

    let within = |a: f64, b: f64, v: f64| (a <= v && v <= b) || (b <= v && v <= a);
    if prev.x() != next.x() {
        within(prev.x(), next.x(), point.x())
    } else {
        within(prev.y(), next.y(), point.y())
    }
}

/// Keeps the points outside of the octagon spanned by the extreme points, plus the octagon vertices.
fn reduce(points: &[Coord]) -> Vec<Coord> {
    let octagon = octagon_ring(points);
    if octagon.len() < 4 {
        return points.to_vec();
    }

    let mut reduced: Vec<Coord> = octagon[..octagon.len() - 1].to_vec();
    reduced.extend(
        points
            .iter()
            .filter(|p| ring_location(*p, &octagon) == Location::Exterior)
            .copied(),
    );
    reduced.sort_by(Coord::compare_xy);
    reduced.dedup();

    log::debug!("Reduced {} hull candidates to {}", points.len(), reduced.len());
    reduced
}

/// Closed ring of the extreme points in the 8 axis and diagonal directions, or an empty vector if it has less than 3
/// distinct vertices.
fn octagon_ring(points: &[Coord]) -> Vec<Coord> {
    let mut extremes = [points[0]; 8];
    for &p in points {
        if p.x() < extremes[0].x() {
            extremes[0] = p;
        }
        if p.x() - p.y() < extremes[1].x() - extremes[1].y() {
            extremes[1] = p;
        }
        if p.y() > extremes[2].y() {
            extremes[2] = p;
        }
        if p.x() + p.y() > extremes[3].x() + extremes[3].y() {
            extremes[3] = p;
        }
        if p.x() > extremes[4].x() {
            extremes[4] = p;
        }
        if p.x() - p.y() > extremes[5].x() - extremes[5].y() {
            extremes[5] = p;
        }
        if p.y() < extremes[6].y() {
            extremes[6] = p;
        }
        if p.x() + p.y() < extremes[7].x() + extremes[7].y() {
            extremes[7] = p;
        }
    }

    let mut ring = extremes.to_vec();
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() < 3 {
        return vec![];
    }

    ring.push(ring[0]);
    ring
}

fn pad_to_three(points: &mut Vec<Coord>) {
    let Some(&first) = points.first() else {
        return;
    };
    while points.len() < 3 {
        points.push(first);
    }
}
