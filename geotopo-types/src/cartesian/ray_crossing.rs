use crate::cartesian::{CartesianPoint2d, Orientation};
use crate::Location;

/// Counts the crossings of a horizontal ray going from a point to positive infinity with the segments of a ring.
///
/// The segments of the ring can be supplied in any order, but all of them must be counted before the location is
/// requested. If the point lies exactly on one of the segments, the location is [`Location::Boundary`], otherwise it
/// is decided by the parity of the crossing number.
#[derive(Debug)]
pub struct RayCrossingCounter<'a, P> {
    point: &'a P,
    crossing_count: usize,
    is_on_segment: bool,
}

impl<'a, P: CartesianPoint2d> RayCrossingCounter<'a, P> {
    /// Creates a new counter for the given point.
    pub fn new(point: &'a P) -> Self {
        Self {
            point,
            crossing_count: 0,
            is_on_segment: false,
        }
    }

    /// Counts one segment of the ring.
    pub fn count_segment<Q: CartesianPoint2d<Num = P::Num>>(&mut self, p1: &Q, p2: &Q) {
        let p = self.point;

        if p1.x() < p.x() && p2.x() < p.x() {
            return;
        }

        if p.x() == p2.x() && p.y() == p2.y() {
            self.is_on_segment = true;
            return;
        }

        if p1.y() == p.y() && p2.y() == p.y() {
            let (x_min, x_max) = if p1.x() <= p2.x() {
                (p1.x(), p2.x())
            } else {
                (p2.x(), p1.x())
            };
            if p.x() >= x_min && p.x() <= x_max {
                self.is_on_segment = true;
            }
            return;
        }

        if (p1.y() > p.y() && p2.y() <= p.y()) || (p2.y() > p.y() && p1.y() <= p.y()) {
            let mut orientation = Orientation::triplet(p1, p2, p);
            if orientation == Orientation::Collinear {
                self.is_on_segment = true;
                return;
            }

            if p2.y() < p1.y() {
                orientation = orientation.reverse();
            }

            if orientation == Orientation::Counterclockwise {
                self.crossing_count += 1;
            }
        }
    }

    /// Returns true if the point was found to lie on one of the counted segments.
    pub fn is_on_segment(&self) -> bool {
        self.is_on_segment
    }

    /// Location of the point relative to the counted ring.
    pub fn location(&self) -> Location {
        if self.is_on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Location of the point relative to the ring given by its vertices.
///
/// The ring may or may not repeat its first vertex at the end; the closing segment is counted in both cases.
pub fn ring_location<P, Q>(point: &P, ring: &[Q]) -> Location
where
    P: CartesianPoint2d,
    Q: CartesianPoint2d<Num = P::Num>,
{
    let mut counter = RayCrossingCounter::new(point);
    for pair in ring.windows(2) {
        counter.count_segment(&pair[0], &pair[1]);
    }

    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if !first.equal(last) {
            counter.count_segment(last, first);
        }
    }

    counter.location()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Coord;

    fn square() -> Vec<Coord> {
        vec![
            Coord::new(0.0, 0.0),
            Coord::new(10.0, 0.0),
            Coord::new(10.0, 10.0),
            Coord::new(0.0, 10.0),
        ]
    }

    #[test]
    fn locates_points_in_open_ring() {
        let ring = square();
        assert_eq!(ring_location(&Coord::new(5.0, 5.0), &ring), Location::Interior);
        assert_eq!(ring_location(&Coord::new(15.0, 5.0), &ring), Location::Exterior);
        assert_eq!(ring_location(&Coord::new(-1.0, 5.0), &ring), Location::Exterior);
        assert_eq!(ring_location(&Coord::new(0.0, 5.0), &ring), Location::Boundary);
        assert_eq!(ring_location(&Coord::new(0.0, 0.0), &ring), Location::Boundary);
        assert_eq!(ring_location(&Coord::new(5.0, 10.0), &ring), Location::Boundary);
    }

    #[test]
    fn closed_and_open_rings_are_equivalent() {
        let open = square();
        let mut closed = open.clone();
        closed.push(open[0]);

        for p in [
            Coord::new(5.0, 5.0),
            Coord::new(0.0, 5.0),
            Coord::new(10.0, 10.0),
            Coord::new(11.0, 10.0),
        ] {
            assert_eq!(ring_location(&p, &open), ring_location(&p, &closed));
        }
    }

    #[test]
    fn ray_through_vertex() {
        let diamond = vec![
            Coord::new(0.0, 5.0),
            Coord::new(5.0, 0.0),
            Coord::new(10.0, 5.0),
            Coord::new(5.0, 10.0),
        ];
        assert_eq!(ring_location(&Coord::new(2.0, 5.0), &diamond), Location::Interior);
        assert_eq!(ring_location(&Coord::new(-2.0, 5.0), &diamond), Location::Exterior);
    }
}
