use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d};

/// A coordinate in 2d cartesian space with an optional `z` ordinate.
///
/// Equality and hashing only consider `x` and `y`: two coordinates with the same planar position but different
/// elevations are the same node of a planar graph. `-0.0` and `0.0` are considered equal.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Coord {
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

impl Coord {
    /// Creates a new 2d coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a new coordinate with the `z` ordinate.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Creates a new coordinate from any cartesian point.
    pub fn from_point(point: &impl CartesianPoint2d<Num = f64>) -> Self {
        Self::new(point.x(), point.y())
    }

    /// X ordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y ordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z ordinate, if the coordinate has one.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Returns the same planar position with the given `z` ordinate.
    pub fn with_z(self, z: Option<f64>) -> Self {
        Self { z, ..self }
    }

    /// Total order by `x`, then by `y`.
    pub fn compare_xy(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Returns true if the distance between the coordinates does not exceed `tolerance`.
    pub fn equals_within(&self, other: &Self, tolerance: f64) -> bool {
        if tolerance <= 0.0 {
            return self == other;
        }

        self.distance(other) <= tolerance
    }

    /// Point in the middle between two coordinates.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Coord {}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.z {
            Some(z) => write!(f, "({} {} {})", self.x, self.y, z),
            None => write!(f, "({} {})", self.x, self.y),
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Sub<Coord> for Coord {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Coord) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add<Vector2<f64>> for Coord {
    type Output = Coord;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z,
        }
    }
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl CartesianPoint2d for Coord {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl NewCartesianPoint2d for Coord {
    fn new(x: f64, y: f64) -> Self {
        Coord::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_z() {
        assert_eq!(Coord::new(1.0, 2.0), Coord::new_3d(1.0, 2.0, 10.0));
        assert_ne!(Coord::new(1.0, 2.0), Coord::new(2.0, 1.0));
    }

    #[test]
    fn negative_zero_hashes_as_zero() {
        let mut set = HashSet::new();
        set.insert(Coord::new(0.0, 1.0));
        assert!(set.contains(&Coord::new(-0.0, 1.0)));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(5.0, 5.5).to_string(), "(5 5.5)");
        assert_eq!(Coord::new_3d(1.0, 2.0, 3.0).to_string(), "(1 2 3)");
    }

    #[test]
    fn equals_within() {
        let a = Coord::new(0.0, 0.0);
        assert!(a.equals_within(&Coord::new(0.5, 0.0), 0.5));
        assert!(!a.equals_within(&Coord::new(0.5, 0.1), 0.5));
        assert!(!a.equals_within(&Coord::new(0.5, 0.0), 0.0));
    }

    #[test]
    fn compare_xy() {
        let mut coords = vec![
            Coord::new(1.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(0.0, 0.0),
        ];
        coords.sort_by(Coord::compare_xy);
        assert_eq!(
            coords,
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(0.0, 1.0),
                Coord::new(1.0, 0.0)
            ]
        );
    }
}
