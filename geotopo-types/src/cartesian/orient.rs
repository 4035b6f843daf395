use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise (right turn).
    Clockwise,
    /// Counterclockwise (left turn).
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of the turn `p -> q -> r`.
    ///
    /// Coordinates that cannot be compared (NaN) are reported as collinear.
    pub fn triplet<Num: num_traits::Num + PartialOrd>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        match (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y()) {
            v if v > Num::zero() => Self::Clockwise,
            v if v < Num::zero() => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }

    /// Orientation of the same points visited in reverse order.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
            Self::Collinear => Self::Collinear,
        }
    }

    /// Signed index of the orientation: `1` for counterclockwise, `-1` for clockwise and `0` for collinear.
    pub fn index(&self) -> i32 {
        match self {
            Self::Clockwise => -1,
            Self::Counterclockwise => 1,
            Self::Collinear => 0,
        }
    }
}
