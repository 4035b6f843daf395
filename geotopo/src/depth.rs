//! Interior depth bookkeeping.

use std::fmt::{Display, Formatter};

use geotopo_types::Location;

use crate::label::Label;
use crate::position::Position;

const NULL_VALUE: i32 = -1;

/// Number of interior areas of each geometry a side of an edge lies in.
///
/// Depths are accumulated from labels with [`Depth::add_label`] and must be [normalized](Depth::normalize) before the
/// location of a side is derived from them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Depth {
    depth: [[i32; 3]; 2],
}

impl Default for Depth {
    fn default() -> Self {
        Self {
            depth: [[NULL_VALUE; 3]; 2],
        }
    }
}

impl Depth {
    /// Creates a depth with all values unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth contributed by a side with the given location: `0` for exterior, `1` for interior.
    pub fn depth_at_location(location: Location) -> Option<i32> {
        match location {
            Location::Exterior => Some(0),
            Location::Interior => Some(1),
            Location::Boundary => None,
        }
    }

    /// Depth value, or `None` if it is unknown.
    pub fn get(&self, geom: usize, position: Position) -> Option<i32> {
        let value = self.depth[geom][position.index()];
        (value != NULL_VALUE).then_some(value)
    }

    /// Sets the depth value.
    pub fn set(&mut self, geom: usize, position: Position, value: i32) {
        self.depth[geom][position.index()] = value;
    }

    /// Location derived from the depth: exterior for depths `<= 0`, interior otherwise.
    pub fn location(&self, geom: usize, position: Position) -> Location {
        if self.depth[geom][position.index()] <= 0 {
            Location::Exterior
        } else {
            Location::Interior
        }
    }

    /// Increments the depth if the location is interior.
    pub fn add(&mut self, geom: usize, position: Position, location: Location) {
        if location == Location::Interior {
            self.depth[geom][position.index()] += 1;
        }
    }

    /// Returns true if no depth is known.
    pub fn is_null(&self) -> bool {
        (0..2).all(|geom| self.is_null_for(geom))
    }

    /// Returns true if depths of the geometry are unknown.
    pub fn is_null_for(&self, geom: usize) -> bool {
        self.depth[geom][Position::Left.index()] == NULL_VALUE
    }

    /// Returns true if the depth at the position is unknown.
    pub fn is_null_at(&self, geom: usize, position: Position) -> bool {
        self.depth[geom][position.index()] == NULL_VALUE
    }

    /// Accumulates the side locations of the label.
    pub fn add_label(&mut self, label: &Label) {
        for geom in 0..2 {
            for position in [Position::Left, Position::Right] {
                let Some(location) = label.location(geom, position) else {
                    continue;
                };
                let Some(delta) = Self::depth_at_location(location) else {
                    continue;
                };

                let value = &mut self.depth[geom][position.index()];
                if *value == NULL_VALUE {
                    *value = delta;
                } else {
                    *value += delta;
                }
            }
        }
    }

    /// Depth change when crossing the edge from left to right.
    pub fn delta(&self, geom: usize) -> i32 {
        self.depth[geom][Position::Right.index()] - self.depth[geom][Position::Left.index()]
    }

    /// Reduces the side depths of every known geometry to `0` or `1`.
    ///
    /// The smaller of the two side depths (but not less than zero) becomes `0`, a larger one becomes `1`.
    pub fn normalize(&mut self) {
        for geom in 0..2 {
            if self.is_null_for(geom) {
                continue;
            }

            let sides = &mut self.depth[geom];
            let min_depth = sides[Position::Left.index()]
                .min(sides[Position::Right.index()])
                .max(0);
            for position in [Position::Left, Position::Right] {
                let value = &mut sides[position.index()];
                *value = i32::from(*value > min_depth);
            }
        }
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A: {},{} B: {},{}",
            self.depth[0][1], self.depth[0][2], self.depth[1][1], self.depth[1][2]
        )
    }
}
