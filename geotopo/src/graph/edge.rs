use geotopo_types::cartesian::{Coord, Rect};

use crate::depth::Depth;
use crate::error::GeotopoError;
use crate::label::Label;

/// Noded edge of a planar graph.
///
/// An edge is a sequence of at least two coordinates that does not cross any other edge of the graph except at its
/// endpoints. It is shared by up to two input geometries, which are described by its [`Label`].
#[derive(Debug, Clone)]
pub struct Edge {
    points: Vec<Coord>,
    label: Label,
    depth: Depth,
    depth_delta: i32,
}

impl Edge {
    /// Creates a new edge. Returns an error if fewer than two points are given.
    pub fn new(points: Vec<Coord>, label: Label) -> Result<Self, GeotopoError> {
        if points.len() < 2 {
            return Err(GeotopoError::InvalidInput(format!(
                "edge must have at least 2 points, but {} given",
                points.len()
            )));
        }

        Ok(Self {
            points,
            label,
            depth: Depth::new(),
            depth_delta: 0,
        })
    }

    /// Points of the edge.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// First point of the edge.
    pub fn first(&self) -> Coord {
        self.points[0]
    }

    /// Last point of the edge.
    pub fn last(&self) -> Coord {
        self.points[self.points.len() - 1]
    }

    /// Returns true if the edge starts and ends at the same point.
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// Bounding rectangle of the edge.
    pub fn envelope(&self) -> Rect {
        // An edge always has at least two points.
        Rect::from_points(self.points.iter()).unwrap_or_else(|| Rect::from_point(&self.first()))
    }

    /// Label of the edge.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable label of the edge.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Depth of the edge sides.
    pub fn depth(&self) -> &Depth {
        &self.depth
    }

    /// Mutable depth of the edge sides.
    pub fn depth_mut(&mut self) -> &mut Depth {
        &mut self.depth
    }

    /// Change of depth when crossing the edge from the right side to the left side.
    pub fn depth_delta(&self) -> i32 {
        self.depth_delta
    }

    /// Sets the depth delta of the edge.
    pub fn set_depth_delta(&mut self, depth_delta: i32) {
        self.depth_delta = depth_delta;
    }

    /// Adds the side locations of the label to the edge depth, normalizes it and derives the depth delta for the
    /// geometry from it. Returns the resulting delta.
    ///
    /// The delta is left unchanged if the label has no side locations for the geometry.
    pub fn update_depth_delta(&mut self, geom: usize) -> i32 {
        self.depth.add_label(&self.label);
        self.depth.normalize();
        if !self.depth.is_null_for(geom) {
            // depth delta is counted from right to left, `Depth::delta` from left to right
            self.depth_delta = -self.depth.delta(geom);
        }

        self.depth_delta
    }
}
