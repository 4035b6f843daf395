use geotopo_types::cartesian::Coord;

use crate::graph::DirectedEdgeId;

/// Node of a planar graph.
///
/// The directed edges leaving the node form its *star*, kept sorted counter-clockwise by direction.
#[derive(Debug, Clone)]
pub struct Node {
    coord: Coord,
    pub(crate) star: Vec<DirectedEdgeId>,
}

impl Node {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            star: vec![],
        }
    }

    /// Coordinate of the node.
    pub fn coordinate(&self) -> Coord {
        self.coord
    }

    /// Directed edges leaving the node in counter-clockwise order.
    pub fn star(&self) -> &[DirectedEdgeId] {
        &self.star
    }

    /// Number of edge ends incident to the node.
    pub fn degree(&self) -> usize {
        self.star.len()
    }
}
