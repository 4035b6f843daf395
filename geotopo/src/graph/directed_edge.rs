use std::cmp::Ordering;

use geotopo_types::cartesian::{Coord, Orientation};
use geotopo_types::Location;

use crate::error::TopologyError;
use crate::graph::{DirectedEdgeId, EdgeId, NodeId, RingId};
use crate::label::Label;
use crate::position::Position;

/// Quadrant of the plane a direction vector points into, numbered counter-clockwise from the north-east one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// `dx >= 0, dy >= 0`
    NorthEast = 0,
    /// `dx < 0, dy >= 0`
    NorthWest = 1,
    /// `dx < 0, dy < 0`
    SouthWest = 2,
    /// `dx >= 0, dy < 0`
    SouthEast = 3,
}

impl Quadrant {
    /// Quadrant of the vector `(dx, dy)`.
    pub fn of(dx: f64, dy: f64) -> Self {
        match (dx >= 0.0, dy >= 0.0) {
            (true, true) => Quadrant::NorthEast,
            (false, true) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (true, false) => Quadrant::SouthEast,
        }
    }
}

/// One of the two oriented views of an [`Edge`](crate::graph::Edge).
///
/// Directed edges are created in pairs by [`PlanarGraph::add_edge`](crate::graph::PlanarGraph::add_edge). The
/// forward directed edge goes along the points of the edge, the backward one goes in the opposite direction; the two
/// are each other's `sym`.
#[derive(Debug, Clone)]
pub struct DirectedEdge {
    pub(crate) edge: EdgeId,
    pub(crate) is_forward: bool,
    pub(crate) label: Label,
    pub(crate) depth: [Option<i32>; 3],
    pub(crate) sym: DirectedEdgeId,
    pub(crate) node: NodeId,
    pub(crate) next: Option<DirectedEdgeId>,
    pub(crate) next_min: Option<DirectedEdgeId>,
    pub(crate) edge_ring: Option<RingId>,
    pub(crate) min_edge_ring: Option<RingId>,
    pub(crate) in_result: bool,
    pub(crate) visited: bool,
    p0: Coord,
    p1: Coord,
    dx: f64,
    dy: f64,
    quadrant: Quadrant,
}

impl DirectedEdge {
    /// `p0` is the origin of the directed edge and `p1` is the next point along its direction.
    pub(crate) fn new(
        edge: EdgeId,
        is_forward: bool,
        edge_label: &Label,
        sym: DirectedEdgeId,
        node: NodeId,
        p0: Coord,
        p1: Coord,
    ) -> Self {
        let label = if is_forward {
            *edge_label
        } else {
            edge_label.flipped()
        };
        let dx = p1.x() - p0.x();
        let dy = p1.y() - p0.y();

        Self {
            edge,
            is_forward,
            label,
            depth: [None; 3],
            sym,
            node,
            next: None,
            next_min: None,
            edge_ring: None,
            min_edge_ring: None,
            in_result: false,
            visited: false,
            p0,
            p1,
            dx,
            dy,
            quadrant: Quadrant::of(dx, dy),
        }
    }

    /// The edge this directed edge is a view of.
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Returns true if the directed edge goes along the points of its edge.
    pub fn is_forward(&self) -> bool {
        self.is_forward
    }

    /// Label of the edge, with the sides flipped for backward directed edges.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Mutable label.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The twin directed edge going in the opposite direction.
    pub fn sym(&self) -> DirectedEdgeId {
        self.sym
    }

    /// Origin node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Origin coordinate.
    pub fn coordinate(&self) -> Coord {
        self.p0
    }

    /// Second point of the directed edge, which determines its direction at the origin.
    pub fn direction_point(&self) -> Coord {
        self.p1
    }

    /// Direction quadrant at the origin.
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Next directed edge of the maximal ring.
    pub fn next(&self) -> Option<DirectedEdgeId> {
        self.next
    }

    /// Sets the next directed edge of the maximal ring.
    pub fn set_next(&mut self, next: Option<DirectedEdgeId>) {
        self.next = next;
    }

    /// Next directed edge of the minimal ring.
    pub fn next_min(&self) -> Option<DirectedEdgeId> {
        self.next_min
    }

    /// Sets the next directed edge of the minimal ring.
    pub fn set_next_min(&mut self, next: Option<DirectedEdgeId>) {
        self.next_min = next;
    }

    /// Maximal ring the directed edge belongs to.
    pub fn edge_ring(&self) -> Option<RingId> {
        self.edge_ring
    }

    /// Minimal ring the directed edge belongs to.
    pub fn min_edge_ring(&self) -> Option<RingId> {
        self.min_edge_ring
    }

    /// Returns true if the directed edge is a part of the operation result.
    pub fn is_in_result(&self) -> bool {
        self.in_result
    }

    /// Marks the directed edge as a part of the operation result.
    pub fn set_in_result(&mut self, in_result: bool) {
        self.in_result = in_result;
    }

    /// Returns true if the directed edge was visited.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Sets the visited flag.
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Depth of the side, or `None` if it was not assigned yet.
    pub fn depth(&self, position: Position) -> Option<i32> {
        self.depth[position.index()]
    }

    /// Assigns the depth of the side.
    ///
    /// Assigning a value different from an already assigned one breaks the depth consistency of the graph and
    /// returns [`TopologyError::DepthMismatch`].
    pub fn set_depth(&mut self, position: Position, value: i32) -> Result<(), TopologyError> {
        match self.depth[position.index()] {
            Some(assigned) if assigned != value => Err(TopologyError::DepthMismatch {
                coord: self.p0,
                assigned,
                new: value,
            }),
            _ => {
                self.depth[position.index()] = Some(value);
                Ok(())
            }
        }
    }

    /// Returns true if the directed edge is inside the area of both geometries, so it cannot be a part of the result
    /// boundary.
    pub fn is_interior_area_edge(&self) -> bool {
        (0..2).all(|geom| {
            self.label.is_area_for(geom)
                && self.label.location(geom, Position::Left) == Some(Location::Interior)
                && self.label.location(geom, Position::Right) == Some(Location::Interior)
        })
    }

    /// Returns true if the directed edge is a line of at least one geometry and is outside all area geometries.
    pub fn is_line_edge(&self) -> bool {
        let is_line = self.label.is_line(0) || self.label.is_line(1);
        let is_exterior_if_area = |geom: usize| {
            !self.label.is_area_for(geom) || self.label.all_positions_equal(geom, Location::Exterior)
        };

        is_line && is_exterior_if_area(0) && is_exterior_if_area(1)
    }

    /// Depth change when moving from a side with `current` location to a side with `next` location.
    pub fn depth_factor(current: Option<Location>, next: Option<Location>) -> i32 {
        match (current, next) {
            (Some(Location::Exterior), Some(Location::Interior)) => 1,
            (Some(Location::Interior), Some(Location::Exterior)) => -1,
            _ => 0,
        }
    }

    /// Compares directions of two directed edges leaving the same point.
    ///
    /// Directions are ordered counter-clockwise starting from the positive x-axis: first by quadrant, then by the
    /// orientation of the second point of one edge relative to the other.
    pub fn compare_direction(&self, other: &DirectedEdge) -> Ordering {
        if self.dx == other.dx && self.dy == other.dy {
            return Ordering::Equal;
        }

        match self.quadrant.cmp(&other.quadrant) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        match Orientation::triplet(&other.p0, &other.p1, &self.p1) {
            Orientation::Counterclockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => Ordering::Equal,
        }
    }
}
