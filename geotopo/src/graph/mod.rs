//! Half-edge planar graph.
//!
//! All graph components are stored in the arenas of a [`PlanarGraph`] and reference each other with integer ids, so
//! that the cyclic structure of the graph (twin directed edges, next edges of a ring, ring membership) needs no shared
//! mutable references.

use std::cmp::Ordering;
use std::collections::HashMap;

use geotopo_types::cartesian::Coord;

mod directed_edge;
mod edge;
mod node;
mod overlay;
mod star;

pub use directed_edge::{DirectedEdge, Quadrant};
pub use edge::Edge;
pub use node::Node;
pub use overlay::{is_result_of_op, OverlayOp};

/// Id of an [`Edge`] in a [`PlanarGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

/// Id of a [`DirectedEdge`] in a [`PlanarGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdgeId(pub(crate) usize);

/// Id of a [`Node`] in a [`PlanarGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Id of an [`EdgeRing`](crate::ring::EdgeRing) built over a [`PlanarGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingId(pub(crate) usize);

macro_rules! impl_index {
    ($($id:ty),*) => {
        $(
            impl $id {
                /// Position of the item in its arena.
                pub fn index(&self) -> usize {
                    self.0
                }
            }
        )*
    };
}

impl_index!(EdgeId, DirectedEdgeId, NodeId, RingId);

/// Planar graph of noded edges.
///
/// Every added [`Edge`] gets two [`DirectedEdge`]s, which are inserted into the stars of the nodes at the edge
/// endpoints. Nodes are identified by their coordinates.
#[derive(Debug, Default, Clone)]
pub struct PlanarGraph {
    edges: Vec<Edge>,
    directed_edges: Vec<DirectedEdge>,
    nodes: Vec<Node>,
    node_map: HashMap<Coord, NodeId>,
}

impl PlanarGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from the given edges.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }

        graph
    }

    /// Returns the node at the coordinate, creating it if it does not exist yet.
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        if let Some(id) = self.node_map.get(&coord) {
            return *id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(coord));
        self.node_map.insert(coord, id);
        id
    }

    /// Node at the coordinate.
    pub fn find_node(&self, coord: &Coord) -> Option<NodeId> {
        self.node_map.get(coord).copied()
    }

    /// Adds the edge and its two directed edges to the graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let points = edge.points();
        let n = points.len();

        let start = self.add_node(points[0]);
        let end = self.add_node(points[n - 1]);

        let forward_id = DirectedEdgeId(self.directed_edges.len());
        let backward_id = DirectedEdgeId(forward_id.0 + 1);
        let forward = DirectedEdge::new(
            id,
            true,
            edge.label(),
            backward_id,
            start,
            points[0],
            points[1],
        );
        let backward = DirectedEdge::new(
            id,
            false,
            edge.label(),
            forward_id,
            end,
            points[n - 1],
            points[n - 2],
        );

        self.directed_edges.push(forward);
        self.directed_edges.push(backward);
        self.edges.push(edge);

        self.insert_into_star(start, forward_id);
        self.insert_into_star(end, backward_id);

        log::trace!("Added edge {} from {} to node {}", id.0, start.0, end.0);

        id
    }

    fn insert_into_star(&mut self, node: NodeId, id: DirectedEdgeId) {
        let directed_edges = &self.directed_edges;
        let new = &directed_edges[id.0];
        let star = &mut self.nodes[node.0].star;
        let position = star.partition_point(|other| {
            directed_edges[other.0].compare_direction(new) != Ordering::Greater
        });
        star.insert(position, id);
    }

    /// Edge with the id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Mutable edge with the id.
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    /// Directed edge with the id.
    pub fn directed_edge(&self, id: DirectedEdgeId) -> &DirectedEdge {
        &self.directed_edges[id.0]
    }

    /// Mutable directed edge with the id.
    pub fn directed_edge_mut(&mut self, id: DirectedEdgeId) -> &mut DirectedEdge {
        &mut self.directed_edges[id.0]
    }

    /// Node with the id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Forward and backward directed edges of the edge.
    pub fn directed_edges_of(&self, id: EdgeId) -> (DirectedEdgeId, DirectedEdgeId) {
        (DirectedEdgeId(id.0 * 2), DirectedEdgeId(id.0 * 2 + 1))
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Iterates over all directed edges.
    pub fn directed_edges(&self) -> impl Iterator<Item = (DirectedEdgeId, &DirectedEdge)> {
        self.directed_edges
            .iter()
            .enumerate()
            .map(|(i, e)| (DirectedEdgeId(i), e))
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Points of the edge in the direction of the directed edge.
    pub fn directed_points(&self, id: DirectedEdgeId) -> impl Iterator<Item = &Coord> {
        let de = &self.directed_edges[id.0];
        let points = self.edges[de.edge.0].points();
        let (forward, backward) = if de.is_forward {
            (Some(points.iter()), None)
        } else {
            (None, Some(points.iter().rev()))
        };

        forward
            .into_iter()
            .flatten()
            .chain(backward.into_iter().flatten())
    }

    /// Sets the visited flag of the directed edge and its twin.
    pub fn set_visited_edge(&mut self, id: DirectedEdgeId, visited: bool) {
        let sym = self.directed_edges[id.0].sym;
        self.directed_edges[id.0].visited = visited;
        self.directed_edges[sym.0].visited = visited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;

    fn edge(points: &[(f64, f64)]) -> Edge {
        Edge::new(points.iter().map(|&p| p.into()).collect(), Label::default()).expect("valid edge")
    }

    #[test]
    fn add_edge_links_twins_and_nodes() {
        let mut graph = PlanarGraph::new();
        let id = graph.add_edge(edge(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]));
        let (forward, backward) = graph.directed_edges_of(id);

        assert_eq!(graph.directed_edge(forward).sym(), backward);
        assert_eq!(graph.directed_edge(backward).sym(), forward);
        assert!(graph.directed_edge(forward).is_forward());
        assert_eq!(graph.directed_edge(backward).coordinate(), Coord::new(10.0, 0.0));
        assert_eq!(graph.directed_edge(backward).direction_point(), Coord::new(5.0, 5.0));
        assert_eq!(graph.nodes().count(), 2);

        let points: Vec<Coord> = graph.directed_points(backward).copied().collect();
        assert_eq!(
            points,
            vec![Coord::new(10.0, 0.0), Coord::new(5.0, 5.0), Coord::new(0.0, 0.0)]
        );
    }

    #[test]
    fn star_is_sorted_counter_clockwise() {
        let graph = PlanarGraph::from_edges([
            edge(&[(0.0, 0.0), (0.0, -1.0)]),
            edge(&[(0.0, 0.0), (1.0, 0.0)]),
            edge(&[(-1.0, 0.0), (0.0, 0.0)]),
            edge(&[(0.0, 0.0), (0.0, 1.0)]),
        ]);

        let node = graph.find_node(&Coord::new(0.0, 0.0)).expect("node exists");
        let directions: Vec<Coord> = graph
            .node(node)
            .star()
            .iter()
            .map(|id| graph.directed_edge(*id).direction_point())
            .collect();
        assert_eq!(
            directions,
            vec![
                Coord::new(1.0, 0.0),
                Coord::new(0.0, 1.0),
                Coord::new(-1.0, 0.0),
                Coord::new(0.0, -1.0),
            ]
        );
        assert_eq!(graph.node(node).degree(), 4);
    }
}
