//! Rings of directed edges.

use geotopo_types::cartesian::{ring_location, CartesianClosedContour, Coord, Rect, Winding};
use geotopo_types::impls::{ClosedContour, Polygon};
use geotopo_types::Location;

use crate::error::TopologyError;
use crate::graph::{DirectedEdge, DirectedEdgeId, PlanarGraph, RingId};
use crate::label::Label;
use crate::position::Position;

/// Rule of ring traversal: which directed edge follows the given one in a ring, and which ring membership slot of a
/// directed edge the ring uses.
pub trait RingStep {
    /// Directed edge following `de` in the ring.
    fn next(&self, de: &DirectedEdge) -> Option<DirectedEdgeId>;
    /// Ring of this kind the directed edge belongs to.
    fn ring(&self, de: &DirectedEdge) -> Option<RingId>;
    /// Records that the directed edge belongs to the ring.
    fn set_ring(&self, de: &mut DirectedEdge, ring: RingId);
}

/// Traversal of maximal rings, following the `next` links of directed edges.
#[derive(Debug, Default, Copy, Clone)]
pub struct MaximalStep;

impl RingStep for MaximalStep {
    fn next(&self, de: &DirectedEdge) -> Option<DirectedEdgeId> {
        de.next
    }

    fn ring(&self, de: &DirectedEdge) -> Option<RingId> {
        de.edge_ring
    }

    fn set_ring(&self, de: &mut DirectedEdge, ring: RingId) {
        de.edge_ring = Some(ring);
    }
}

/// Traversal of minimal rings, following the `next_min` links of directed edges.
#[derive(Debug, Default, Copy, Clone)]
pub struct MinimalStep;

impl RingStep for MinimalStep {
    fn next(&self, de: &DirectedEdge) -> Option<DirectedEdgeId> {
        de.next_min
    }

    fn ring(&self, de: &DirectedEdge) -> Option<RingId> {
        de.min_edge_ring
    }

    fn set_ring(&self, de: &mut DirectedEdge, ring: RingId) {
        de.min_edge_ring = Some(ring);
    }
}

/// Closed ring of directed edges.
#[derive(Debug, Clone)]
pub struct EdgeRing {
    id: RingId,
    start: DirectedEdgeId,
    edges: Vec<DirectedEdgeId>,
    points: Vec<Coord>,
    envelope: Rect,
    label: Label,
    is_hole: bool,
    pub(crate) shell: Option<RingId>,
    pub(crate) holes: Vec<RingId>,
}

impl EdgeRing {
    /// Walks the ring starting at `start` using the `step` rule and marks all its directed edges as belonging to the
    /// ring `id`.
    ///
    /// The ring label gets the right side locations of the directed edges as its `On` locations. The ring is a hole
    /// if its points go around with the `hole_winding`.
    pub fn build(
        graph: &mut PlanarGraph,
        start: DirectedEdgeId,
        id: RingId,
        step: &impl RingStep,
        hole_winding: Winding,
    ) -> Result<Self, TopologyError> {
        let mut edges = vec![];
        let mut points: Vec<Coord> = vec![];
        let mut label = Label::line(None);
        let mut current = start;

        loop {
            let de = graph.directed_edge(current);
            let coord = de.coordinate();
            match step.ring(de) {
                Some(ring) if ring == id => return Err(TopologyError::VisitedTwice { coord }),
                Some(_) => return Err(TopologyError::AlreadyInRing { coord }),
                None => {}
            }
            if !de.label().is_area() {
                return Err(TopologyError::NonAreaEdge { coord });
            }

            merge_label(&mut label, de.label());
            let skip = if edges.is_empty() { 0 } else { 1 };
            points.extend(graph.directed_points(current).skip(skip));
            edges.push(current);

            step.set_ring(graph.directed_edge_mut(current), id);
            log::trace!("Added directed edge {} at {coord} to ring {}", current.index(), id.index());

            let Some(next) = step.next(graph.directed_edge(current)) else {
                return Err(TopologyError::MissingNext { coord });
            };
            if next == start {
                break;
            }
            current = next;
        }

        let contour = ClosedContour::new(points[..points.len() - 1].to_vec());
        let is_hole = contour.winding() == hole_winding;
        let envelope = Rect::from_points(points.iter()).unwrap_or_else(|| Rect::from_point(&points[0]));

        Ok(Self {
            id,
            start,
            edges,
            points,
            envelope,
            label,
            is_hole,
            shell: None,
            holes: vec![],
        })
    }

    /// Id of the ring.
    pub fn id(&self) -> RingId {
        self.id
    }

    /// The directed edge the ring starts at.
    pub fn start(&self) -> DirectedEdgeId {
        self.start
    }

    /// Directed edges of the ring in traversal order.
    pub fn edges(&self) -> &[DirectedEdgeId] {
        &self.edges
    }

    /// Points of the ring. The first point is repeated at the end.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Bounding rectangle of the ring.
    pub fn envelope(&self) -> Rect {
        self.envelope
    }

    /// Label merged from the directed edges.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Returns true if the ring is a hole.
    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    /// Shell the hole belongs to. `None` for shells and not yet assigned holes.
    pub fn shell(&self) -> Option<RingId> {
        self.shell
    }

    /// Holes of the shell.
    pub fn holes(&self) -> &[RingId] {
        &self.holes
    }

    /// Ring as a closed contour, without repeating the first point.
    pub fn contour(&self) -> ClosedContour<Coord> {
        ClosedContour::new(self.points[..self.points.len() - 1].to_vec())
    }

    /// Maximum number of this ring's edge ends at any of its nodes.
    pub fn max_node_degree(&self, graph: &PlanarGraph) -> usize {
        self.edges
            .iter()
            .map(|id| graph.outgoing_degree(graph.directed_edge(*id).node(), self.id))
            .max()
            .unwrap_or(0)
            * 2
    }

    /// Links the directed edges of this maximal ring into minimal rings at every node of the ring.
    pub fn link_minimal_directed_edges(&self, graph: &mut PlanarGraph) -> Result<(), TopologyError> {
        for id in &self.edges {
            let node = graph.directed_edge(*id).node();
            graph.link_minimal_directed_edges(node, self.id)?;
        }

        Ok(())
    }

    /// Returns true if the point is inside the ring or on its boundary, but not inside any of its holes.
    ///
    /// `rings` is the list of rings the hole ids refer to.
    pub fn contains_point(&self, point: &Coord, rings: &[EdgeRing]) -> bool {
        if !self.envelope.contains(point) {
            return false;
        }

        if ring_location(point, &self.points) == Location::Exterior {
            return false;
        }

        !self
            .holes
            .iter()
            .any(|hole| rings[hole.index()].contains_point(point, rings))
    }

    /// Polygon with this ring as the outer contour and its holes as the inner contours.
    pub fn to_polygon(&self, rings: &[EdgeRing]) -> Polygon<Coord> {
        Polygon::new(
            self.contour(),
            self.holes
                .iter()
                .map(|hole| rings[hole.index()].contour())
                .collect(),
        )
    }
}

fn merge_label(ring_label: &mut Label, de_label: &Label) {
    for geom in 0..2 {
        let Some(location) = de_label.location(geom, Position::Right) else {
            continue;
        };
        if ring_label.on_location(geom).is_none() {
            ring_label.set_location(geom, Position::On, location);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::graph::{Edge, OverlayOp};
    use assert_matches::assert_matches;
    use Location::*;

    /// Adds an edge of geometry 0 with interior on the left side. Geometry 1 is empty.
    pub(crate) fn add_area_edge(graph: &mut PlanarGraph, points: &[(f64, f64)]) {
        let mut label = Label::area_for(0, Boundary, Interior, Exterior);
        label.set_all_locations(1, Exterior);
        let edge = Edge::new(points.iter().map(|&p| p.into()).collect(), label).expect("valid edge");
        graph.add_edge(edge);
    }

    fn square_graph() -> PlanarGraph {
        let mut graph = PlanarGraph::new();
        add_area_edge(&mut graph, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        add_area_edge(&mut graph, &[(10.0, 10.0), (0.0, 10.0)]);
        add_area_edge(&mut graph, &[(0.0, 10.0), (0.0, 0.0)]);
        graph.mark_result_area_edges(OverlayOp::Union);
        graph.link_result_directed_edges().expect("consistent graph");
        graph
    }

    fn result_start(graph: &PlanarGraph) -> DirectedEdgeId {
        graph
            .directed_edges()
            .find(|(_, de)| de.is_in_result())
            .map(|(id, _)| id)
            .expect("result edges")
    }

    #[test]
    fn ring_traversal_returns_to_start() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        let ring = EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::CounterClockwise)
            .expect("valid ring");

        assert_eq!(ring.edges().len(), 3);
        let mut current = ring.start();
        let mut visited = vec![];
        for _ in 0..ring.edges().len() {
            visited.push(current);
            current = graph.directed_edge(current).next().expect("linked ring");
        }
        assert_eq!(current, ring.start());
        visited.sort();
        visited.dedup();
        assert_eq!(visited.len(), ring.edges().len());

        assert_eq!(ring.points().len(), 5);
        assert_eq!(ring.points().first(), ring.points().last());
        assert!(!ring.is_hole());
        assert_eq!(ring.label().on_location(0), Some(Interior));
        assert_eq!(ring.label().on_location(1), Some(Exterior));
        assert_eq!(ring.max_node_degree(&graph), 2);
    }

    #[test]
    fn hole_winding_is_configurable() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        let ring = EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::Clockwise)
            .expect("valid ring");
        assert!(ring.is_hole());
    }

    #[test]
    fn ring_cannot_be_built_twice() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::CounterClockwise)
            .expect("valid ring");
        assert_matches!(
            EdgeRing::build(&mut graph, start, RingId(1), &MaximalStep, Winding::CounterClockwise),
            Err(TopologyError::AlreadyInRing { .. })
        );
    }

    #[test]
    fn missing_next_aborts_ring() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        let next = graph.directed_edge(start).next().expect("linked");
        graph.directed_edge_mut(next).set_next(None);
        assert_matches!(
            EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::CounterClockwise),
            Err(TopologyError::MissingNext { .. })
        );
    }

    #[test]
    fn cycle_not_through_start_is_visited_twice() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        let second = graph.directed_edge(start).next().expect("linked");
        let third = graph.directed_edge(second).next().expect("linked");
        graph.directed_edge_mut(third).set_next(Some(second));
        assert_matches!(
            EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::CounterClockwise),
            Err(TopologyError::VisitedTwice { .. })
        );
    }

    #[test]
    fn line_edges_are_rejected() {
        let mut graph = PlanarGraph::new();
        let edge = Edge::new(
            vec![(0.0, 0.0).into(), (1.0, 0.0).into(), (0.0, 0.0).into()],
            Label::line(Interior),
        )
        .expect("valid edge");
        let id = graph.add_edge(edge);
        let (forward, _) = graph.directed_edges_of(id);
        graph.directed_edge_mut(forward).set_next(Some(forward));
        assert_matches!(
            EdgeRing::build(&mut graph, forward, RingId(0), &MaximalStep, Winding::CounterClockwise),
            Err(TopologyError::NonAreaEdge { .. })
        );
    }

    #[test]
    fn contains_point() {
        let mut graph = square_graph();
        let start = result_start(&graph);
        let ring = EdgeRing::build(&mut graph, start, RingId(0), &MaximalStep, Winding::CounterClockwise)
            .expect("valid ring");
        let rings = [ring];

        assert!(rings[0].contains_point(&Coord::new(5.0, 5.0), &rings));
        assert!(rings[0].contains_point(&Coord::new(0.0, 5.0), &rings));
        assert!(!rings[0].contains_point(&Coord::new(15.0, 5.0), &rings));

        let polygon = rings[0].to_polygon(&rings);
        assert_eq!(polygon.outer_contour.points.len(), 4);
        assert!(polygon.inner_contours.is_empty());
    }
}
