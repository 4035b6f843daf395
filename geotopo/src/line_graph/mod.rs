//! Graph of a single line used to find and resolve its self-intersections.
//!
//! Every segment of the line becomes an [`LineEdge`] tagged with an [`EdgeIndex`] that records its position along the
//! line. Segments that cross are split at the crossing point, and the parts keep indices that sort between the parent
//! and the next segment, so the line can be walked in its original order after any number of splits.

use std::collections::HashMap;

use geotopo_types::cartesian::{Coord, Rect};
use geotopo_types::segment::{Segment, SegmentIntersection};
use geotopo_types::Contour;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

use crate::config::PrecisionModel;

mod index;
mod noding;

pub use index::EdgeIndex;

type IndexedEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// Vertex of a [`LineStringGraph`].
#[derive(Debug, Clone)]
pub struct LineNode {
    coord: Coord,
    edges: Vec<usize>,
}

impl LineNode {
    /// Position of the node.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Number of live edges ending at the node.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Straight segment of a [`LineStringGraph`].
#[derive(Debug, Clone)]
pub struct LineEdge {
    start: Coord,
    end: Coord,
    index: EdgeIndex,
    removed: bool,
}

impl LineEdge {
    /// First point of the edge in the direction of the line.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Last point of the edge in the direction of the line.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Position of the edge along the line.
    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// Segment between the edge endpoints.
    pub fn segment(&self) -> Segment<'_, Coord> {
        Segment(&self.start, &self.end)
    }

    /// Bounding box of the edge.
    pub fn envelope(&self) -> Rect {
        self.segment().envelope()
    }

    fn has_endpoint(&self, point: &Coord) -> bool {
        self.start == *point || self.end == *point
    }
}

/// Graph of the segments of one line.
///
/// Nodes are the distinct vertices of the line, edges are its non-degenerate segments. Edge envelopes are kept in an
/// R-tree, so intersection queries only test segments whose bounding boxes are close to each other.
#[derive(Debug, Clone)]
pub struct LineStringGraph {
    nodes: Vec<LineNode>,
    node_map: HashMap<Coord, usize>,
    edges: Vec<LineEdge>,
    tree: RTree<IndexedEnvelope>,
    from_point: Option<Coord>,
    to_point: Option<Coord>,
    envelope: Option<Rect>,
    precision: PrecisionModel,
}

impl LineStringGraph {
    /// Builds the graph of a line. For closed contours the closing segment is included.
    pub fn build(line: &impl Contour<Point = Coord>, precision: PrecisionModel) -> Self {
        let points: Vec<Coord> = line.iter_points_closing().copied().collect();
        Self::from_points(&points, precision)
    }

    /// Builds the graph of the line going through the points.
    ///
    /// Consecutive equal points do not produce edges but still count when numbering the segments.
    pub fn from_points(points: &[Coord], precision: PrecisionModel) -> Self {
        let mut graph = Self {
            nodes: vec![],
            node_map: HashMap::new(),
            edges: vec![],
            tree: RTree::new(),
            from_point: points.first().copied(),
            to_point: points.last().copied(),
            envelope: Rect::from_points(points.iter()),
            precision,
        };

        for (ordinal, pair) in points.windows(2).enumerate() {
            if pair[0] == pair[1] {
                log::trace!("Skipping zero length segment {ordinal} at {}", pair[0]);
                continue;
            }

            graph.add_edge(pair[0], pair[1], EdgeIndex::segment(ordinal));
        }

        graph
    }

    /// First point of the line.
    pub fn from_point(&self) -> Option<Coord> {
        self.from_point
    }

    /// Bounding box of the line.
    pub fn envelope(&self) -> Option<Rect> {
        self.envelope
    }

    /// Precision model used to snap intersection points.
    pub fn precision(&self) -> PrecisionModel {
        self.precision
    }

    /// Iterates over the nodes of the graph. Nodes whose edges were all removed have degree `0`.
    pub fn nodes(&self) -> impl Iterator<Item = &LineNode> {
        self.nodes.iter()
    }

    /// Iterates over the edges of the graph that were not removed.
    pub fn edges(&self) -> impl Iterator<Item = &LineEdge> {
        self.edges.iter().filter(|edge| !edge.removed)
    }

    /// Number of live edges ending at the point.
    pub fn node_degree(&self, point: &Coord) -> usize {
        self.node_map
            .get(point)
            .map_or(0, |&node| self.nodes[node].degree())
    }

    /// Points of the line as currently represented by the edges, walked in the index order.
    pub fn points(&self) -> Vec<Coord> {
        let mut points: Vec<Coord> = vec![];
        for id in self.sorted_edge_ids() {
            let edge = &self.edges[id];
            if points.last() != Some(&edge.start) {
                points.push(edge.start);
            }
            points.push(edge.end);
        }

        points
    }

    /// Edge with the given index.
    ///
    /// Indices are unique unless the graph was built in an unusual way. If several edges have the same index, the one
    /// added first is returned.
    pub fn edge_by_index(&self, index: &EdgeIndex) -> Option<&LineEdge> {
        let mut matching = self.edges().filter(|edge| edge.index == *index);
        let found = matching.next();
        if matching.next().is_some() {
            log::warn!("Several edges have index {index}, using the first one");
        }

        found
    }

    /// Returns true if the line has a real intersection with the other line.
    ///
    /// Lines that only touch at their endpoints do not intersect, unless the touching point is a branch point (node
    /// of degree over 2) or the end of a line looping back to itself (node of degree 2 at the line end) in either of
    /// the lines.
    pub fn intersects(&self, other: &LineStringGraph) -> bool {
        let tolerance = self.precision.tolerance().max(other.precision.tolerance());
        let (Some(envelope), Some(other_envelope)) = (self.envelope, other.envelope) else {
            return false;
        };
        if !envelope.expand(tolerance).intersects(&other_envelope) {
            return false;
        }

        for other_edge in other.edges() {
            for id in self.candidates(&other_edge.envelope().expand(tolerance)) {
                let edge = &self.edges[id];
                match edge.segment().intersection(&other_edge.segment()) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Overlap(..) => return true,
                    SegmentIntersection::Point(point) => {
                        if !self.is_plain_end(&point) || !other.is_plain_end(&point) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Returns true if the point is an end of the line where nothing else meets.
    fn is_plain_end(&self, point: &Coord) -> bool {
        let is_end = self.from_point.as_ref() == Some(point) || self.to_point.as_ref() == Some(point);
        if !is_end {
            return false;
        }

        // degree 2 at an end means the line comes back to it
        self.node_degree(point) <= 1
    }

    /// Points where the line intersects itself, sorted by `x` then `y`.
    ///
    /// These are the vertices of degree over 2, the vertices lying on the interior of another edge within the
    /// tolerance of the precision model, the crossing points of segments that are not endpoints of either of them, and
    /// the ends of collinear overlaps except the vertex joining two consecutive edges.
    pub fn self_intersections(&self) -> Vec<Coord> {
        let tolerance = self.precision.tolerance();
        let mut points = vec![];

        for node in &self.nodes {
            if node.degree() > 2 {
                points.push(node.coord);
            }
        }

        for node in self.nodes.iter().filter(|node| node.degree() > 0) {
            if self.touches_other_edge(node, tolerance) {
                points.push(node.coord);
            }
        }

        let mut rank = vec![usize::MAX; self.edges.len()];
        for (position, id) in self.sorted_edge_ids().into_iter().enumerate() {
            rank[id] = position;
        }

        for (id, edge) in self.live_edges() {
            for other_id in self.candidates(&edge.envelope().expand(tolerance)) {
                if other_id <= id {
                    continue;
                }

                let other = &self.edges[other_id];
                match edge.segment().intersection(&other.segment()) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(point) => {
                        if !edge.has_endpoint(&point) && !other.has_endpoint(&point) {
                            points.push(point);
                        }
                    }
                    SegmentIntersection::Overlap(a, b) => {
                        for point in [a, b] {
                            if !self.is_consecutive_join(&rank, id, other_id, &point) {
                                points.push(point);
                            }
                        }
                    }
                }
            }
        }

        points.sort_by(Coord::compare_xy);
        points.dedup();
        points
    }

    /// Returns true if no edges meet other than consecutive edges at their shared node.
    pub fn is_simple(&self) -> bool {
        if self.nodes.iter().any(|node| node.degree() > 2) {
            return false;
        }

        let tolerance = self.precision.tolerance();
        for (id, edge) in self.live_edges() {
            for other_id in self.candidates(&edge.envelope().expand(tolerance)) {
                if other_id == id {
                    continue;
                }

                let other = &self.edges[other_id];
                match edge.segment().intersection(&other.segment()) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Overlap(..) => return false,
                    SegmentIntersection::Point(point) => {
                        if !edge.has_endpoint(&point) || !other.has_endpoint(&point) {
                            return false;
                        }
                    }
                }
            }
        }

        !self
            .nodes
            .iter()
            .filter(|node| node.degree() > 0)
            .any(|node| self.touches_other_edge(node, tolerance))
    }

    /// Returns true if the point is where the line passes from one of the edges to the other, the edges being next to
    /// each other in index order.
    fn is_consecutive_join(&self, rank: &[usize], a: usize, b: usize, point: &Coord) -> bool {
        let (first, second) = if rank[a] < rank[b] { (a, b) } else { (b, a) };
        rank[second] == rank[first] + 1 && self.edges[first].end == *point && self.edges[second].start == *point
    }

    fn touches_other_edge(&self, node: &LineNode, tolerance: f64) -> bool {
        let probe = Rect::from_point(&node.coord).expand(tolerance);
        self.candidates(&probe).into_iter().any(|id| {
            let edge = &self.edges[id];
            !edge.has_endpoint(&node.coord) && edge.segment().touches_interior(&node.coord, tolerance)
        })
    }

    fn live_edges(&self) -> impl Iterator<Item = (usize, &LineEdge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| !edge.removed)
    }

    fn sorted_edge_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.live_edges().map(|(id, _)| id).collect();
        ids.sort_by(|a, b| self.edges[*a].index.cmp(&self.edges[*b].index));
        ids
    }

    /// Ids of the live edges whose envelopes intersect the given one.
    fn candidates(&self, envelope: &Rect) -> Vec<usize> {
        let query = AABB::from_corners(envelope.min_corner(), envelope.max_corner());
        let mut ids: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&query)
            .map(|entry| entry.data)
            .filter(|&id| !self.edges[id].removed)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn node_id(&mut self, coord: Coord) -> usize {
        if let Some(&id) = self.node_map.get(&coord) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(LineNode {
            coord,
            edges: vec![],
        });
        self.node_map.insert(coord, id);
        id
    }

    fn add_edge(&mut self, start: Coord, end: Coord, index: EdgeIndex) -> usize {
        let id = self.edges.len();
        let start_node = self.node_id(start);
        let end_node = self.node_id(end);
        self.nodes[start_node].edges.push(id);
        self.nodes[end_node].edges.push(id);

        self.tree.insert(GeomWithData::new(
            Rectangle::from_corners([start.x(), start.y()], [end.x(), end.y()]),
            id,
        ));
        self.edges.push(LineEdge {
            start,
            end,
            index,
            removed: false,
        });

        id
    }

    fn remove_edge(&mut self, id: usize) {
        let edge = &mut self.edges[id];
        if edge.removed {
            return;
        }
        edge.removed = true;

        for coord in [edge.start, edge.end] {
            if let Some(&node) = self.node_map.get(&coord) {
                self.nodes[node].edges.retain(|&edge_id| edge_id != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotopo_types::impls;

    pub(super) fn graph(points: &[(f64, f64)]) -> LineStringGraph {
        let _ = env_logger::builder().is_test(true).try_init();
        let points: Vec<Coord> = points.iter().map(|&p| Coord::from(p)).collect();
        LineStringGraph::from_points(&points, PrecisionModel::FLOATING)
    }

    fn square() -> LineStringGraph {
        LineStringGraph::build(
            &impls::Contour::closed(vec![
                Coord::new(0.0, 0.0),
                Coord::new(10.0, 0.0),
                Coord::new(10.0, 10.0),
                Coord::new(0.0, 10.0),
            ]),
            PrecisionModel::FLOATING,
        )
    }

    #[test]
    fn build_closed_contour() {
        let graph = square();
        assert_eq!(graph.edges().count(), 4);
        assert_eq!(graph.nodes().count(), 4);
        assert!(graph.nodes().all(|node| node.degree() == 2));
        assert_eq!(graph.from_point(), Some(Coord::new(0.0, 0.0)));
        assert_eq!(graph.envelope(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(graph.points().len(), 5);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let graph = graph(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(
            graph.edges().next().map(|edge| edge.index().clone()),
            Some(EdgeIndex::segment(1))
        );
    }

    #[test]
    fn empty_line() {
        let graph = graph(&[]);
        assert_eq!(graph.from_point(), None);
        assert_eq!(graph.envelope(), None);
        assert!(graph.is_simple());
        assert!(graph.self_intersections().is_empty());
        assert!(!graph.intersects(&square()));
    }

    #[test]
    fn closed_square_is_simple() {
        let graph = square();
        assert!(graph.is_simple());
        assert!(graph.self_intersections().is_empty());
    }

    #[test]
    fn bowtie_crosses_itself() {
        let graph = graph(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]);
        assert!(!graph.is_simple());
        assert_eq!(graph.self_intersections(), vec![Coord::new(5.0, 5.0)]);
    }

    #[test]
    fn vertex_on_other_segment() {
        let graph = graph(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, 0.0)]);
        assert!(!graph.is_simple());
        assert_eq!(graph.self_intersections(), vec![Coord::new(5.0, 0.0)]);
    }

    #[test]
    fn vertex_near_other_segment_within_tolerance() {
        let points: Vec<Coord> = [(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, 0.05)]
            .into_iter()
            .map(Coord::from)
            .collect();

        let floating = LineStringGraph::from_points(&points, PrecisionModel::FLOATING);
        assert!(floating.is_simple());

        let fixed = LineStringGraph::from_points(&points, PrecisionModel::fixed(10.0));
        assert!(!fixed.is_simple());
        assert_eq!(fixed.self_intersections(), vec![Coord::new(5.0, 0.05)]);
    }

    #[test]
    fn backtracking_line_is_not_simple() {
        let back = graph(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]);
        assert!(!back.is_simple());
        assert_eq!(back.self_intersections(), vec![Coord::new(0.0, 0.0)]);

        let partial = graph(&[(0.0, 0.0), (10.0, 0.0), (5.0, 0.0)]);
        assert!(!partial.is_simple());
        assert_eq!(partial.self_intersections(), vec![Coord::new(5.0, 0.0)]);
    }

    #[test]
    fn branch_point_is_self_intersection() {
        let graph = graph(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0), (5.0, 0.0), (10.0, 0.0)]);
        assert!(!graph.is_simple());
        assert_eq!(graph.node_degree(&Coord::new(5.0, 0.0)), 4);
        assert_eq!(graph.self_intersections(), vec![Coord::new(5.0, 0.0)]);
    }

    #[test]
    fn lines_touching_at_ends_do_not_intersect() {
        let a = graph(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = graph(&[(10.0, 0.0), (20.0, 5.0)]);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn end_touching_interior_intersects() {
        let a = graph(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = graph(&[(5.0, 0.0), (5.0, 10.0)]);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn end_of_loop_intersects() {
        let a = graph(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let b = graph(&[(0.0, 0.0), (-5.0, -5.0)]);
        assert!(a.intersects(&b));
    }

    #[test]
    fn end_at_branch_point_intersects() {
        let a = graph(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0), (5.0, 0.0)]);
        let b = graph(&[(5.0, 0.0), (10.0, 0.0)]);
        assert!(a.intersects(&b));
    }

    #[test]
    fn crossing_and_disjoint_lines() {
        let a = graph(&[(0.0, 0.0), (10.0, 10.0)]);
        let b = graph(&[(0.0, 10.0), (10.0, 0.0)]);
        let c = graph(&[(20.0, 20.0), (30.0, 20.0)]);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn overlapping_lines_intersect() {
        let a = graph(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = graph(&[(10.0, 0.0), (5.0, 0.0)]);
        assert!(a.intersects(&b));
    }

    #[test]
    fn edge_by_index() {
        let graph = graph(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]);
        let edge = graph
            .edge_by_index(&EdgeIndex::segment(1))
            .expect("second segment");
        assert_eq!(edge.start(), Coord::new(10.0, 0.0));
        assert_eq!(edge.end(), Coord::new(10.0, 5.0));
        assert!(graph.edge_by_index(&EdgeIndex::segment(2)).is_none());
    }
}
