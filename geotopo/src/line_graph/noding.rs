use std::collections::{BTreeSet, HashMap};

use geotopo_types::cartesian::{CartesianPoint2d, Coord};
use geotopo_types::impls::Contour;
use geotopo_types::segment::SegmentIntersection;

use super::{EdgeIndex, LineStringGraph};

impl LineStringGraph {
    /// Splits the edges at the points where they intersect other edges, so that afterwards edges only meet at their
    /// endpoints.
    ///
    /// Edges are processed in the order of their indices. Split points are snapped with the precision model of the
    /// graph, and the `k`-th part of a split edge gets the index of the edge with `k` appended.
    pub fn split_crossing_edges(&mut self) {
        let tolerance = self.precision.tolerance();
        let mut queue: BTreeSet<(EdgeIndex, usize)> = self
            .live_edges()
            .map(|(id, edge)| (edge.index.clone(), id))
            .collect();

        while let Some((_, id)) = queue.pop_first() {
            if self.edges[id].removed {
                continue;
            }

            for other_id in self.candidates(&self.edges[id].envelope().expand(tolerance)) {
                if other_id == id || self.edges[other_id].removed {
                    continue;
                }

                let edge = &self.edges[id];
                let other = &self.edges[other_id];
                let split_points: Vec<Coord> = match edge.segment().intersection(&other.segment()) {
                    SegmentIntersection::None => continue,
                    intersection => intersection
                        .points()
                        .into_iter()
                        .map(|point| self.precision.make_precise(point))
                        .collect(),
                };

                let edge_points: Vec<Coord> = split_points
                    .iter()
                    .copied()
                    .filter(|point| !edge.has_endpoint(point))
                    .collect();
                let other_points: Vec<Coord> = split_points
                    .iter()
                    .copied()
                    .filter(|point| !other.has_endpoint(point))
                    .collect();

                if !other_points.is_empty() {
                    for child in self.split_edge(other_id, other_points) {
                        queue.insert((self.edges[child].index.clone(), child));
                    }
                }

                if !edge_points.is_empty() {
                    for child in self.split_edge(id, edge_points) {
                        queue.insert((self.edges[child].index.clone(), child));
                    }
                    break;
                }
            }
        }
    }

    /// Replaces the edge with the chain of edges going through the split points. Returns the ids of the new edges.
    fn split_edge(&mut self, id: usize, mut points: Vec<Coord>) -> Vec<usize> {
        let start = self.edges[id].start;
        let end = self.edges[id].end;
        let parent = self.edges[id].index.clone();

        points.sort_by(|a, b| start.distance_sq(a).total_cmp(&start.distance_sq(b)));
        points.dedup();

        let chain: Vec<Coord> = std::iter::once(start)
            .chain(points)
            .chain(std::iter::once(end))
            .collect();

        log::debug!(
            "Splitting edge {parent} into {} parts",
            chain.len() - 1
        );

        self.remove_edge(id);

        let mut children = vec![];
        for (k, pair) in chain.windows(2).enumerate() {
            if pair[0] == pair[1] {
                continue;
            }

            children.push(self.add_edge(pair[0], pair[1], parent.child(k)));
        }

        children
    }

    /// Removes the edges connecting the same pair of nodes as another edge, in either direction. The edge with the
    /// lowest index is kept.
    pub fn remove_duplicate_edges(&mut self) {
        let mut seen: HashMap<(Coord, Coord), usize> = HashMap::new();
        let mut duplicates = vec![];

        for id in self.sorted_edge_ids() {
            let edge = &self.edges[id];
            let key = if edge.start.compare_xy(&edge.end).is_le() {
                (edge.start, edge.end)
            } else {
                (edge.end, edge.start)
            };

            if let Some(kept) = seen.get(&key) {
                log::debug!(
                    "Edge {} duplicates edge {}",
                    edge.index,
                    self.edges[*kept].index
                );
                duplicates.push(id);
            } else {
                seen.insert(key, id);
            }
        }

        for id in duplicates {
            self.remove_edge(id);
        }
    }

    /// Lines the graph consists of.
    ///
    /// Duplicate edges are removed first. Then the edges are walked in the index order, and a line is finished at every
    /// node that does not have exactly two edges and wherever the next edge does not continue the previous one. A line
    /// that ends where it started is returned as a closed contour.
    pub fn lines(&mut self) -> Vec<Contour<Coord>> {
        self.remove_duplicate_edges();

        let mut lines = vec![];
        let mut current: Vec<Coord> = vec![];

        for id in self.sorted_edge_ids() {
            let edge = &self.edges[id];
            if current.last() != Some(&edge.start) {
                flush_line(&mut current, &mut lines);
                current.push(edge.start);
            }

            current.push(edge.end);
            if self.node_degree(&edge.end) != 2 {
                flush_line(&mut current, &mut lines);
            }
        }

        flush_line(&mut current, &mut lines);
        lines
    }
}

fn flush_line(current: &mut Vec<Coord>, lines: &mut Vec<Contour<Coord>>) {
    if current.len() < 2 {
        current.clear();
        return;
    }

    lines.push(Contour::from_line_points(std::mem::take(current)));
}
