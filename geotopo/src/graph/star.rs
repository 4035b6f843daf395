//! Operations on the stars of directed edges around graph nodes.

use geotopo_types::Location;

use crate::error::TopologyError;
use crate::graph::{DirectedEdgeId, NodeId, OverlayOp, PlanarGraph, RingId};
use crate::position::Position;

impl PlanarGraph {
    /// Directed edges of the node star that are in the result themselves or have the twin in the result.
    fn result_area_edges(&self, node: NodeId) -> Vec<DirectedEdgeId> {
        self.nodes[node.0]
            .star
            .iter()
            .copied()
            .filter(|id| {
                let de = &self.directed_edges[id.0];
                de.in_result || self.directed_edges[de.sym.0].in_result
            })
            .collect()
    }

    /// Links every result area directed edge entering a node with the next result directed edge leaving it, for all
    /// nodes of the graph.
    pub fn link_result_directed_edges(&mut self) -> Result<(), TopologyError> {
        for node in 0..self.nodes.len() {
            self.link_result_directed_edges_at(NodeId(node))?;
        }

        Ok(())
    }

    /// Links result directed edges around a single node.
    ///
    /// The star is scanned counter-clockwise: each incoming result edge is linked to the next outgoing result edge.
    /// The last incoming edge wraps around to the first outgoing one.
    pub fn link_result_directed_edges_at(&mut self, node: NodeId) -> Result<(), TopologyError> {
        let mut first_out = None;
        let mut incoming: Option<DirectedEdgeId> = None;

        for out in self.result_area_edges(node) {
            let out_de = &self.directed_edges[out.0];
            if !out_de.label.is_area() {
                continue;
            }

            let out_in_result = out_de.in_result;
            let sym = out_de.sym;
            if first_out.is_none() && out_in_result {
                first_out = Some(out);
            }

            match incoming {
                None => {
                    if self.directed_edges[sym.0].in_result {
                        incoming = Some(sym);
                    }
                }
                Some(incoming_id) => {
                    if out_in_result {
                        self.directed_edges[incoming_id.0].next = Some(out);
                        incoming = None;
                    }
                }
            }
        }

        if let Some(incoming_id) = incoming {
            let Some(first_out) = first_out else {
                return Err(TopologyError::NoOutgoingEdge {
                    coord: self.nodes[node.0].coordinate(),
                });
            };
            self.directed_edges[incoming_id.0].next = Some(first_out);
        }

        Ok(())
    }

    /// Links the directed edges of the maximal ring around the node into minimal rings.
    ///
    /// The star is scanned clockwise, so that every minimal ring takes the tightest turn at the node.
    pub fn link_minimal_directed_edges(
        &mut self,
        node: NodeId,
        ring: RingId,
    ) -> Result<(), TopologyError> {
        let mut first_out = None;
        let mut incoming: Option<DirectedEdgeId> = None;

        for out in self.result_area_edges(node).into_iter().rev() {
            let out_de = &self.directed_edges[out.0];
            let out_in_ring = out_de.edge_ring == Some(ring);
            let sym = out_de.sym;
            if first_out.is_none() && out_in_ring {
                first_out = Some(out);
            }

            match incoming {
                None => {
                    if self.directed_edges[sym.0].edge_ring == Some(ring) {
                        incoming = Some(sym);
                    }
                }
                Some(incoming_id) => {
                    if out_in_ring {
                        self.directed_edges[incoming_id.0].next_min = Some(out);
                        incoming = None;
                    }
                }
            }
        }

        if let Some(incoming_id) = incoming {
            let Some(first_out) = first_out else {
                return Err(TopologyError::NoOutgoingEdge {
                    coord: self.nodes[node.0].coordinate(),
                });
            };
            self.directed_edges[incoming_id.0].next_min = Some(first_out);
        }

        Ok(())
    }

    /// Number of directed edges leaving the node that belong to the maximal ring.
    pub fn outgoing_degree(&self, node: NodeId, ring: RingId) -> usize {
        self.nodes[node.0]
            .star
            .iter()
            .filter(|id| self.directed_edges[id.0].edge_ring == Some(ring))
            .count()
    }

    /// Number of directed edges leaving the node that are in the result.
    pub fn result_degree(&self, node: NodeId) -> usize {
        self.nodes[node.0]
            .star
            .iter()
            .filter(|id| self.directed_edges[id.0].in_result)
            .count()
    }

    /// Sets the depth of a side of the directed edge, and derives the depth of the opposite side from the depth delta
    /// of the edge. The twin directed edge gets the same depths with the sides swapped.
    pub fn set_edge_depths(
        &mut self,
        id: DirectedEdgeId,
        position: Position,
        depth: i32,
    ) -> Result<(), TopologyError> {
        self.assign_edge_depths(id, position, depth).map(|_| ())
    }

    fn assign_edge_depths(
        &mut self,
        id: DirectedEdgeId,
        position: Position,
        depth: i32,
    ) -> Result<i32, TopologyError> {
        let de = &self.directed_edges[id.0];
        let mut depth_delta = self.edges[de.edge.0].depth_delta();
        if !de.is_forward {
            depth_delta = -depth_delta;
        }
        let direction_factor = if position == Position::Left { -1 } else { 1 };
        let opposite = position.opposite();
        let opposite_depth = depth + depth_delta * direction_factor;
        let sym = de.sym;

        let de = &mut self.directed_edges[id.0];
        de.set_depth(position, depth)?;
        de.set_depth(opposite, opposite_depth)?;

        let sym = &mut self.directed_edges[sym.0];
        sym.set_depth(opposite, depth)?;
        sym.set_depth(position, opposite_depth)?;

        Ok(opposite_depth)
    }

    /// Propagates side depths counter-clockwise around the origin node of the directed edge, which must have both
    /// side depths assigned.
    ///
    /// The right side of each next edge in the star gets the depth of the left side of the previous one. After the
    /// full turn the depth must come back to the right side depth of the starting edge, otherwise
    /// [`TopologyError::NodeDepthMismatch`] is returned.
    pub fn compute_depths_around(&mut self, start: DirectedEdgeId) -> Result<(), TopologyError> {
        let de = &self.directed_edges[start.0];
        let node = de.node;
        let coord = de.coordinate();
        let (Some(start_depth), Some(target_depth)) =
            (de.depth(Position::Left), de.depth(Position::Right))
        else {
            return Err(TopologyError::UnknownDepth { coord });
        };

        let star = self.nodes[node.0].star.clone();
        let others: Vec<DirectedEdgeId> = star
            .iter()
            .cycle()
            .skip_while(|id| **id != start)
            .skip(1)
            .take(star.len().saturating_sub(1))
            .copied()
            .collect();

        let mut current = start_depth;
        for id in others {
            current = self.assign_edge_depths(id, Position::Right, current)?;
        }

        if current != target_depth {
            return Err(TopologyError::NodeDepthMismatch { coord });
        }

        log::trace!("Computed depths around node {coord}");
        Ok(())
    }

    /// Marks area directed edges with the result of the operation on their right side as in the result. Edges inside
    /// both geometries are never marked.
    pub fn mark_result_area_edges(&mut self, op: OverlayOp) {
        let mut count = 0;
        for de in &mut self.directed_edges {
            let label = de.label;
            if label.is_area()
                && !de.is_interior_area_edge()
                && op.is_result(
                    label.location(0, Position::Right),
                    label.location(1, Position::Right),
                )
            {
                de.in_result = true;
                count += 1;
            }
        }

        log::debug!("Marked {count} directed edges as {op:?} result");
    }

    /// Location of a side of the directed edge derived from its depth.
    pub fn depth_location(&self, id: DirectedEdgeId, position: Position) -> Option<Location> {
        self.directed_edges[id.0]
            .depth(position)
            .map(|d| if d <= 0 { Location::Exterior } else { Location::Interior })
    }
}
