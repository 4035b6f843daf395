//! Assembly of polygons from the result directed edges of a planar graph.

use geotopo_types::cartesian::{ring_location, Coord};
use geotopo_types::impls::Polygon;
use geotopo_types::Location;

use crate::config::RingAssemblyOptions;
use crate::error::TopologyError;
use crate::graph::{DirectedEdgeId, PlanarGraph, RingId};
use crate::ring::{EdgeRing, MaximalStep, MinimalStep};

/// Rings built by [`PolygonAssembler`].
#[derive(Debug, Clone, Default)]
pub struct RingAssembly {
    rings: Vec<EdgeRing>,
    shells: Vec<RingId>,
}

impl RingAssembly {
    /// All rings that were built. This includes the maximal rings that were split into minimal rings.
    pub fn rings(&self) -> &[EdgeRing] {
        &self.rings
    }

    /// Ring with the id.
    pub fn ring(&self, id: RingId) -> &EdgeRing {
        &self.rings[id.index()]
    }

    /// Shells of the result polygons. Each shell has its holes assigned.
    pub fn shells(&self) -> &[RingId] {
        &self.shells
    }

    /// Result polygons.
    pub fn polygons(&self) -> Vec<Polygon<Coord>> {
        self.shells
            .iter()
            .map(|id| self.rings[id.index()].to_polygon(&self.rings))
            .collect()
    }

    /// Returns true if the point is inside any of the result polygons or on its boundary.
    pub fn contains_point(&self, point: &Coord) -> bool {
        self.shells
            .iter()
            .any(|id| self.rings[id.index()].contains_point(point, &self.rings))
    }
}

/// Builds polygons from the directed edges of a planar graph that are marked as in the result.
#[derive(Debug, Default, Clone)]
pub struct PolygonAssembler {
    options: RingAssemblyOptions,
}

impl PolygonAssembler {
    /// Creates a new assembler.
    pub fn new(options: RingAssemblyOptions) -> Self {
        Self { options }
    }

    /// Links the result directed edges of the graph into rings and groups the rings into polygons.
    ///
    /// Maximal rings that pass any node more than once are split into minimal rings, each group of which must contain
    /// at most one shell. Other holes are assigned to the smallest shell containing them.
    pub fn assemble(&self, graph: &mut PlanarGraph) -> Result<RingAssembly, TopologyError> {
        graph.link_result_directed_edges()?;

        let mut rings: Vec<EdgeRing> = vec![];
        let maximal = self.build_maximal_rings(graph, &mut rings)?;

        let mut shells = vec![];
        let mut free_holes = vec![];
        let mut simple_rings = vec![];

        for ring_id in maximal {
            let ring = &rings[ring_id.index()];
            if ring.max_node_degree(graph) > 2 {
                ring.link_minimal_directed_edges(graph)?;
                let minimal = self.build_minimal_rings(graph, ring_id, &mut rings)?;
                log::trace!(
                    "Split maximal ring {} into {} minimal rings",
                    ring_id.index(),
                    minimal.len()
                );

                match find_shell(&rings, &minimal)? {
                    Some(shell) => {
                        let holes: Vec<RingId> = minimal
                            .iter()
                            .copied()
                            .filter(|id| rings[id.index()].is_hole())
                            .collect();
                        for hole in holes {
                            set_shell(&mut rings, hole, shell);
                        }
                        shells.push(shell);
                    }
                    None => free_holes.extend(minimal),
                }
            } else {
                simple_rings.push(ring_id);
            }
        }

        for ring_id in simple_rings {
            if rings[ring_id.index()].is_hole() {
                free_holes.push(ring_id);
            } else {
                shells.push(ring_id);
            }
        }

        place_free_holes(&mut rings, &shells, &free_holes)?;

        log::debug!(
            "Assembled {} rings into {} polygons with {} free holes",
            rings.len(),
            shells.len(),
            free_holes.len()
        );

        Ok(RingAssembly { rings, shells })
    }

    fn build_maximal_rings(
        &self,
        graph: &mut PlanarGraph,
        rings: &mut Vec<EdgeRing>,
    ) -> Result<Vec<RingId>, TopologyError> {
        let starts: Vec<DirectedEdgeId> = graph
            .directed_edges()
            .filter(|(_, de)| de.is_in_result() && de.label().is_area())
            .map(|(id, _)| id)
            .collect();

        let mut maximal = vec![];
        for start in starts {
            if graph.directed_edge(start).edge_ring().is_some() {
                continue;
            }

            let id = RingId(rings.len());
            rings.push(EdgeRing::build(
                graph,
                start,
                id,
                &MaximalStep,
                self.options.hole_winding,
            )?);
            maximal.push(id);
        }

        Ok(maximal)
    }

    fn build_minimal_rings(
        &self,
        graph: &mut PlanarGraph,
        maximal: RingId,
        rings: &mut Vec<EdgeRing>,
    ) -> Result<Vec<RingId>, TopologyError> {
        let edges = rings[maximal.index()].edges().to_vec();
        let mut minimal = vec![];
        for start in edges {
            if graph.directed_edge(start).min_edge_ring().is_some() {
                continue;
            }

            let id = RingId(rings.len());
            rings.push(EdgeRing::build(
                graph,
                start,
                id,
                &MinimalStep,
                self.options.hole_winding,
            )?);
            minimal.push(id);
        }

        Ok(minimal)
    }
}

fn find_shell(rings: &[EdgeRing], minimal: &[RingId]) -> Result<Option<RingId>, TopologyError> {
    let mut shell = None;
    for id in minimal {
        let ring = &rings[id.index()];
        if ring.is_hole() {
            continue;
        }

        if shell.is_some() {
            return Err(TopologyError::MultipleShells {
                coord: ring.points()[0],
            });
        }
        shell = Some(*id);
    }

    Ok(shell)
}

fn set_shell(rings: &mut [EdgeRing], hole: RingId, shell: RingId) {
    rings[hole.index()].shell = Some(shell);
    rings[shell.index()].holes.push(hole);
}

fn place_free_holes(
    rings: &mut [EdgeRing],
    shells: &[RingId],
    free_holes: &[RingId],
) -> Result<(), TopologyError> {
    for &hole in free_holes {
        if rings[hole.index()].shell().is_some() {
            continue;
        }

        let Some(shell) = find_containing_shell(rings, hole, shells) else {
            return Err(TopologyError::UnassignedHole {
                coord: rings[hole.index()].points()[0],
            });
        };
        set_shell(rings, hole, shell);
    }

    Ok(())
}

/// Smallest shell containing the hole, judged by the envelopes and the first point of the hole.
fn find_containing_shell(rings: &[EdgeRing], hole: RingId, shells: &[RingId]) -> Option<RingId> {
    let hole_ring = &rings[hole.index()];
    let test_envelope = hole_ring.envelope();
    let test_point = hole_ring.points()[0];

    let mut min_shell: Option<RingId> = None;
    for &shell in shells {
        let shell_ring = &rings[shell.index()];
        let shell_envelope = shell_ring.envelope();
        let is_contained = shell_envelope.contains_rect(&test_envelope)
            && ring_location(&test_point, shell_ring.points()) != Location::Exterior;
        if !is_contained {
            continue;
        }

        let is_smaller = min_shell.map_or(true, |min| {
            rings[min.index()].envelope().contains_rect(&shell_envelope)
        });
        if is_smaller {
            min_shell = Some(shell);
        }
    }

    min_shell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::OverlayOp;
    use crate::ring::tests::add_area_edge;
    use assert_matches::assert_matches;
    use geotopo_types::cartesian::{CartesianClosedContour, Winding};
    use geotopo_types::Polygon as _;

    fn assemble(graph: &mut PlanarGraph, hole_winding: Winding) -> Result<RingAssembly, TopologyError> {
        let _ = env_logger::builder().is_test(true).try_init();
        graph.mark_result_area_edges(OverlayOp::Union);
        PolygonAssembler::new(RingAssemblyOptions { hole_winding }).assemble(graph)
    }

    #[test]
    fn square_with_hole() {
        let mut graph = PlanarGraph::new();
        add_area_edge(
            &mut graph,
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        );
        add_area_edge(
            &mut graph,
            &[(2.0, 2.0), (2.0, 8.0), (8.0, 8.0), (8.0, 2.0), (2.0, 2.0)],
        );

        let assembly = assemble(&mut graph, Winding::CounterClockwise).expect("valid topology");
        assert_eq!(assembly.shells().len(), 1);

        let polygons = assembly.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].inner_contours().count(), 1);
        assert_eq!(polygons[0].outer_contour.winding(), Winding::Clockwise);
        assert_eq!(polygons[0].inner_contours[0].winding(), Winding::CounterClockwise);
        assert_eq!(polygons[0].outer_contour.points.len(), 4);

        assert!(assembly.contains_point(&Coord::new(1.0, 1.0)));
        assert!(!assembly.contains_point(&Coord::new(5.0, 5.0)));
        assert!(!assembly.contains_point(&Coord::new(11.0, 5.0)));
    }

    #[test]
    fn hole_touching_shell_is_split_into_minimal_rings() {
        let mut graph = PlanarGraph::new();
        add_area_edge(
            &mut graph,
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        );
        add_area_edge(&mut graph, &[(0.0, 0.0), (2.0, 5.0), (5.0, 2.0), (0.0, 0.0)]);

        let assembly = assemble(&mut graph, Winding::CounterClockwise).expect("valid topology");
        assert_eq!(assembly.rings().len(), 3);

        let polygons = assembly.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].inner_contours.len(), 1);
        assert_eq!(polygons[0].inner_contours[0].points.len(), 3);
        assert!(assembly.contains_point(&Coord::new(8.0, 8.0)));
        assert!(!assembly.contains_point(&Coord::new(2.0, 2.0)));
    }

    #[test]
    fn separate_shells() {
        let mut graph = PlanarGraph::new();
        add_area_edge(
            &mut graph,
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        );
        add_area_edge(
            &mut graph,
            &[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0), (10.0, 10.0)],
        );

        let assembly = assemble(&mut graph, Winding::CounterClockwise).expect("valid topology");
        assert_eq!(assembly.polygons().len(), 2);
        assert!(assembly.polygons().iter().all(|p| p.inner_contours.is_empty()));
    }

    #[test]
    fn hole_without_shell() {
        let mut graph = PlanarGraph::new();
        add_area_edge(
            &mut graph,
            &[(2.0, 2.0), (2.0, 8.0), (8.0, 8.0), (8.0, 2.0), (2.0, 2.0)],
        );

        assert_matches!(
            assemble(&mut graph, Winding::CounterClockwise),
            Err(TopologyError::UnassignedHole { coord }) if coord == Coord::new(2.0, 2.0)
        );
    }

    #[test]
    fn opposite_hole_winding() {
        let mut graph = PlanarGraph::new();
        add_area_edge(
            &mut graph,
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        );

        assert_matches!(
            assemble(&mut graph, Winding::Clockwise),
            Err(TopologyError::UnassignedHole { .. })
        );
    }
}
