use serde::{Deserialize, Serialize};

use crate::impls::contour::ClosedContour;

/// Polygon with a shell and a list of holes. Implements [`crate::Polygon`].
///
/// Rings produced by the polygon assembler have the shell oriented clockwise and the holes counter-clockwise unless the
/// engine is configured otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Shell ring.
    pub outer_contour: ClosedContour<P>,
    /// Hole rings, each lying inside the shell.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon from its shell and holes. The rings are taken as is, without checking their orientation.
    pub fn new(shell: ClosedContour<P>, holes: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour: shell,
            inner_contours: holes,
        }
    }

    /// Returns true if the shell has no points.
    pub fn is_empty(&self) -> bool {
        self.outer_contour.points.is_empty()
    }

    /// Total number of vertices in all contours.
    pub fn vertex_count(&self) -> usize {
        self.outer_contour.points.len()
            + self
                .inner_contours
                .iter()
                .map(|hole| hole.points.len())
                .sum::<usize>()
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = ClosedContour<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.inner_contours.iter()
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(shell: ClosedContour<P>) -> Self {
        Self::new(shell, vec![])
    }
}
