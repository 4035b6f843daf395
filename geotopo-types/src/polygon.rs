//! Polygon trait.

use crate::contour::Contour;

/// Area bounded by a shell ring, with zero or more hole rings cut out of it.
pub trait Polygon {
    /// Ring type.
    type Contour: Contour;

    /// The shell.
    fn outer_contour(&self) -> &Self::Contour;
    /// Iterates over the holes.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over the shell followed by the holes.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }
}
