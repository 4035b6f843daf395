use serde::{Deserialize, Serialize};

/// Topological location of a point relative to a geometry.
///
/// Absence of a known location is represented with `Option<Location>::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// The point is in the interior of the geometry.
    Interior,
    /// The point is on the boundary of the geometry.
    Boundary,
    /// The point is outside of the geometry.
    Exterior,
}

impl Location {
    /// Single character code of the location: `i`, `b` or `e`.
    pub fn symbol(&self) -> char {
        match self {
            Location::Interior => 'i',
            Location::Boundary => 'b',
            Location::Exterior => 'e',
        }
    }

    /// Same as [`Location::symbol`], but returns `-` for an unknown location.
    pub fn symbol_of(location: Option<Location>) -> char {
        location.map(|l| l.symbol()).unwrap_or('-')
    }
}
