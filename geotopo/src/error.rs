//! Error types used by the crate.

use geotopo_types::cartesian::Coord;
use geotopo_types::error::GeometryError;
use thiserror::Error;

/// Violation of a topology invariant.
///
/// These errors abort the current operation: continuing would produce a geometrically wrong result. Every variant
/// carries the coordinate at which the inconsistency was found.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// A side of a directed edge already has a depth different from the one being assigned.
    #[error("assigned depths do not match at {coord}: {assigned} != {new}")]
    DepthMismatch {
        /// Origin of the directed edge.
        coord: Coord,
        /// Depth the side already has.
        assigned: i32,
        /// Depth that was being assigned.
        new: i32,
    },
    /// Depth propagation started from a directed edge without assigned side depths.
    #[error("directed edge at {coord} has no assigned depths")]
    UnknownDepth {
        /// Origin of the directed edge.
        coord: Coord,
    },
    /// Depth propagated around a node does not come back to the starting value.
    #[error("depth mismatch around node {coord}")]
    NodeDepthMismatch {
        /// Node coordinate.
        coord: Coord,
    },
    /// Ring traversal reached a directed edge without the next edge.
    #[error("found null directed edge at {coord}")]
    MissingNext {
        /// Origin of the directed edge without the next link.
        coord: Coord,
    },
    /// Ring traversal visited the same directed edge twice.
    #[error("directed edge visited twice during ring-building at {coord}")]
    VisitedTwice {
        /// Origin of the directed edge.
        coord: Coord,
    },
    /// Directed edge already belongs to another ring of the same kind.
    #[error("directed edge at {coord} already belongs to another ring")]
    AlreadyInRing {
        /// Origin of the directed edge.
        coord: Coord,
    },
    /// Ring traversal reached a directed edge that is not labelled as an area edge.
    #[error("directed edge at {coord} is not an area edge")]
    NonAreaEdge {
        /// Origin of the directed edge.
        coord: Coord,
    },
    /// A result edge enters a node but no result edge leaves it.
    #[error("no outgoing directed edge found at {coord}")]
    NoOutgoingEdge {
        /// Node coordinate.
        coord: Coord,
    },
    /// A group of minimal rings contains more than one shell.
    #[error("found two shells in minimal ring list at {coord}")]
    MultipleShells {
        /// First point of the second shell.
        coord: Coord,
    },
    /// A hole is not contained in any shell.
    #[error("unable to assign hole to a shell at {coord}")]
    UnassignedHole {
        /// First point of the hole.
        coord: Coord,
    },
}

/// Geotopo error type.
#[derive(Debug, Error)]
pub enum GeotopoError {
    /// Topology invariant violation.
    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),
    /// The input cannot be processed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Geometry conversion error.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Malformed configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
