//! Engine configuration.

use geotopo_types::cartesian::{Coord, Winding};
use serde::{Deserialize, Serialize};

use crate::error::GeotopoError;

/// Grid the coordinates produced by the engine are snapped to.
///
/// A model with `scale == 0` is *floating*: coordinates are used as is and the tolerance of proximity checks is zero.
/// Otherwise coordinates are rounded to multiples of `1 / scale`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisionModel {
    /// Number of grid cells per coordinate unit.
    pub scale: f64,
}

impl PrecisionModel {
    /// Floating precision model.
    pub const FLOATING: Self = Self { scale: 0.0 };

    /// Creates a fixed precision model with the given scale.
    pub fn fixed(scale: f64) -> Self {
        Self { scale }
    }

    /// Returns true if the model does not snap coordinates.
    pub fn is_floating(&self) -> bool {
        !(self.scale.is_finite() && self.scale > 0.0)
    }

    /// Distance within which two coordinates are considered to be the same position.
    pub fn tolerance(&self) -> f64 {
        if self.is_floating() {
            0.0
        } else {
            1.0 / self.scale
        }
    }

    /// Rounds the coordinate to the grid of the model.
    pub fn make_precise(&self, coord: Coord) -> Coord {
        if self.is_floating() {
            return coord;
        }

        Coord::new(
            (coord.x() * self.scale).round() / self.scale,
            (coord.y() * self.scale).round() / self.scale,
        )
        .with_z(coord.z())
    }
}

/// Options of ring assembly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingAssemblyOptions {
    /// Rings with this winding are holes, rings with the opposite winding are shells.
    pub hole_winding: Winding,
}

impl Default for RingAssemblyOptions {
    fn default() -> Self {
        Self {
            hole_winding: Winding::CounterClockwise,
        }
    }
}

/// Options of convex hull computation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullOptions {
    /// Inputs with more points than this are first reduced with the octagon filter.
    pub reduction_threshold: usize,
}

impl Default for HullOptions {
    fn default() -> Self {
        Self {
            reduction_threshold: 50,
        }
    }
}

/// Configuration of the whole engine.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Precision model used for node snapping and proximity checks.
    pub precision: PrecisionModel,
    /// Ring assembly options.
    pub rings: RingAssemblyOptions,
    /// Convex hull options.
    pub hull: HullOptions,
}

impl EngineConfig {
    /// Reads the configuration from a JSON string. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, GeotopoError> {
        serde_json::from_str(json).map_err(|err| GeotopoError::Config(err.to_string()))
    }
}
