use geotopo_types::Location;
use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Boolean operation on two area geometries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayOp {
    /// Points inside both geometries.
    Intersection,
    /// Points inside any of the geometries.
    Union,
    /// Points inside the first geometry but not inside the second one.
    Difference,
    /// Points inside exactly one of the geometries.
    SymDifference,
}

impl OverlayOp {
    /// Returns true if a point with the given locations relative to the two geometries is in the result of the
    /// operation. Boundary locations are treated as interior.
    pub fn is_result(&self, location0: Option<Location>, location1: Option<Location>) -> bool {
        let inside = |location: Option<Location>| {
            matches!(location, Some(Location::Interior | Location::Boundary))
        };
        let (in0, in1) = (inside(location0), inside(location1));

        match self {
            OverlayOp::Intersection => in0 && in1,
            OverlayOp::Union => in0 || in1,
            OverlayOp::Difference => in0 && !in1,
            OverlayOp::SymDifference => in0 != in1,
        }
    }
}

/// Returns true if a component with the label is in the result of the operation, judging by its `On` locations.
pub fn is_result_of_op(label: &Label, op: OverlayOp) -> bool {
    op.is_result(label.on_location(0), label.on_location(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Location::*;

    #[test]
    fn result_locations() {
        assert!(OverlayOp::Intersection.is_result(Some(Interior), Some(Boundary)));
        assert!(!OverlayOp::Intersection.is_result(Some(Interior), Some(Exterior)));
        assert!(OverlayOp::Union.is_result(None, Some(Interior)));
        assert!(!OverlayOp::Union.is_result(Some(Exterior), None));
        assert!(OverlayOp::Difference.is_result(Some(Boundary), Some(Exterior)));
        assert!(!OverlayOp::Difference.is_result(Some(Exterior), Some(Interior)));
        assert!(OverlayOp::SymDifference.is_result(Some(Exterior), Some(Interior)));
        assert!(!OverlayOp::SymDifference.is_result(Some(Interior), Some(Interior)));
    }

    #[test]
    fn label_result() {
        let mut label = Label::line_for(0, Interior);
        label.set_location(1, crate::position::Position::On, Exterior);
        assert!(is_result_of_op(&label, OverlayOp::Union));
        assert!(is_result_of_op(&label, OverlayOp::Difference));
        assert!(!is_result_of_op(&label, OverlayOp::Intersection));
    }
}
