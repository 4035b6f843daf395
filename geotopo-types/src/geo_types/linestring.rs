use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;

impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if LineString::is_closed(self) {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}

impl From<&LineString<f64>> for crate::impls::Contour<crate::cartesian::Coord> {
    fn from(value: &LineString<f64>) -> Self {
        crate::impls::Contour::from_line_points(value.coords().map(|&c| c.into()).collect())
    }
}

impl From<&crate::impls::Contour<crate::cartesian::Coord>> for LineString<f64> {
    fn from(value: &crate::impls::Contour<crate::cartesian::Coord>) -> Self {
        LineString::new(
            Contour::iter_points_closing(value)
                .map(|&c| c.into())
                .collect(),
        )
    }
}
