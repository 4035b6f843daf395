use geo_types::{CoordNum, LineString};

use crate::cartesian::Coord;
use crate::contour::Contour;
use crate::impls::ClosedContour;
use crate::polygon::Polygon;

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &Self::Contour {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors().iter()
    }
}

fn closed_contour(ring: &LineString<f64>) -> ClosedContour<Coord> {
    ClosedContour::new(Contour::iter_points(ring).map(|&c| c.into()).collect())
}

fn line_string(contour: &ClosedContour<Coord>) -> LineString<f64> {
    let mut line = LineString::new(contour.points.iter().map(|&c| c.into()).collect());
    line.close();
    line
}

impl From<&geo_types::Polygon<f64>> for crate::impls::Polygon<Coord> {
    fn from(value: &geo_types::Polygon<f64>) -> Self {
        crate::impls::Polygon::new(
            closed_contour(value.exterior()),
            value.interiors().iter().map(closed_contour).collect(),
        )
    }
}

impl From<&crate::impls::Polygon<Coord>> for geo_types::Polygon<f64> {
    fn from(value: &crate::impls::Polygon<Coord>) -> Self {
        geo_types::Polygon::new(
            line_string(&value.outer_contour),
            value.inner_contours.iter().map(line_string).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::CartesianPolygon;
    use geo_types::polygon;

    #[test]
    fn polygon_conversion() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)];
        let converted = crate::impls::Polygon::from(&poly);
        assert_eq!(converted.outer_contour.points.len(), 4);
        assert!(converted.contains_point(&Coord::new(2.0, 2.0)));
        assert_eq!(geo_types::Polygon::from(&converted), poly);
    }
}
