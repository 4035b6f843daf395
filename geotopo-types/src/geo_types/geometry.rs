use crate::cartesian::Coord;
use crate::error::GeometryError;
use crate::impls::{Contour, MultiPoint, Polygon};
use crate::Geom;

impl TryFrom<geo_types::Geometry<f64>> for Geom<Coord> {
    type Error = GeometryError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        Ok(match value {
            geo_types::Geometry::Point(p) => Geom::Point(p.into()),
            geo_types::Geometry::MultiPoint(mp) => Geom::MultiPoint(MultiPoint::from(
                mp.0.into_iter().map(Coord::from).collect::<Vec<_>>(),
            )),
            geo_types::Geometry::Line(line) => {
                Geom::Contour(Contour::open(vec![line.start.into(), line.end.into()]))
            }
            geo_types::Geometry::LineString(ls) => Geom::Contour(Contour::from(&ls)),
            geo_types::Geometry::Polygon(p) => Geom::Polygon(Polygon::from(&p)),
            geo_types::Geometry::Triangle(t) => Geom::Polygon(Polygon::from(&t.to_polygon())),
            geo_types::Geometry::Rect(r) => Geom::Polygon(Polygon::from(&r.to_polygon())),
            other => {
                return Err(GeometryError::Conversion(format!(
                    "unsupported geometry type: {other:?}"
                )))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use geo_types::{line_string, point, Geometry, MultiLineString};

    #[test]
    fn converts_supported_geometries() {
        let geom = Geom::<Coord>::try_from(Geometry::Point(point!(x: 1.0, y: 2.0)));
        assert_eq!(geom, Ok(Geom::Point(Coord::new(1.0, 2.0))));

        let geom = Geom::<Coord>::try_from(Geometry::LineString(
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)],
        ));
        assert_matches!(geom, Ok(Geom::Contour(c)) if c.len() == 2);
    }

    #[test]
    fn rejects_collections() {
        let geom = Geom::<Coord>::try_from(Geometry::MultiLineString(MultiLineString::new(vec![])));
        assert_matches!(geom, Err(GeometryError::Conversion(_)));
    }
}
