// src/split/crossing.rs

use crate::constants::M_PI;
use crate::latlng::sign;
use crate::math::vec3d::{vec3d_cross, vec3d_from_lat_lng, vec3d_normalize};
use crate::types::{GeoMultiPolygon, GeoPolygon, LatLng, Vec3d};

/// Whether the edge `lng -> next_lng` crosses the antimeridian: the
/// hemisphere changes and the longitudes are more than half a turn apart.
#[inline]
#[must_use]
pub(crate) fn edge_crosses_180(lng: f64, next_lng: f64) -> bool {
  sign(lng) != sign(next_lng) && (lng - next_lng).abs() > M_PI
}

/// Consecutive vertex pairs of a closed loop, the last one wrapping to the
/// first. Yields nothing for fewer than two vertices.
pub(crate) fn loop_edges(verts: &[LatLng]) -> impl Iterator<Item = (&LatLng, &LatLng)> {
  let n = if verts.len() < 2 { 0 } else { verts.len() };
  (0..n).map(move |i| (&verts[i], &verts[(i + 1) % n]))
}

/// Whether any edge of the loop crosses the antimeridian.
#[must_use]
pub fn ring_crosses(verts: &[LatLng]) -> bool {
  loop_edges(verts).any(|(cur, next)| edge_crosses_180(cur.lng, next.lng))
}

/// Number of loop edges crossing the antimeridian.
///
/// A cell boundary crossed once encloses a pole; twice or more means the
/// cell straddles the antimeridian.
#[must_use]
pub fn count_ring_crossings(verts: &[LatLng]) -> usize {
  loop_edges(verts)
    .filter(|(cur, next)| edge_crosses_180(cur.lng, next.lng))
    .count()
}

/// A polygon needs splitting when its exterior ring crosses.
#[inline]
#[must_use]
pub fn polygon_crosses(polygon: &GeoPolygon) -> bool {
  ring_crosses(&polygon.geoloop.verts)
}

#[must_use]
pub fn multi_polygon_crosses(multi_polygon: &GeoMultiPolygon) -> bool {
  multi_polygon.polygons.iter().any(polygon_crosses)
}

/// Latitude where the great circle through `coord1` and `coord2` meets the
/// meridian plane (0/180) on the side the edge crosses.
///
/// The edge is expected to change hemisphere; which of the two meridians
/// (prime or anti) is met follows from the edge's orientation.
#[must_use]
pub fn split_180_lat(coord1: &LatLng, coord2: &LatLng) -> f64 {
  let p1 = vec3d_from_lat_lng(coord1);
  let p2 = vec3d_from_lat_lng(coord2);
  let normal = vec3d_cross(&p1, &p2);

  // y of the meridian circle's normal
  let y = if coord1.lng < 0.0 || coord2.lng > 0.0 { -1.0 } else { 1.0 };

  // s = normal x (0, y, 0)
  let mut s = Vec3d {
    x: -(normal.z * y),
    y: 0.0,
    z: normal.x * y,
  };
  vec3d_normalize(&mut s);

  s.z.clamp(-1.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::latlng::rads_to_degs;
  use crate::types::GeoLoop;

  fn square(lng_a: f64, lng_b: f64) -> Vec<LatLng> {
    vec![
      LatLng::from_degs(10.0, lng_a),
      LatLng::from_degs(10.0, lng_b),
      LatLng::from_degs(-10.0, lng_b),
      LatLng::from_degs(-10.0, lng_a),
    ]
  }

  #[test]
  fn test_ring_crosses() {
    assert!(ring_crosses(&square(179.0, -179.0)));
    assert!(!ring_crosses(&square(-170.0, -160.0)));
    // Sign flip near the prime meridian is not a crossing
    assert!(!ring_crosses(&square(-1.0, 1.0)));
    assert!(!ring_crosses(&[]));
    assert!(!ring_crosses(&[LatLng::from_degs(0.0, 179.0)]));
  }

  #[test]
  fn test_count_ring_crossings() {
    assert_eq!(count_ring_crossings(&square(179.0, -179.0)), 2);
    assert_eq!(count_ring_crossings(&square(10.0, 20.0)), 0);

    // Loop around the north pole
    let polar: Vec<LatLng> = [30.0, 90.0, 150.0, -150.0, -90.0, -30.0]
      .iter()
      .map(|lng| LatLng::from_degs(89.0, *lng))
      .collect();
    assert_eq!(count_ring_crossings(&polar), 1);
  }

  #[test]
  fn test_polygon_crosses_uses_exterior_only() {
    let crossing_hole = GeoLoop::new(square(179.5, -179.5));
    let polygon = GeoPolygon::new(GeoLoop::new(square(170.0, 175.0)), vec![crossing_hole]);
    assert!(!polygon_crosses(&polygon));

    let multi = GeoMultiPolygon::new(vec![polygon, GeoPolygon::new(GeoLoop::new(square(179.0, -179.0)), vec![])]);
    assert!(multi_polygon_crosses(&multi));
    assert!(!multi_polygon_crosses(&GeoMultiPolygon::default()));
  }

  #[test]
  fn test_split_180_lat() {
    let a = LatLng::from_degs(10.0, 179.0);
    let b = LatLng::from_degs(10.0, -179.0);
    let lat = rads_to_degs(split_180_lat(&a, &b));
    // The arc bulges poleward between its endpoints
    assert!(lat > 10.0 && lat < 10.01, "got {lat}");
    assert!((split_180_lat(&b, &a) - split_180_lat(&a, &b)).abs() < 1e-15);

    let south = rads_to_degs(split_180_lat(&LatLng::from_degs(-20.0, 170.0), &LatLng::from_degs(0.0, -170.0)));
    assert!(south < 0.0 && south > -20.0, "got {south}");

    // Prime meridian near the pole
    let prime = rads_to_degs(split_180_lat(&LatLng::from_degs(80.0, 10.0), &LatLng::from_degs(80.0, -10.0)));
    assert!(prime > 80.0 && prime < 90.0, "got {prime}");
  }
}
