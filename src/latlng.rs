// src/latlng.rs

use crate::constants::{M_180_PI, M_2PI, M_PI, M_PI_180};
use crate::types::{GeoLoop, GeoMultiPolygon, GeoPolygon, LatLng};

/// Converts from decimal degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts from radians to decimal degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Sign of a value as `-1`, `0` or `1`. Applied to a longitude this is the
/// hemisphere discriminator: west, on the prime meridian, east.
#[inline]
#[must_use]
pub fn sign(x: f64) -> i8 {
  if x < 0.0 {
    -1
  } else if x > 0.0 {
    1
  } else {
    0
  }
}

/// Exact equality of both components. Used where the same coordinate was
/// copied rather than recomputed, e.g. duplicate split points.
#[inline]
#[must_use]
pub fn geo_exact_equal(p1: &LatLng, p2: &LatLng) -> bool {
  p1.lat == p2.lat && p1.lng == p2.lng
}

/// Whether a loop's last vertex repeats its first one.
/// Empty loops count as closed.
#[inline]
#[must_use]
pub fn loop_is_closed(verts: &[LatLng]) -> bool {
  match (verts.first(), verts.last()) {
    (Some(first), Some(last)) => geo_exact_equal(first, last),
    _ => true,
  }
}

/// Converts a coordinate from radians to degrees in place.
#[inline]
pub fn lat_lng_to_degs(coord: &mut LatLng) {
  coord.lat = rads_to_degs(coord.lat);
  coord.lng = rads_to_degs(coord.lng);
}

/// Converts loop coordinates from radians to degrees in place.
pub fn loop_to_degs(geoloop: &mut GeoLoop) {
  geoloop.verts.iter_mut().for_each(lat_lng_to_degs);
}

/// Converts every ring of a polygon to degrees in place.
pub fn polygon_to_degs(polygon: &mut GeoPolygon) {
  loop_to_degs(&mut polygon.geoloop);
  polygon.holes.iter_mut().for_each(loop_to_degs);
}

/// Converts every ring of every polygon to degrees in place.
pub fn multi_polygon_to_degs(multi_polygon: &mut GeoMultiPolygon) {
  multi_polygon.polygons.iter_mut().for_each(polygon_to_degs);
}

/// Makes a loop continuous across the antimeridian.
///
/// Every vertex whose longitude is more than PI away from the first vertex's
/// longitude is shifted by a full turn toward the first vertex's side, so the
/// result may contain longitudes outside `(-PI, PI]` (e.g. 181 degrees).
#[must_use]
pub fn extend_boundary_antimeridian(verts: &[LatLng]) -> Vec<LatLng> {
  let Some(first) = verts.first() else {
    return Vec::new();
  };
  let delta = if first.lng < 0.0 { -M_2PI } else { M_2PI };

  verts
    .iter()
    .map(|v| {
      if (v.lng - first.lng).abs() > M_PI {
        LatLng {
          lat: v.lat,
          lng: v.lng + delta,
        }
      } else {
        *v
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_degs_rads_conversion() {
    assert!((degs_to_rads(180.0) - M_PI).abs() < f64::EPSILON);
    assert!((rads_to_degs(M_PI) - 180.0).abs() < 1e-12);
    let original_deg = 37.7749;
    let back = rads_to_degs(degs_to_rads(original_deg));
    assert!((back - original_deg).abs() < 1e-12, "Round trip failed");
  }

  #[test]
  fn test_sign() {
    assert_eq!(sign(-0.5), -1);
    assert_eq!(sign(0.0), 0);
    assert_eq!(sign(-0.0), 0);
    assert_eq!(sign(M_PI), 1);
  }

  #[test]
  fn test_loop_is_closed() {
    let a = LatLng::new(0.1, 0.2);
    let b = LatLng::new(0.3, 0.4);
    assert!(loop_is_closed(&[]));
    assert!(loop_is_closed(&[a]));
    assert!(!loop_is_closed(&[a, b]));
    assert!(loop_is_closed(&[a, b, a]));
  }

  #[test]
  fn test_multi_polygon_to_degs() {
    let ring = GeoLoop::new(vec![LatLng::new(M_PI / 4.0, -M_PI / 2.0), LatLng::new(0.0, M_PI)]);
    let mut multi = GeoMultiPolygon::new(vec![GeoPolygon::new(ring.clone(), vec![ring])]);
    multi_polygon_to_degs(&mut multi);

    for r in multi.polygons[0].rings() {
      assert!((r.verts[0].lat - 45.0).abs() < 1e-12);
      assert!((r.verts[0].lng + 90.0).abs() < 1e-12);
      assert!((r.verts[1].lng - 180.0).abs() < 1e-12);
    }
  }

  #[test]
  fn test_extend_boundary_antimeridian() {
    let verts = [
      LatLng::from_degs(10.0, 179.0),
      LatLng::from_degs(10.0, -179.0),
      LatLng::from_degs(-10.0, -179.0),
      LatLng::from_degs(-10.0, 179.0),
    ];
    let extended = extend_boundary_antimeridian(&verts);
    assert_eq!(extended.len(), 4);
    assert_eq!(extended[0], verts[0]);
    assert!((rads_to_degs(extended[1].lng) - 181.0).abs() < 1e-9, "west vertex moved east");
    assert!((rads_to_degs(extended[2].lng) - 181.0).abs() < 1e-9);
    assert_eq!(extended[3], verts[3]);

    // Starting in the west hemisphere shifts the other way
    let west_first = [verts[1], verts[0]];
    let extended = extend_boundary_antimeridian(&west_first);
    assert!((rads_to_degs(extended[1].lng) + 181.0).abs() < 1e-9);

    assert!(extend_boundary_antimeridian(&[]).is_empty());
  }
}
