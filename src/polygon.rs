// src/polygon.rs

//! Great-circle predicates on rings: point-in-ring with boundary detection,
//! arc/arc intersection and point-on-arc tests. All inputs are radians.

use crate::bbox::bbox3_contains_vec3d;
use crate::constants::{ESCAPE_LNG_NUDGE, SHORT_ARC_THRESHOLD};
use crate::latlng::sign;
use crate::math::vec3d::{
  vec3d_almost_equal, vec3d_cross, vec3d_diff, vec3d_dot, vec3d_from_lat_lng, vec3d_normalize, vec3d_normalized,
  vec3d_scale, vec3d_sum,
};
use crate::types::{Bbox3, GeoLoop, GeoPolygon, LatLng, Vec3d};

/// Where a point lies relative to a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
  Outside,
  /// On a vertex or an edge.
  Boundary,
  Inside,
}

/// How two great-circle arcs meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersection {
  Disjoint,
  /// An endpoint of one arc lies on the other.
  Touching,
  Crossing,
}

/// Where a point on an arc's great circle lies relative to the arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcPosition {
  Outside,
  /// Coincides with one of the endpoints.
  Endpoint,
  Inside,
}

/// Total number of vertices over all rings of a polygon, and the ring count.
#[inline]
#[must_use]
pub fn count_polygon_vertices(polygon: &GeoPolygon) -> (usize, usize) {
  let verts = polygon.rings().map(GeoLoop::num_verts).sum();
  (verts, polygon.num_rings())
}

/// Locates `coord` relative to a ring lying in one longitude hemisphere.
///
/// `sign_of_ring` is the hemisphere of the ring (`-1` west, `1` east) and `bbox` its
/// unit-vector box. The test counts crossings between the ring and a short
/// arc from the point to its mirror across the prime meridian, which is
/// always outside a ring confined to one hemisphere.
#[must_use]
pub fn ring_position(ring: &[LatLng], sign_of_ring: i8, bbox: &Bbox3, coord: &LatLng) -> RingPosition {
  let point_sign = sign(coord.lng);
  if point_sign != 0 && point_sign != sign_of_ring {
    return RingPosition::Outside;
  }

  let vect = vec3d_from_lat_lng(coord);
  if !bbox3_contains_vec3d(bbox, &vect) {
    return RingPosition::Outside;
  }

  let escape = LatLng {
    lat: coord.lat,
    lng: if coord.lng == 0.0 {
      -f64::from(sign_of_ring) * ESCAPE_LNG_NUDGE
    } else {
      -coord.lng
    },
  };
  let escape_vect = vec3d_from_lat_lng(&escape);

  // A one-vertex ring has a point-sized box; passing it means a match.
  if ring.len() == 1 {
    return RingPosition::Inside;
  }

  let mut crossings = 0usize;
  for (i, cur) in ring.iter().enumerate() {
    let cur_vect = vec3d_from_lat_lng(cur);
    if vec3d_almost_equal(&vect, &cur_vect) {
      return RingPosition::Boundary;
    }

    let next_vect = vec3d_from_lat_lng(&ring[(i + 1) % ring.len()]);
    if vec3d_almost_equal(&cur_vect, &next_vect) {
      continue;
    }
    match segment_intersect(&cur_vect, &next_vect, &vect, &escape_vect) {
      SegmentIntersection::Touching => return RingPosition::Boundary,
      SegmentIntersection::Crossing => crossings += 1,
      SegmentIntersection::Disjoint => {}
    }
  }

  if crossings % 2 == 0 {
    RingPosition::Outside
  } else {
    RingPosition::Inside
  }
}

/// Intersects arc `v1 -> v2` with arc `u1 -> u2` (unit vectors).
#[must_use]
pub fn segment_intersect(v1: &Vec3d, v2: &Vec3d, u1: &Vec3d, u2: &Vec3d) -> SegmentIntersection {
  let mut vn = vec3d_cross(v1, v2);
  vec3d_normalize(&mut vn);
  let mut un = vec3d_cross(u1, u2);
  vec3d_normalize(&mut un);

  // Both arcs on the same great circle
  let normal_dot = vec3d_dot(&vn, &un).abs();
  if normal_dot == 1.0 || (normal_dot - 1.0).abs() < f64::EPSILON {
    let pos = [(v1, v2, u1), (v1, v2, u2), (u1, u2, v1), (u1, u2, v2)]
      .into_iter()
      .map(|(a, b, p)| point_arc_position(a, b, p))
      .find(|pos| *pos != ArcPosition::Outside)
      .unwrap_or(ArcPosition::Outside);
    return match pos {
      ArcPosition::Outside => SegmentIntersection::Disjoint,
      ArcPosition::Endpoint => SegmentIntersection::Touching,
      ArcPosition::Inside => SegmentIntersection::Crossing,
    };
  }

  let v1_side = sign(vec3d_dot(&un, v1));
  let v2_side = sign(vec3d_dot(&un, v2));
  let u1_side = sign(vec3d_dot(&vn, u1));
  let u2_side = sign(vec3d_dot(&vn, u2));

  if v1_side == v2_side && v1_side != 0 {
    return SegmentIntersection::Disjoint;
  }
  if u1_side == u2_side && u2_side != 0 {
    return SegmentIntersection::Disjoint;
  }

  let v_straddles = v1_side + v2_side == 0 && v1_side != 0;
  let u_straddles = u1_side + u2_side == 0 && u1_side != 0;
  if !(v_straddles && u_straddles) {
    return SegmentIntersection::Touching;
  }

  // The great circles meet at two antipodal points; either may be on both arcs.
  let mut intersect = vec3d_normalized(&vec3d_cross(&vn, &un));
  for _ in 0..2 {
    if point_arc_position(v1, v2, &intersect) != ArcPosition::Outside
      && point_arc_position(u1, u2, &intersect) != ArcPosition::Outside
    {
      return SegmentIntersection::Crossing;
    }
    vec3d_scale(&mut intersect, -1.0);
  }
  SegmentIntersection::Disjoint
}

/// Locates `p`, assumed to be on the great circle of arc `v1 -> v2`, relative
/// to the (shorter) arc.
#[must_use]
pub fn point_arc_position(v1: &Vec3d, v2: &Vec3d, p: &Vec3d) -> ArcPosition {
  if vec3d_almost_equal(p, v1) || vec3d_almost_equal(p, v2) {
    return ArcPosition::Endpoint;
  }

  let middle = vec3d_normalized(&vec3d_sum(v1, v2));
  let min_similarity = vec3d_dot(v1, &middle);

  let inside = if (1.0 - min_similarity).abs() > SHORT_ARC_THRESHOLD {
    // Points on the arc are closer to its bisector than the endpoints are
    vec3d_dot(p, &middle) > min_similarity
  } else {
    // Too short for the bisector test: on the arc the endpoints lie in
    // opposite directions from the point.
    let d1 = vec3d_normalized(&vec3d_diff(p, v1));
    let d2 = vec3d_normalized(&vec3d_diff(p, v2));
    vec3d_dot(&d1, &d2) < 0.0
  };

  if inside {
    ArcPosition::Inside
  } else {
    ArcPosition::Outside
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bbox::{bbox3_expand_to_interior, bbox3_from_loop};

  fn east_square() -> Vec<LatLng> {
    vec![
      LatLng::from_degs(-10.0, 10.0),
      LatLng::from_degs(-10.0, 30.0),
      LatLng::from_degs(10.0, 30.0),
      LatLng::from_degs(10.0, 10.0),
    ]
  }

  fn interior_box(ring: &[LatLng]) -> Bbox3 {
    let mut bbox = bbox3_from_loop(ring);
    bbox3_expand_to_interior(&mut bbox);
    bbox
  }

  #[test]
  fn test_count_polygon_vertices() {
    let outer = GeoLoop::new(east_square());
    let hole = GeoLoop::new(east_square()[..3].to_vec());
    let polygon = GeoPolygon::new(outer, vec![hole]);
    assert_eq!(count_polygon_vertices(&polygon), (7, 2));
    assert_eq!(count_polygon_vertices(&GeoPolygon::default()), (0, 1));
  }

  #[test]
  fn test_ring_position() {
    let ring = east_square();
    let bbox = interior_box(&ring);

    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(0.0, 20.0)),
      RingPosition::Inside
    );
    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(5.0, 12.0)),
      RingPosition::Inside
    );
    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(0.0, 40.0)),
      RingPosition::Outside
    );
    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(20.0, 20.0)),
      RingPosition::Outside
    );
    // Vertex
    assert_eq!(ring_position(&ring, 1, &bbox, &ring[2]), RingPosition::Boundary);
    // Other hemisphere is rejected up front
    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(0.0, -20.0)),
      RingPosition::Outside
    );
  }

  #[test]
  fn test_ring_position_single_vertex() {
    let ring = [LatLng::from_degs(5.0, 5.0)];
    let bbox = bbox3_from_loop(&ring);
    assert_eq!(ring_position(&ring, 1, &bbox, &ring[0]), RingPosition::Inside);
    assert_eq!(
      ring_position(&ring, 1, &bbox, &LatLng::from_degs(5.0, 6.0)),
      RingPosition::Outside
    );
  }

  #[test]
  fn test_segment_intersect() {
    let v1 = vec3d_from_lat_lng(&LatLng::from_degs(-10.0, 0.0));
    let v2 = vec3d_from_lat_lng(&LatLng::from_degs(10.0, 0.0));
    let u1 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, -10.0));
    let u2 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 10.0));
    assert_eq!(segment_intersect(&v1, &v2, &u1, &u2), SegmentIntersection::Crossing);

    // Same great circles, but the arcs are far apart
    let w1 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 20.0));
    let w2 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 30.0));
    assert_eq!(segment_intersect(&v1, &v2, &w1, &w2), SegmentIntersection::Disjoint);

    // Arcs on opposite sides of the sphere share no point
    let far1 = vec3d_from_lat_lng(&LatLng::from_degs(-10.0, 180.0));
    let far2 = vec3d_from_lat_lng(&LatLng::from_degs(10.0, 180.0));
    assert_eq!(segment_intersect(&far1, &far2, &u1, &u2), SegmentIntersection::Disjoint);

    // One arc starts on the other
    let origin = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 0.0));
    assert_eq!(segment_intersect(&v1, &v2, &origin, &w1), SegmentIntersection::Touching);
  }

  #[test]
  fn test_segment_intersect_collinear() {
    let a = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 0.0));
    let b = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 20.0));
    let c = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 10.0));
    let d = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 30.0));
    assert_eq!(segment_intersect(&a, &b, &c, &d), SegmentIntersection::Crossing);
  }

  #[test]
  fn test_point_arc_position() {
    let v1 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 0.0));
    let v2 = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 40.0));
    let mid = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 20.0));
    let beyond = vec3d_from_lat_lng(&LatLng::from_degs(0.0, 60.0));

    assert_eq!(point_arc_position(&v1, &v2, &v1), ArcPosition::Endpoint);
    assert_eq!(point_arc_position(&v1, &v2, &mid), ArcPosition::Inside);
    assert_eq!(point_arc_position(&v1, &v2, &beyond), ArcPosition::Outside);
  }

  #[test]
  fn test_point_arc_position_short_arc() {
    let v1 = vec3d_from_lat_lng(&LatLng::new(0.0, 0.0));
    let v2 = vec3d_from_lat_lng(&LatLng::new(0.0, 2e-6));
    let mid = vec3d_from_lat_lng(&LatLng::new(0.0, 1e-6));
    let beyond = vec3d_from_lat_lng(&LatLng::new(0.0, 4e-6));
    assert_eq!(point_arc_position(&v1, &v2, &mid), ArcPosition::Inside);
    assert_eq!(point_arc_position(&v1, &v2, &beyond), ArcPosition::Outside);
  }
}
