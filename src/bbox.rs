//! Bounding boxes in unit-vector space, used to reject point-in-ring tests
//! cheaply. Unlike a lat/lng box these need no antimeridian special casing.

use crate::math::vec2d::{v2d_normalize, v2d_segment_side};
use crate::math::vec3d::{vec3d_almost_equal, vec3d_cross, vec3d_dot, vec3d_from_lat_lng, vec3d_normalize};
use crate::types::{Bbox3, LatLng, Vec2d, Vec3d};

/// Unit vectors along the six signed coordinate axes: the only points where
/// an arc can reach an extremum of the box without an endpoint being there.
const AXES: [Vec3d; 6] = [
  Vec3d { x: 1.0, y: 0.0, z: 0.0 },
  Vec3d { x: -1.0, y: 0.0, z: 0.0 },
  Vec3d { x: 0.0, y: 1.0, z: 0.0 },
  Vec3d { x: 0.0, y: -1.0, z: 0.0 },
  Vec3d { x: 0.0, y: 0.0, z: 1.0 },
  Vec3d { x: 0.0, y: 0.0, z: -1.0 },
];

impl Bbox3 {
  /// A box containing nothing; merging anything into it yields that thing's box.
  #[must_use]
  pub const fn empty() -> Self {
    Self {
      xmin: f64::INFINITY,
      xmax: f64::NEG_INFINITY,
      ymin: f64::INFINITY,
      ymax: f64::NEG_INFINITY,
      zmin: f64::INFINITY,
      zmax: f64::NEG_INFINITY,
    }
  }
}

/// Box containing exactly one point.
#[inline]
#[must_use]
pub fn bbox3_from_vec3d(v: &Vec3d) -> Bbox3 {
  Bbox3 {
    xmin: v.x,
    xmax: v.x,
    ymin: v.y,
    ymax: v.y,
    zmin: v.z,
    zmax: v.z,
  }
}

/// Grows `bbox` to also contain `other`.
#[inline]
pub fn bbox3_merge(other: &Bbox3, bbox: &mut Bbox3) {
  bbox.xmin = bbox.xmin.min(other.xmin);
  bbox.xmax = bbox.xmax.max(other.xmax);
  bbox.ymin = bbox.ymin.min(other.ymin);
  bbox.ymax = bbox.ymax.max(other.ymax);
  bbox.zmin = bbox.zmin.min(other.zmin);
  bbox.zmax = bbox.zmax.max(other.zmax);
}

#[inline]
fn bbox3_merge_vec3d(v: &Vec3d, bbox: &mut Bbox3) {
  bbox3_merge(&bbox3_from_vec3d(v), bbox);
}

/// Box containing the whole great-circle arc between two unit vectors.
///
/// The arc is projected onto its own plane using `v1` and a vector orthogonal
/// to it as basis. Each axis vector is projected the same way; when the
/// projection lands on the far side of the chord `(v1, v2)` from the origin,
/// the arc passes through that axis extremum and it is merged into the box.
#[must_use]
pub fn bbox3_from_segment_vec3d(v1: &Vec3d, v2: &Vec3d) -> Bbox3 {
  let mut bbox = bbox3_from_vec3d(v1);
  bbox3_merge_vec3d(v2, &mut bbox);

  if vec3d_almost_equal(v1, v2) {
    return bbox;
  }

  let mut normal = vec3d_cross(v1, v2);
  vec3d_normalize(&mut normal);
  let ortho = vec3d_cross(&normal, v1);

  let r1 = Vec2d { x: 1.0, y: 0.0 };
  let r2 = Vec2d {
    x: vec3d_dot(v2, v1),
    y: vec3d_dot(v2, &ortho),
  };
  let origin_side = v2d_segment_side(&r1, &r2, &Vec2d::default());

  for axis in &AXES {
    let mut rx = Vec2d {
      x: vec3d_dot(axis, v1),
      y: vec3d_dot(axis, &ortho),
    };
    v2d_normalize(&mut rx);

    if v2d_segment_side(&r1, &r2, &rx) != origin_side {
      let extremum = Vec3d {
        x: rx.x * v1.x + rx.y * ortho.x,
        y: rx.x * v1.y + rx.y * ortho.y,
        z: rx.x * v1.z + rx.y * ortho.z,
      };
      bbox3_merge_vec3d(&extremum, &mut bbox);
    }
  }
  bbox
}

/// [`bbox3_from_segment_vec3d`] for a pair of coordinates.
#[must_use]
pub fn bbox3_from_segment_lat_lng(coord1: &LatLng, coord2: &LatLng) -> Bbox3 {
  bbox3_from_segment_vec3d(&vec3d_from_lat_lng(coord1), &vec3d_from_lat_lng(coord2))
}

/// Box of a closed loop: the union of all its edge arcs.
/// An empty loop yields [`Bbox3::empty`].
#[must_use]
pub fn bbox3_from_loop(verts: &[LatLng]) -> Bbox3 {
  let Some(first) = verts.first() else {
    return Bbox3::empty();
  };
  let first_vect = vec3d_from_lat_lng(first);
  let mut bbox = bbox3_from_vec3d(&first_vect);
  if verts.len() == 1 {
    return bbox;
  }

  let mut vect = first_vect;
  for i in 0..verts.len() {
    let next_vect = if i + 1 == verts.len() {
      first_vect
    } else {
      vec3d_from_lat_lng(&verts[i + 1])
    };
    if !vec3d_almost_equal(&vect, &next_vect) {
      bbox3_merge(&bbox3_from_segment_vec3d(&vect, &next_vect), &mut bbox);
    }
    vect = next_vect;
  }
  bbox
}

/// Grows a loop box so it also covers the loop's interior, not just its edges.
///
/// Interior points of a region within a hemisphere are normalized positive
/// combinations of boundary points, so they are boundary-box points scaled by
/// at most `1 / m`, where `m` is the box's distance from the origin. A box
/// touching the origin gets no bound at all.
pub fn bbox3_expand_to_interior(bbox: &mut Bbox3) {
  fn gap(min: f64, max: f64) -> f64 {
    if min > 0.0 {
      min
    } else if max < 0.0 {
      -max
    } else {
      0.0
    }
  }
  fn expand(min: &mut f64, max: &mut f64, scale: f64) {
    if *min < 0.0 {
      *min = (*min * scale).max(-1.0);
    }
    if *max > 0.0 {
      *max = (*max * scale).min(1.0);
    }
  }

  let dx = gap(bbox.xmin, bbox.xmax);
  let dy = gap(bbox.ymin, bbox.ymax);
  let dz = gap(bbox.zmin, bbox.zmax);
  let m = (dx * dx + dy * dy + dz * dz).sqrt();
  if m <= 0.0 || !m.is_finite() {
    *bbox = Bbox3 {
      xmin: -1.0,
      xmax: 1.0,
      ymin: -1.0,
      ymax: 1.0,
      zmin: -1.0,
      zmax: 1.0,
    };
    return;
  }
  let scale = 1.0 / m;
  expand(&mut bbox.xmin, &mut bbox.xmax, scale);
  expand(&mut bbox.ymin, &mut bbox.ymax, scale);
  expand(&mut bbox.zmin, &mut bbox.zmax, scale);
}

#[inline]
#[must_use]
pub fn bbox3_contains_vec3d(bbox: &Bbox3, v: &Vec3d) -> bool {
  bbox.xmin <= v.x
    && v.x <= bbox.xmax
    && bbox.ymin <= v.y
    && v.y <= bbox.ymax
    && bbox.zmin <= v.z
    && v.z <= bbox.zmax
}

#[inline]
#[must_use]
pub fn bbox3_contains_lat_lng(bbox: &Bbox3, coord: &LatLng) -> bool {
  bbox3_contains_vec3d(bbox, &vec3d_from_lat_lng(coord))
}
