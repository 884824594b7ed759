// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};

/// Components equal, or closer than machine epsilon.
#[inline]
fn fp_equal(a: f64, b: f64) -> bool {
  a == b || (a - b).abs() < f64::EPSILON
}

/// Calculate the 3D Cartesian coordinate on a unit sphere from latitude and longitude.
///
/// # Arguments
///
/// * `geo` - The latitude and longitude of the point (in radians).
#[inline]
#[must_use]
pub fn vec3d_from_lat_lng(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lng.sin() * r,
    z: geo.lat.sin(),
  }
}

/// Inverse of [`vec3d_from_lat_lng`]. Longitude is undefined (returned as 0)
/// at the poles.
#[inline]
#[must_use]
pub fn vec3d_to_lat_lng(v: &Vec3d) -> LatLng {
  LatLng {
    lat: v.z.clamp(-1.0, 1.0).asin(),
    lng: v.y.atan2(v.x),
  }
}

/// Scales the vector to unit length. The zero vector stays zero.
#[inline]
pub fn vec3d_normalize(v: &mut Vec3d) {
  let len = vec3d_dot(v, v).sqrt();
  if len > 0.0 {
    v.x /= len;
    v.y /= len;
    v.z /= len;
  } else {
    *v = Vec3d::default();
  }
}

/// Normalized copy of `v`.
#[inline]
#[must_use]
pub fn vec3d_normalized(v: &Vec3d) -> Vec3d {
  let mut out = *v;
  vec3d_normalize(&mut out);
  out
}

#[inline]
#[must_use]
pub fn vec3d_cross(v1: &Vec3d, v2: &Vec3d) -> Vec3d {
  Vec3d {
    x: v1.y * v2.z - v1.z * v2.y,
    y: v1.z * v2.x - v1.x * v2.z,
    z: v1.x * v2.y - v1.y * v2.x,
  }
}

#[inline]
#[must_use]
pub fn vec3d_dot(v1: &Vec3d, v2: &Vec3d) -> f64 {
  v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

#[inline]
#[must_use]
pub fn vec3d_sum(v1: &Vec3d, v2: &Vec3d) -> Vec3d {
  Vec3d {
    x: v1.x + v2.x,
    y: v1.y + v2.y,
    z: v1.z + v2.z,
  }
}

#[inline]
#[must_use]
pub fn vec3d_diff(v1: &Vec3d, v2: &Vec3d) -> Vec3d {
  Vec3d {
    x: v1.x - v2.x,
    y: v1.y - v2.y,
    z: v1.z - v2.z,
  }
}

#[inline]
pub fn vec3d_scale(v: &mut Vec3d, factor: f64) {
  v.x *= factor;
  v.y *= factor;
  v.z *= factor;
}

/// Component-wise comparison within machine epsilon. Absorbs the round-trip
/// error of converting the same `LatLng` twice.
#[inline]
#[must_use]
pub fn vec3d_almost_equal(v1: &Vec3d, v2: &Vec3d) -> bool {
  fp_equal(v1.x, v2.x) && fp_equal(v1.y, v2.y) && fp_equal(v1.z, v2.z)
}
