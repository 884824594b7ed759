// src/math/vec2d.rs

use crate::types::Vec2d;

/// Calculates the magnitude of a 2D Cartesian vector.
#[inline]
#[must_use]
pub(crate) fn v2d_mag(v: &Vec2d) -> f64 {
  (v.x * v.x + v.y * v.y).sqrt()
}

/// Scales the vector to unit length. The zero vector stays zero.
#[inline]
pub(crate) fn v2d_normalize(v: &mut Vec2d) {
  let len = v2d_mag(v);
  if len > 0.0 {
    v.x /= len;
    v.y /= len;
  } else {
    v.x = 0.0;
    v.y = 0.0;
  }
}

/// Which side of the directed line `start -> end` the point lies on:
/// `1` or `-1`, or `0` when it is exactly on the line.
#[inline]
#[must_use]
pub(crate) fn v2d_segment_side(start: &Vec2d, end: &Vec2d, point: &Vec2d) -> i8 {
  let side = (point.x - start.x) * (end.y - start.y) - (end.x - start.x) * (point.y - start.y);
  if side == 0.0 {
    0
  } else if side < 0.0 {
    -1
  } else {
    1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_v2d_mag() {
    let v = Vec2d { x: 3.0, y: 4.0 };
    assert!((v2d_mag(&v) - 5.0).abs() < f64::EPSILON, "magnitude of (3,4) is 5");
    assert_eq!(v2d_mag(&Vec2d::default()), 0.0);
  }

  #[test]
  fn test_v2d_normalize() {
    let mut v = Vec2d { x: 0.0, y: -2.0 };
    v2d_normalize(&mut v);
    assert_eq!(v, Vec2d { x: 0.0, y: -1.0 });

    let mut zero = Vec2d::default();
    v2d_normalize(&mut zero);
    assert_eq!(zero, Vec2d::default());
  }

  #[test]
  fn test_v2d_segment_side() {
    let start = Vec2d { x: 0.0, y: 0.0 };
    let end = Vec2d { x: 1.0, y: 0.0 };
    let above = Vec2d { x: 0.5, y: 1.0 };
    let below = Vec2d { x: 0.5, y: -1.0 };
    let on = Vec2d { x: 2.0, y: 0.0 };

    assert_eq!(v2d_segment_side(&start, &end, &above), -1);
    assert_eq!(v2d_segment_side(&start, &end, &below), 1);
    assert_eq!(v2d_segment_side(&start, &end, &on), 0);
  }
}
