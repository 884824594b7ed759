// src/math/mod.rs
#![allow(clippy::module_name_repetitions)] // Common in math modules

pub(crate) mod vec2d;
pub mod vec3d;

pub use vec3d::{
  vec3d_almost_equal, vec3d_cross, vec3d_diff, vec3d_dot, vec3d_from_lat_lng, vec3d_normalize, vec3d_normalized,
  vec3d_scale, vec3d_sum, vec3d_to_lat_lng,
};
