#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_possible_truncation)] // WKB counts are u32
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended
#![allow(clippy::similar_names)] // Can be common in math-heavy code
#![allow(clippy::float_cmp)] // Copied coordinates are compared exactly

//! `xs-h3-wkb` turns H3 cell boundaries and cell-set outlines into extended
//! WKB, splitting geometry that crosses the antimeridian so that every ring
//! stays within one longitude hemisphere.
//!
//! Cell geometry comes from a [`CellGeometrySource`]; everything is radians
//! until the final conversion to degrees right before encoding.

// Declare modules
pub mod bbox;
pub mod config;
pub mod constants;
pub mod indexing;
pub mod latlng;
pub mod math;
pub mod polygon;
pub mod regions;
pub mod source;
pub mod split;
pub mod types;
pub mod wkb;

// Re-export key public types and functions for easier use
pub use config::WkbConfig;
pub use constants::{MAX_CELL_BNDRY_VERTS, WKB_SRID_DEFAULT};
pub use latlng::{
  degs_to_rads, extend_boundary_antimeridian, loop_to_degs, multi_polygon_to_degs, polygon_to_degs, rads_to_degs,
};
pub use polygon::{count_polygon_vertices, ring_position, segment_intersect, RingPosition, SegmentIntersection};
pub use source::CellGeometrySource;
pub use types::{
  Bbox3, CellBoundary, GeoError, GeoLoop, GeoMultiPolygon, GeoPolygon, H3Index, LatLng, Vec2d, Vec3d, WkbByteOrder,
  WkbGeometryType,
};

pub use indexing::{cell_boundary_to_loop, cell_boundary_to_wkb, cell_to_boundary_wkb};
pub use regions::{cells_to_multi_polygon_wkb, multi_polygon_to_wkb_split};
pub use split::{
  count_ring_crossings, multi_polygon_crosses, polygon_crosses, ring_crosses, split_180_lat, split_boundary_polar,
  split_multi_polygon_by_180, split_polygon,
};
pub use wkb::{boundaries_to_wkb, boundary_to_wkb, multi_polygon_to_wkb};
