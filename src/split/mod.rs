// src/split/mod.rs

pub mod crossing;
pub mod polar;
pub mod splitter;

pub use crossing::{count_ring_crossings, multi_polygon_crosses, polygon_crosses, ring_crosses, split_180_lat};
pub use polar::split_boundary_polar;
pub use splitter::{split_multi_polygon_by_180, split_polygon};
