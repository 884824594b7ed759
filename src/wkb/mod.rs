// src/wkb/mod.rs

pub mod writer;

pub use writer::{boundaries_to_wkb, boundary_to_wkb, multi_polygon_to_wkb};
