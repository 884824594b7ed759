// src/regions/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod multi_polygon_wkb;

pub use multi_polygon_wkb::{cells_to_multi_polygon_wkb, multi_polygon_to_wkb_split};
