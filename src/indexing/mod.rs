// src/indexing/mod.rs

pub mod boundary_wkb;

pub use boundary_wkb::{cell_boundary_to_loop, cell_boundary_to_wkb, cell_to_boundary_wkb};
