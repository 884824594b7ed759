// src/source.rs

use crate::types::{CellBoundary, GeoError, GeoMultiPolygon, H3Index};

/// The grid library producing cell geometry, in radians.
///
/// Implementations report their own failures as [`GeoError::Source`].
pub trait CellGeometrySource {
  /// Boundary of one cell, counter-clockwise.
  fn cell_to_boundary(&self, cell: H3Index) -> Result<CellBoundary, GeoError>;

  /// Outline of a set of cells: one polygon per connected component, with
  /// holes where the set encloses cells outside it.
  fn cells_to_multi_polygon(&self, cells: &[H3Index]) -> Result<GeoMultiPolygon, GeoError>;
}
