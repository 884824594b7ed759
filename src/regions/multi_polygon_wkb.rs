// src/regions/multi_polygon_wkb.rs

use bytes::Bytes;
use log::debug;

use crate::config::WkbConfig;
use crate::latlng::multi_polygon_to_degs;
use crate::source::CellGeometrySource;
use crate::split::{multi_polygon_crosses, split_multi_polygon_by_180};
use crate::types::{GeoError, GeoMultiPolygon, H3Index};
use crate::wkb::multi_polygon_to_wkb;

/// Encodes a multipolygon (radians) as EWKB in degrees, splitting every
/// polygon whose exterior crosses the antimeridian.
///
/// # Errors
///
/// Invalid configuration, or a split invariant violation.
pub fn multi_polygon_to_wkb_split(multi_polygon: &GeoMultiPolygon, config: &WkbConfig) -> Result<Bytes, GeoError> {
  config.validate()?;

  let mut out = if multi_polygon_crosses(multi_polygon) {
    let split = split_multi_polygon_by_180(multi_polygon)?;
    debug!(
      "split {} polygons at the antimeridian into {}",
      multi_polygon.len(),
      split.len()
    );
    split
  } else {
    multi_polygon.clone()
  };
  multi_polygon_to_degs(&mut out);
  multi_polygon_to_wkb(&out, config.srid)
}

/// Outlines a cell set through `source` and encodes it with
/// [`multi_polygon_to_wkb_split`].
///
/// # Errors
///
/// Source failures, plus those of [`multi_polygon_to_wkb_split`].
pub fn cells_to_multi_polygon_wkb<S: CellGeometrySource + ?Sized>(
  source: &S,
  cells: &[H3Index],
  config: &WkbConfig,
) -> Result<Bytes, GeoError> {
  let multi_polygon = source.cells_to_multi_polygon(cells)?;
  multi_polygon_to_wkb_split(&multi_polygon, config)
}
