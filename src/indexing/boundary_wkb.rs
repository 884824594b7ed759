// src/indexing/boundary_wkb.rs

use bytes::Bytes;
use log::debug;

use crate::config::WkbConfig;
use crate::latlng::{extend_boundary_antimeridian, loop_to_degs};
use crate::source::CellGeometrySource;
use crate::split::{count_ring_crossings, split_boundary_polar, split_polygon};
use crate::types::{CellBoundary, GeoError, GeoLoop, GeoPolygon, H3Index};
use crate::wkb::{boundaries_to_wkb, boundary_to_wkb};

/// Encodes a cell boundary (radians) as EWKB in degrees, split at the
/// antimeridian.
///
/// * Not crossed: a polygon of the boundary.
/// * Crossed once (the cell encloses a pole): a polygon opened along the
///   antimeridian up to `config.polar_lat_limit_degs`.
/// * Crossed more often: a multipolygon with one polygon per hemisphere part.
///
/// # Errors
///
/// Invalid configuration, or a split invariant violation.
pub fn cell_boundary_to_wkb(boundary: &CellBoundary, config: &WkbConfig) -> Result<Bytes, GeoError> {
  config.validate()?;
  let verts = boundary.as_slice();

  match count_ring_crossings(verts) {
    0 => {
      let mut ring = boundary.to_geoloop();
      loop_to_degs(&mut ring);
      boundary_to_wkb(&ring.verts, config.srid)
    }
    1 => {
      debug!("cell boundary of {} vertices encloses a pole", verts.len());
      let mut ring = split_boundary_polar(verts, config.polar_lat_limit())?;
      loop_to_degs(&mut ring);
      boundary_to_wkb(&ring.verts, config.srid)
    }
    crossings => {
      debug!("cell boundary crosses the antimeridian {crossings} times");
      let polygon = GeoPolygon::new(boundary.to_geoloop(), Vec::new());
      let parts: Vec<GeoLoop> = split_polygon(&polygon)?
        .into_iter()
        .map(|mut part| {
          loop_to_degs(&mut part.geoloop);
          part.geoloop
        })
        .collect();
      boundaries_to_wkb(&parts, config.srid)
    }
  }
}

/// Fetches a cell's boundary from `source` and encodes it with
/// [`cell_boundary_to_wkb`].
///
/// # Errors
///
/// Source failures, plus those of [`cell_boundary_to_wkb`].
pub fn cell_to_boundary_wkb<S: CellGeometrySource + ?Sized>(
  source: &S,
  cell: H3Index,
  config: &WkbConfig,
) -> Result<Bytes, GeoError> {
  let boundary = source.cell_to_boundary(cell)?;
  cell_boundary_to_wkb(&boundary, config)
}

/// The boundary as a loop in degrees. With `extend_antimeridian` set, a
/// boundary crossing the antimeridian is made continuous instead, so its
/// longitudes may leave `[-180, 180]`.
#[must_use]
pub fn cell_boundary_to_loop(boundary: &CellBoundary, config: &WkbConfig) -> GeoLoop {
  let mut geoloop = if config.extend_antimeridian {
    GeoLoop::new(extend_boundary_antimeridian(boundary.as_slice()))
  } else {
    boundary.to_geoloop()
  };
  loop_to_degs(&mut geoloop);
  geoloop
}
