// src/split/polar.rs

use log::warn;

use crate::constants::M_PI;
use crate::latlng::sign;
use crate::split::crossing::{count_ring_crossings, edge_crosses_180, loop_edges, split_180_lat};
use crate::types::{GeoError, GeoLoop, LatLng};

/// Opens a cell boundary around a pole along the antimeridian.
///
/// A boundary enclosing a pole crosses the antimeridian exactly once. At that
/// edge four vertices are inserted: the crossing point on the departing side,
/// two points at `lat_limit` (radians, toward the enclosed pole) on either
/// side of the antimeridian, and the crossing point again on the arriving
/// side. The result is a single ring that renders as a polar cap on flat maps.
///
/// # Errors
///
/// [`GeoError::PolarCrossingCount`] unless the boundary crosses exactly once.
pub fn split_boundary_polar(verts: &[LatLng], lat_limit: f64) -> Result<GeoLoop, GeoError> {
  let crossings = count_ring_crossings(verts);
  if crossings != 1 {
    let err = GeoError::PolarCrossingCount { crossings };
    warn!("{err}");
    return Err(err);
  }

  let mut out = Vec::with_capacity(verts.len() + 4);
  for (cur, next) in loop_edges(verts) {
    out.push(*cur);
    if !edge_crosses_180(cur.lng, next.lng) {
      continue;
    }

    let split_lat = split_180_lat(cur, next);
    let lng = if cur.lng < 0.0 { -M_PI } else { M_PI };
    let pole_lat = f64::from(sign(split_lat)) * lat_limit;

    out.push(LatLng::new(split_lat, lng));
    out.push(LatLng::new(pole_lat, lng));
    out.push(LatLng::new(pole_lat, -lng));
    out.push(LatLng::new(split_lat, -lng));
  }
  Ok(GeoLoop::new(out))
}
