// src/wkb/writer.rs

//! Extended WKB (with SRID) encoding of rings, ring arrays and multipolygons.
//!
//! Every geometry starts with a byte order marker, the type code OR'd with
//! [`WKB_SRID_FLAG`] and the SRID. Integers and doubles are written in host
//! order, points as `lng, lat`. Rings are closed on output when their last
//! vertex differs from the first. Sizes are computed up front; the writer
//! fails if it produced a different number of bytes.

use bytes::{BufMut, Bytes, BytesMut};
use log::warn;

use crate::constants::{WKB_BYTE_SIZE, WKB_DOUBLE_SIZE, WKB_INT_SIZE, WKB_SRID_FLAG};
use crate::latlng::loop_is_closed;
use crate::types::{GeoError, GeoLoop, GeoMultiPolygon, GeoPolygon, LatLng, WkbByteOrder, WkbGeometryType};

/// Byte order, type and SRID.
const HEADER_SIZE: usize = WKB_BYTE_SIZE + WKB_INT_SIZE * 2;
const POINT_SIZE: usize = WKB_DOUBLE_SIZE * 2;

/// Number of points written for a ring, closing point included.
#[inline]
fn ring_point_count(verts: &[LatLng]) -> usize {
  if loop_is_closed(verts) {
    verts.len()
  } else {
    verts.len() + 1
  }
}

#[inline]
fn ring_size(verts: &[LatLng]) -> usize {
  WKB_INT_SIZE + ring_point_count(verts) * POINT_SIZE
}

/// Ring count and rings of a polygon, without header.
fn polygon_body_size(polygon: &GeoPolygon) -> usize {
  WKB_INT_SIZE + polygon.rings().map(|ring| ring_size(&ring.verts)).sum::<usize>()
}

/// A single-ring polygon geometry; an empty ring makes a polygon with no rings.
fn boundary_size(verts: &[LatLng]) -> usize {
  let mut size = HEADER_SIZE + WKB_INT_SIZE;
  if !verts.is_empty() {
    size += ring_size(verts);
  }
  size
}

fn multi_polygon_size(multi_polygon: &GeoMultiPolygon) -> usize {
  match multi_polygon.polygons.as_slice() {
    [] => HEADER_SIZE + WKB_INT_SIZE,
    [polygon] => HEADER_SIZE + polygon_body_size(polygon),
    polygons => {
      HEADER_SIZE
        + WKB_INT_SIZE
        + polygons
          .iter()
          .map(|polygon| HEADER_SIZE + polygon_body_size(polygon))
          .sum::<usize>()
    }
  }
}

/// Sized byte buffer the encoders write into.
struct WkbWriter {
  buf: BytesMut,
  expected: usize,
  srid: u32,
}

impl WkbWriter {
  fn with_size(expected: usize, srid: u32) -> Self {
    Self {
      buf: BytesMut::with_capacity(expected),
      expected,
      srid,
    }
  }

  fn write_count(&mut self, count: usize) {
    self.buf.put_u32_ne(count as u32);
  }

  fn write_header(&mut self, geometry_type: WkbGeometryType) {
    self.buf.put_u8(WkbByteOrder::native() as u8);
    self.buf.put_u32_ne(geometry_type as u32 | WKB_SRID_FLAG);
    self.buf.put_u32_ne(self.srid);
  }

  fn write_lat_lng(&mut self, coord: &LatLng) {
    self.buf.put_f64_ne(coord.lng);
    self.buf.put_f64_ne(coord.lat);
  }

  fn write_ring(&mut self, verts: &[LatLng]) {
    self.write_count(ring_point_count(verts));
    for coord in verts {
      self.write_lat_lng(coord);
    }
    if !loop_is_closed(verts) {
      self.write_lat_lng(&verts[0]);
    }
  }

  fn write_boundary(&mut self, verts: &[LatLng]) {
    self.write_header(WkbGeometryType::Polygon);
    if verts.is_empty() {
      self.write_count(0);
    } else {
      self.write_count(1);
      self.write_ring(verts);
    }
  }

  fn write_polygon_body(&mut self, polygon: &GeoPolygon) {
    self.write_count(polygon.num_rings());
    for ring in polygon.rings() {
      self.write_ring(&ring.verts);
    }
  }

  fn finish(self) -> Result<Bytes, GeoError> {
    let written = self.buf.len();
    if written != self.expected {
      let err = GeoError::WkbSizeMismatch {
        expected: self.expected,
        written,
      };
      warn!("{err}");
      return Err(err);
    }
    Ok(self.buf.freeze())
  }
}

/// Encodes one boundary as a polygon with a single ring.
///
/// # Errors
///
/// [`GeoError::WkbSizeMismatch`] if the encoder and its size computation
/// disagree.
pub fn boundary_to_wkb(verts: &[LatLng], srid: u32) -> Result<Bytes, GeoError> {
  let mut writer = WkbWriter::with_size(boundary_size(verts), srid);
  writer.write_boundary(verts);
  writer.finish()
}

/// Encodes boundaries as a multipolygon of single-ring polygons.
///
/// # Errors
///
/// See [`boundary_to_wkb`].
pub fn boundaries_to_wkb(boundaries: &[GeoLoop], srid: u32) -> Result<Bytes, GeoError> {
  let size = HEADER_SIZE
    + WKB_INT_SIZE
    + boundaries
      .iter()
      .map(|boundary| boundary_size(&boundary.verts))
      .sum::<usize>();

  let mut writer = WkbWriter::with_size(size, srid);
  writer.write_header(WkbGeometryType::MultiPolygon);
  writer.write_count(boundaries.len());
  for boundary in boundaries {
    writer.write_boundary(&boundary.verts);
  }
  writer.finish()
}

/// Encodes a multipolygon. A single polygon is written as a polygon geometry,
/// and no polygons at all as a polygon without rings.
///
/// # Errors
///
/// See [`boundary_to_wkb`].
pub fn multi_polygon_to_wkb(multi_polygon: &GeoMultiPolygon, srid: u32) -> Result<Bytes, GeoError> {
  let mut writer = WkbWriter::with_size(multi_polygon_size(multi_polygon), srid);
  match multi_polygon.polygons.as_slice() {
    [] => {
      writer.write_header(WkbGeometryType::Polygon);
      writer.write_count(0);
    }
    [polygon] => {
      writer.write_header(WkbGeometryType::Polygon);
      writer.write_polygon_body(polygon);
    }
    polygons => {
      writer.write_header(WkbGeometryType::MultiPolygon);
      writer.write_count(polygons.len());
      for polygon in polygons {
        writer.write_header(WkbGeometryType::Polygon);
        writer.write_polygon_body(polygon);
      }
    }
  }
  writer.finish()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::WKB_SRID_DEFAULT;

  fn triangle() -> Vec<LatLng> {
    vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 0.0)]
  }

  #[test]
  fn test_ring_point_count() {
    let mut verts = triangle();
    assert_eq!(ring_point_count(&verts), 4);
    verts.push(verts[0]);
    assert_eq!(ring_point_count(&verts), 4, "closed ring is not closed again");
    assert_eq!(ring_point_count(&[]), 0);
  }

  #[test]
  fn test_boundary_sizes() {
    // header + ring count + point count + 4 points
    assert_eq!(boundary_size(&triangle()), 9 + 4 + 4 + 4 * 16);
    assert_eq!(boundary_size(&[]), 13);
    let wkb = boundary_to_wkb(&triangle(), WKB_SRID_DEFAULT).expect("encodes");
    assert_eq!(wkb.len(), 81);
  }

  #[test]
  fn test_multi_polygon_sizes() {
    let polygon = GeoPolygon::new(GeoLoop::new(triangle()), vec![GeoLoop::new(triangle())]);
    let body = 4 + 2 * (4 + 4 * 16);

    let single = GeoMultiPolygon::new(vec![polygon.clone()]);
    assert_eq!(multi_polygon_size(&single), 9 + body);

    let double = GeoMultiPolygon::new(vec![polygon.clone(), polygon]);
    assert_eq!(multi_polygon_size(&double), 9 + 4 + 2 * (9 + body));

    assert_eq!(multi_polygon_size(&GeoMultiPolygon::default()), 13);
    let wkb = multi_polygon_to_wkb(&double, WKB_SRID_DEFAULT).expect("encodes");
    assert_eq!(wkb.len(), multi_polygon_size(&double));
  }

  #[test]
  fn test_finish_detects_size_mismatch() {
    let mut writer = WkbWriter::with_size(10, WKB_SRID_DEFAULT);
    writer.write_header(WkbGeometryType::Polygon);
    assert_eq!(
      writer.finish(),
      Err(GeoError::WkbSizeMismatch {
        expected: 10,
        written: 9
      })
    );
  }
}
