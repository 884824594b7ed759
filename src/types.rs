//! Core geometry data structures.

use crate::constants::MAX_CELL_BNDRY_VERTS;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Represents an H3 cell index.
/// This is a 64-bit unsigned integer, opaque to this crate.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Latitude/longitude coordinates.
///
/// Radians everywhere except right before encoding, where the pipeline
/// converts a finished geometry to degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude.
  pub lat: f64,
  /// Longitude.
  pub lng: f64,
}

impl LatLng {
  /// Creates a coordinate from radians.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Creates a coordinate from degrees, converting to radians.
  #[inline]
  #[must_use]
  pub fn from_degs(lat_degs: f64, lng_degs: f64) -> Self {
    Self {
      lat: lat_degs.to_radians(),
      lng: lng_degs.to_radians(),
    }
  }
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector. Points on the unit sphere are represented this
/// way for the great-circle predicates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Axis-aligned bounding box in unit-vector space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bbox3 {
  pub xmin: f64,
  pub xmax: f64,
  pub ymin: f64,
  pub ymax: f64,
  pub zmin: f64,
  pub zmax: f64,
}

/// Represents the boundary of an H3 cell, as produced by the grid library.
///
/// Contains the number of vertices and an array of `LatLng` coordinates
/// forming the cell boundary in counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of vertices in the boundary.
  pub num_verts: usize,
  /// Array of vertices. The maximum number of vertices is defined by `MAX_CELL_BNDRY_VERTS`.
  /// Unused vertices at the end of the array are not significant.
  pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  /// Builds a boundary from a vertex slice.
  pub fn from_verts(verts: &[LatLng]) -> Result<Self, GeoError> {
    if verts.len() > MAX_CELL_BNDRY_VERTS {
      return Err(GeoError::BoundaryTooLarge { verts: verts.len() });
    }
    let mut boundary = Self::default();
    boundary.verts[..verts.len()].copy_from_slice(verts);
    boundary.num_verts = verts.len();
    Ok(boundary)
  }

  /// The significant vertices.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[LatLng] {
    &self.verts[..self.num_verts.min(MAX_CELL_BNDRY_VERTS)]
  }

  /// Copies the significant vertices into a loop.
  #[must_use]
  pub fn to_geoloop(&self) -> GeoLoop {
    GeoLoop {
      verts: self.as_slice().to_vec(),
    }
  }
}

/// Represents a single closed loop of geographic coordinates.
/// The last vertex is implicitly connected to the first; it is not repeated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  /// Vertices forming the loop.
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  #[inline]
  #[must_use]
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  /// Number of vertices in the loop.
  #[inline]
  #[must_use]
  pub fn num_verts(&self) -> usize {
    self.verts.len()
  }
}

/// Represents a polygon with an outer loop and zero or more inner hole loops.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  /// The outer loop of the polygon.
  pub geoloop: GeoLoop,
  /// Hole loops.
  pub holes: Vec<GeoLoop>,
}

impl GeoPolygon {
  #[must_use]
  pub fn new(geoloop: GeoLoop, holes: Vec<GeoLoop>) -> Self {
    Self { geoloop, holes }
  }

  /// Number of rings, exterior included.
  #[inline]
  #[must_use]
  pub fn num_rings(&self) -> usize {
    1 + self.holes.len()
  }

  /// Iterates the exterior ring followed by the holes.
  pub fn rings(&self) -> impl Iterator<Item = &GeoLoop> {
    std::iter::once(&self.geoloop).chain(self.holes.iter())
  }
}

/// An ordered sequence of polygons, as produced by merging a cell set or by
/// splitting a polygon at the antimeridian.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoMultiPolygon {
  pub polygons: Vec<GeoPolygon>,
}

impl GeoMultiPolygon {
  #[must_use]
  pub fn new(polygons: Vec<GeoPolygon>) -> Self {
    Self { polygons }
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.polygons.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.polygons.is_empty()
  }
}

/// WKB byte order marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum WkbByteOrder {
  /// Big endian (XDR).
  Xdr = 0,
  /// Little endian (NDR).
  Ndr = 1,
}

impl WkbByteOrder {
  /// Byte order of the host; the encoder always writes native order.
  #[inline]
  #[must_use]
  pub const fn native() -> Self {
    if cfg!(target_endian = "little") {
      WkbByteOrder::Ndr
    } else {
      WkbByteOrder::Xdr
    }
  }
}

/// WKB geometry type codes written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum WkbGeometryType {
  Polygon = 3,
  MultiPolygon = 6,
}

/// Errors raised while splitting or encoding geometry.
///
/// Apart from `Config` and `Source`, every variant is an internal invariant
/// violation: the input came from the trusted grid library, so hitting one
/// means a bug or a malformed upstream geometry. The whole call is aborted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
  /// A ring that must be split had fewer than 2 vertices.
  #[error("polygon ring must have at least 2 vertices, got {verts}")]
  DegenerateRing { verts: usize },
  /// A closed ring crossed the meridians an odd number of times.
  #[error("intersection number must be even, got {0}")]
  OddIntersectionCount(usize),
  /// The splitter walked off its vertex arena.
  #[error("vertex index {index} out of bounds ({len} vertices)")]
  VertexIndexOutOfBounds { index: usize, len: usize },
  /// A non-split hole fell inside none of the split exterior rings.
  #[error("hole {index} is not contained in any split polygon")]
  UnassignedHole { index: usize },
  /// The polar path was given a boundary that does not cross the
  /// antimeridian exactly once.
  #[error("polar cell boundary must cross the antimeridian once, got {crossings}")]
  PolarCrossingCount { crossings: usize },
  /// More vertices than a cell boundary can hold.
  #[error("cell boundary cannot hold {verts} vertices")]
  BoundaryTooLarge { verts: usize },
  /// The encoder wrote a different number of bytes than it sized.
  #[error("# of written bytes ({written}) must match allocation size ({expected})")]
  WkbSizeMismatch { expected: usize, written: usize },
  /// Invalid configuration value.
  #[error("invalid configuration: {0}")]
  Config(String),
  /// The grid library failed to produce geometry.
  #[error("grid source error: {0}")]
  Source(String),
}
