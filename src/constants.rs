//! Geometry and WKB constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Epsilon for floating point comparisons. ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons. ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// Maximum number of cell boundary vertices; worst case is pentagon:
/// 5 cell verts + 5 edge crossings
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

/// Longitude offset of the escape point used by the point-in-ring test when
/// the tested point itself lies on the prime meridian.
pub(crate) const ESCAPE_LNG_NUDGE: f64 = 1e-10;

/// Below this distance from 1.0 the bisector dot product of an arc is too
/// flat to decide whether a point lies on it.
pub(crate) const SHORT_ARC_THRESHOLD: f64 = 1e-10;

/// Default latitude (degrees) of the synthetic near-pole vertices inserted
/// for polar cells.
pub const DEFAULT_POLAR_LAT_LIMIT_DEGS: f64 = 89.9999;

// WKB layout
/// Size of the byte order marker.
pub const WKB_BYTE_SIZE: usize = 1;
/// Size of a WKB integer (type, SRID, counts).
pub const WKB_INT_SIZE: usize = 4;
/// Size of a WKB coordinate value.
pub const WKB_DOUBLE_SIZE: usize = 8;

/// Flag OR'd into the geometry type when an SRID follows it (EWKB).
pub const WKB_SRID_FLAG: u32 = 0x2000_0000;
/// WGS 84, geographic degrees.
pub const WKB_SRID_DEFAULT: u32 = 4326;
