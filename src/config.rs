// src/config.rs

use crate::constants::{DEFAULT_POLAR_LAT_LIMIT_DEGS, WKB_SRID_DEFAULT};
use crate::latlng::degs_to_rads;
use crate::types::GeoError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for the split-and-encode entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct WkbConfig {
  /// Spatial reference id written into every geometry header.
  #[cfg_attr(feature = "serde", serde(default = "WkbConfig::default_srid"))]
  pub srid: u32,
  /// Latitude (degrees) of the near-pole vertices added to polar cells.
  #[cfg_attr(feature = "serde", serde(default = "WkbConfig::default_polar_lat_limit_degs"))]
  pub polar_lat_limit_degs: f64,
  /// Return cell boundaries as continuous loops across the antimeridian
  /// instead of splitting them.
  #[cfg_attr(feature = "serde", serde(default))]
  pub extend_antimeridian: bool,
}

impl WkbConfig {
  const fn default_srid() -> u32 {
    WKB_SRID_DEFAULT
  }

  const fn default_polar_lat_limit_degs() -> f64 {
    DEFAULT_POLAR_LAT_LIMIT_DEGS
  }

  #[must_use]
  pub fn with_srid(mut self, srid: u32) -> Self {
    self.srid = srid;
    self
  }

  #[must_use]
  pub fn with_polar_lat_limit_degs(mut self, degs: f64) -> Self {
    self.polar_lat_limit_degs = degs;
    self
  }

  #[must_use]
  pub fn with_extend_antimeridian(mut self, extend: bool) -> Self {
    self.extend_antimeridian = extend;
    self
  }

  /// The polar latitude bound in radians.
  #[inline]
  #[must_use]
  pub fn polar_lat_limit(&self) -> f64 {
    degs_to_rads(self.polar_lat_limit_degs)
  }

  /// Checks value ranges.
  ///
  /// # Errors
  ///
  /// Returns [`GeoError::Config`] when the polar latitude bound is not a finite
  /// value in `(0, 90]`.
  pub fn validate(&self) -> Result<(), GeoError> {
    let limit = self.polar_lat_limit_degs;
    if !limit.is_finite() || limit <= 0.0 || limit > 90.0 {
      return Err(GeoError::Config(format!(
        "polar latitude limit must be in (0, 90] degrees, got {limit}"
      )));
    }
    Ok(())
  }

  /// Parses and validates a JSON configuration. Missing fields take defaults.
  #[cfg(feature = "serde")]
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    use serde::de::Error;

    let config: WkbConfig = serde_json::from_str(json)?;
    config.validate().map_err(serde_json::Error::custom)?;
    Ok(config)
  }

  #[cfg(feature = "serde")]
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}

impl Default for WkbConfig {
  fn default() -> Self {
    Self {
      srid: Self::default_srid(),
      polar_lat_limit_degs: Self::default_polar_lat_limit_degs(),
      extend_antimeridian: false,
    }
  }
}
