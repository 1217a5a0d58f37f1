//! Coordinate validation and great-circle distance.
//!
//! Everything here is pure: no I/O, no logging. Callers decide how a
//! [`ModelError::InvalidCoordinate`] surfaces (HTTP 400 in the server crate).

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Mean Earth radius used by the spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A point on the globe in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ModelError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self { latitude, longitude })
    }

    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

pub fn validate_latitude(latitude: f64) -> Result<(), ModelError> {
    let (min, max) = LATITUDE_RANGE;
    // NaN fails `contains`, so it is rejected along with out-of-range values
    if !(min..=max).contains(&latitude) {
        return Err(ModelError::InvalidCoordinate(format!(
            "latitude should be between {min} and {max}"
        )));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> Result<(), ModelError> {
    let (min, max) = LONGITUDE_RANGE;
    if !(min..=max).contains(&longitude) {
        return Err(ModelError::InvalidCoordinate(format!(
            "longitude should be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Latitude is checked first; the error names the first bound violated.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ModelError> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}

/// Haversine distance in kilometers between two points.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
