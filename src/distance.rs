//! Great-circle distance on a spherical Earth

use crate::types::{Point, Unit};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of fractional digits distances are rounded to
pub const DISTANCE_PRECISION: i32 = 2;

/// Unrounded great-circle distance between two points in kilometers
///
/// Uses the spherical law of cosines in its `atan2` form, which stays well
/// conditioned for both very small and antipodal distances.
pub fn great_circle_km(from: &Point, to: &Point) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lon = to.longitude().to_radians() - from.longitude().to_radians();

    let a = (lat2.cos() * delta_lon.sin()).powi(2)
        + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos()).powi(2);
    let b = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();

    a.sqrt().atan2(b) * EARTH_RADIUS_KM
}

/// Great-circle distance in the requested unit, rounded to two decimals
pub fn distance(from: &Point, to: &Point, unit: Unit) -> f64 {
    let km = great_circle_km(from, to);
    let value = match unit {
        Unit::Kilometers => km,
        Unit::Meters => km * 1000.0,
    };

    round_distance(value)
}

fn round_distance(value: f64) -> f64 {
    let factor = 10f64.powi(DISTANCE_PRECISION);
    (value * factor).round() / factor
}
