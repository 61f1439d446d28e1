//! Great-circle distance between two points, using the haversine formula.

use crate::coordinates::Coordinates;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between `from` and `to`.
///
/// Inputs are not range-checked; build them through [`Coordinates::new`] when
/// they come from outside the process.
#[inline]
pub fn distance_in_km(from: Coordinates, to: Coordinates) -> f64 {
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
