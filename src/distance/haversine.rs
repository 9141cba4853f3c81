use crate::config::constant::{EARTH_RADIUS_KM, ROAD_FACTOR};
use crate::domain::types::Coordinate;

/// Great-circle distance in kilometres.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.lon.to_radians() - from.lon.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    c * EARTH_RADIUS_KM
}

/// Estimated road distance, whole kilometres (ties to even).
pub fn road_distance_km(from: &Coordinate, to: &Coordinate) -> u32 {
    (haversine_km(from, to) * ROAD_FACTOR).round_ties_even() as u32
}
