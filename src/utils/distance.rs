use crate::model::event::Coordinates;
use crate::utils::constants::{EARTH_RADIUS_KM, MIN_ETA_MINUTES};

/// Great-circle distance in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2f64).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2f64).sin().powi(2);
    let c = 2f64 * a.sqrt().atan2((1f64 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Travel time rounded to whole minutes, never below `MIN_ETA_MINUTES`.
pub fn eta_minutes(distance_km: f64, average_speed_kmh: f64) -> u32 {
    let minutes = (distance_km / average_speed_kmh * 60f64).round();
    (minutes as u32).max(MIN_ETA_MINUTES)
}
