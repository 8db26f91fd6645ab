//! Few places used in the example app.

use slippy::GeoPoint;

/// Where the map starts.
pub fn beijing() -> GeoPoint {
    GeoPoint::clamped(39.99, 116.40)
}

/// Main train station of the city of Wrocław.
/// <https://en.wikipedia.org/wiki/Wroc%C5%82aw_G%C5%82%C3%B3wny_railway_station>
pub fn wroclaw_glowny() -> GeoPoint {
    GeoPoint::clamped(51.09916, 17.03664)
}

/// Null Island, where latitude and longitude are both zero.
pub fn null_island() -> GeoPoint {
    GeoPoint::clamped(0., 0.)
}
