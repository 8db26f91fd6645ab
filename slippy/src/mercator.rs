//! Project the lat/lng coordinates onto the unit square using the Web Mercator.
//! <https://en.wikipedia.org/wiki/Web_Mercator_projection>
//! <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use crate::zoom::Zoom;

// zoom level   tile coverage  number of tiles  tile size(*) in degrees
// 0            1 tile         1 tile           360° x 170.1022°
// 1            2 × 2 tiles    4 tiles          180° x 85.0511°
// 2            4 × 4 tiles    16 tiles         90° x [variable]

/// Size of a single tile in pixels, used by most of the tile sources.
pub const TILE_SIZE: u32 = 256;

/// Latitude at which the Web Mercator square ends, `atan(sinh(π))` in degrees. The projection
/// diverges towards the poles, so anything beyond this is not representable.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Project the longitude onto the `0..=1` range, growing eastward.
pub fn forward_lng(lng: f64) -> f64 {
    (lng + 180.) / 360.
}

/// Project the latitude onto the `0..=1` range, growing southward. Diverges for latitudes
/// beyond [`MAX_LATITUDE`].
pub fn forward_lat(lat: f64) -> f64 {
    let y = (FRAC_PI_4 + lat.to_radians() / 2.).tan().ln();
    0.5 - y / TAU
}

/// Inverse of [`forward_lng`].
pub fn inverse_lng(x: f64) -> f64 {
    360. * x - 180.
}

/// Inverse of [`forward_lat`].
pub fn inverse_lat(y: f64) -> f64 {
    let y = (0.5 - y) * TAU;
    (2. * y.exp().atan() - FRAC_PI_2) * 180. / PI
}

/// Zoom specifies how many tiles are in the whole map. For example, zoom 0 means that the whole
/// map is just one tile, zoom 1 means that it is 2x2 tiles, and so on.
pub fn total_tiles(zoom: Zoom) -> u32 {
    2u32.pow(zoom.level() as u32)
}

/// Size of the whole map at the given zoom, in pixels.
pub fn total_pixels(zoom: Zoom, tile_size: u32) -> f64 {
    total_tiles(zoom) as f64 * tile_size as f64
}

/// Convert a length in pixels into a length on the projected unit square.
pub fn projected_distance(pixels: f64, zoom: Zoom, tile_size: u32) -> f64 {
    pixels / total_pixels(zoom, tile_size)
}
