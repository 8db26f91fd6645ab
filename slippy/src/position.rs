//! Types for working with positions.

use crate::{
    Error,
    mercator::{MAX_LATITUDE, forward_lat, forward_lng, inverse_lat, inverse_lng},
};

/// Geographical position as understood by the rest of the `geo` ecosystem, where `x` is the
/// longitude and `y` is the latitude.
pub type Position = geo_types::Point;

/// Location projected on the screen or an abstract bitmap.
pub type Pixels = geo_types::Point;

/// Location on the Web Mercator unit square. `x` grows eastward and `y` grows southward, so
/// `(0, 0)` is the north-west corner of the map.
///
/// Projected geographical positions are always inside the square, but edges of a viewport larger
/// than the whole map are not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geographical position with latitude and longitude in degrees.
///
/// The Web Mercator projection of the position is calculated once, when the point is created.
/// There is no way to modify the coordinates in place, so the two never get out of sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
    normalized: NormalizedPoint,
}

impl GeoPoint {
    /// Construct the point, rejecting coordinates which Web Mercator cannot represent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLatitude`] if `lat` is beyond [`MAX_LATITUDE`] and
    /// [`Error::InvalidLongitude`] if `lng` is outside of `-180..=180`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(Error::InvalidLatitude(lat));
        }

        if !(-180. ..=180.).contains(&lng) {
            return Err(Error::InvalidLongitude(lng));
        }

        Ok(Self::project(lat, lng))
    }

    /// Construct the point, pulling coordinates back into the representable range.
    pub fn clamped(lat: f64, lng: f64) -> Self {
        Self::project(
            clamp_or_zero(lat, MAX_LATITUDE),
            clamp_or_zero(lng, 180.),
        )
    }

    /// Geographical position of a point on the unit square. Points outside the square end up
    /// on its edge.
    pub fn from_normalized(point: NormalizedPoint) -> Self {
        Self::clamped(inverse_lat(point.y), inverse_lng(point.x))
    }

    fn project(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            normalized: NormalizedPoint {
                x: forward_lng(lng),
                // Rounding at the pole limit can push it just outside.
                y: forward_lat(lat).clamp(0., 1.),
            },
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Web Mercator projection of this position.
    pub fn normalized(&self) -> NormalizedPoint {
        self.normalized
    }

    /// Same position, but with different latitude.
    ///
    /// # Errors
    ///
    /// See [`GeoPoint::new`].
    pub fn with_lat(&self, lat: f64) -> Result<Self, Error> {
        Self::new(lat, self.lng)
    }

    /// Same position, but with different longitude.
    ///
    /// # Errors
    ///
    /// See [`GeoPoint::new`].
    pub fn with_lng(&self, lng: f64) -> Result<Self, Error> {
        Self::new(self.lat, lng)
    }
}

fn clamp_or_zero(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        0.
    } else {
        value.clamp(-limit, limit)
    }
}

impl From<GeoPoint> for Position {
    fn from(point: GeoPoint) -> Self {
        Self::new(point.lng, point.lat)
    }
}

impl TryFrom<Position> for GeoPoint {
    type Error = Error;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        Self::new(position.y(), position.x())
    }
}
