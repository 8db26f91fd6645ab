#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid zoom level")]
pub struct InvalidZoom;

/// Mapnik supports zooms up to 19.
/// <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames#Zoom_levels>
pub const MAX_ZOOM: u8 = 19;

/// Integer zoom level, where the map is made of `2^zoom × 2^zoom` tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zoom(u8);

impl TryFrom<u8> for Zoom {
    type Error = InvalidZoom;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_ZOOM {
            Err(InvalidZoom)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<f64> for Zoom {
    type Error = InvalidZoom;

    /// Only whole, non-negative values are accepted, tiles do not exist in between.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !(0. ..=MAX_ZOOM as f64).contains(&value) || value.fract() != 0. {
            Err(InvalidZoom)
        } else {
            Ok(Self(value as u8))
        }
    }
}

impl From<Zoom> for u8 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(16)
    }
}

impl Zoom {
    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn zoom_in(&mut self) -> Result<(), InvalidZoom> {
        *self = Self::try_from(self.0.checked_add(1).ok_or(InvalidZoom)?)?;
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), InvalidZoom> {
        *self = Self::try_from(self.0.checked_sub(1).ok_or(InvalidZoom)?)?;
        Ok(())
    }
}
