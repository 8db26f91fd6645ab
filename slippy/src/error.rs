use crate::{tiles::TileId, zoom::InvalidZoom};

/// Rejected inputs. Everything is validated before any arithmetic runs, so a failed operation
/// never leaves partially updated state behind.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("latitude {0} is beyond the Web Mercator limit of ±85.0511°")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside of the -180..=180 range")]
    InvalidLongitude(f64),

    #[error(transparent)]
    InvalidZoom(#[from] InvalidZoom),

    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("tile size must be positive")]
    InvalidTileSize,

    /// Resolved tile range does not fit the tile grid. Should never happen.
    #[error("tile {0} is outside of the tile grid")]
    TileIndexOutOfRange(TileId),
}
