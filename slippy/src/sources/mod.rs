//! Tile server definitions, turning a [`TileId`] into the URL of the raster image. Make sure you
//! follow terms of usage of the particular source.

mod openstreetmap;
mod template;

use crate::TileId;
pub use openstreetmap::OpenStreetMap;
pub use template::UrlTemplate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub text: String,
    pub url: String,
}

/// Remote tile server definition.
pub trait TileSource {
    fn tile_url(&self, tile_id: TileId) -> String;
    fn attribution(&self) -> Attribution;

    /// Size of each tile, should be a multiple of 256.
    fn tile_size(&self) -> u32 {
        crate::TILE_SIZE
    }

    fn max_zoom(&self) -> u8 {
        crate::MAX_ZOOM
    }
}
