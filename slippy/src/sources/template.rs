use super::{Attribution, TileSource};
use crate::TileId;

/// Tile server described by a URL template, in which `{z}`, `{x}` and `{y}` get replaced by the
/// tile's coordinates, e.g. `https://tile.example.com/{z}/{x}/{y}.png`.
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    template: String,
    attribution: Attribution,
    tile_size: u32,
    max_zoom: u8,
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>, attribution: Attribution) -> Self {
        Self {
            template: template.into(),
            attribution,
            tile_size: crate::TILE_SIZE,
            max_zoom: crate::MAX_ZOOM,
        }
    }

    /// Tiles served by this source have different size than the default 256px.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Source does not have tiles beyond this zoom level.
    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }
}

impl TileSource for UrlTemplate {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        self.attribution.clone()
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}
