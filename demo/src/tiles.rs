//! Tiles generated on the fly, so the demo works without a network connection.

use std::num::NonZeroUsize;

use egui::{ColorImage, Context};
use lru::LruCache;
use slippy::{Texture, TileId, Tiles, sources::Attribution};

const SIZE: usize = slippy::TILE_SIZE as usize;
const BORDER: usize = 2;

/// Enough for a few screens worth of tiles.
const CACHE_SIZE: usize = 256;

/// Checkerboard, with tiles of each zoom level having slightly different shade.
pub struct GridTiles {
    egui_ctx: Context,
    textures: LruCache<TileId, Texture>,
}

impl GridTiles {
    pub fn new(egui_ctx: Context) -> Self {
        #[allow(clippy::unwrap_used)]
        let cache_size = NonZeroUsize::new(CACHE_SIZE).unwrap();

        Self {
            egui_ctx,
            textures: LruCache::new(cache_size),
        }
    }
}

impl Tiles for GridTiles {
    fn at(&mut self, tile_id: TileId) -> Option<Texture> {
        let egui_ctx = &self.egui_ctx;
        let texture = self.textures.get_or_insert(tile_id, || {
            log::debug!("Generating tile {tile_id}.");
            Texture::from_color_image(render(tile_id), egui_ctx)
        });
        Some(texture.clone())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Generated grid".to_owned(),
            url: "https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames".to_owned(),
        }
    }
}

fn render(tile_id: TileId) -> ColorImage {
    let shade = 255 - tile_id.zoom * 6;
    let fill = if (tile_id.x + tile_id.y) % 2 == 0 {
        [shade, shade, shade - 40]
    } else {
        [shade - 40, shade - 20, shade]
    };

    let mut rgba = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let edge = x < BORDER || y < BORDER || x >= SIZE - BORDER || y >= SIZE - BORDER;
            let [r, g, b] = if edge { [90, 90, 90] } else { fill };
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }

    ColorImage::from_rgba_unmultiplied([SIZE, SIZE], &rgba)
}
