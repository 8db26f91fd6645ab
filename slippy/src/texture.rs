use egui::{Color32, ColorImage, Context, Mesh, Painter, Rect, Shape, TextureHandle, pos2};
use image::ImageError;

use crate::{TileId, sources::Attribution};

/// Source of tile images to be put together to render the map. How they are obtained, e.g.
/// downloaded or generated, is up to the implementation.
pub trait Tiles {
    fn at(&mut self, tile_id: TileId) -> Option<Texture>;
    fn attribution(&self) -> Attribution;
}

/// Raster image of a single tile, uploaded to the GPU.
#[derive(Clone)]
pub struct Texture(TextureHandle);

impl Texture {
    /// Decode PNG or JPEG data, as served by the tile servers.
    ///
    /// # Errors
    ///
    /// When the data cannot be decoded.
    pub fn new(image: &[u8], ctx: &Context) -> Result<Self, ImageError> {
        let image = image::load_from_memory(image)?.to_rgba8();
        let pixels = image.as_flat_samples();
        let image = ColorImage::from_rgba_unmultiplied(
            [image.width() as _, image.height() as _],
            pixels.as_slice(),
        );

        Ok(Self::from_color_image(image, ctx))
    }

    /// Load the texture from egui's [`ColorImage`].
    pub fn from_color_image(color_image: ColorImage, ctx: &Context) -> Self {
        Self(ctx.load_texture("tile", color_image, Default::default()))
    }

    /// Size in pixels.
    pub fn size(&self) -> [usize; 2] {
        self.0.size()
    }

    pub(crate) fn draw(&self, painter: &Painter, rect: Rect) {
        let mut mesh = Mesh::with_texture(self.0.id());
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
        mesh.add_rect_with_uv(rect, uv, Color32::WHITE);
        painter.add(Shape::mesh(mesh));
    }
}
