use crate::{
    Error,
    mercator::{projected_distance, total_pixels, total_tiles},
    position::{GeoPoint, NormalizedPoint, Pixels},
    tiles::{TileAnchor, TileId, to_tile},
    view::ViewState,
    zoom::Zoom,
};

/// Inclusive rectangle of tiles covering the viewport, together with what is needed to put
/// them in the right place on the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRange {
    /// North-west tile, along with the fraction by which it sticks out of the viewport.
    pub top_left: TileAnchor,

    /// South-east tile.
    pub bottom_right: TileId,

    /// Viewport's top-left corner on the unit square.
    origin: NormalizedPoint,

    zoom: Zoom,
    tile_size: u32,
}

/// Calculate which tiles need to be drawn to cover the viewport.
///
/// # Errors
///
/// [`Error::TileIndexOutOfRange`] if the resolved tiles do not fit the tile grid. This would be
/// a bug, as tiles are clamped to the grid.
pub fn visible_range(view: &ViewState) -> Result<VisibleRange, Error> {
    let center = view.center().normalized();
    let zoom = view.zoom();

    let half_width = projected_distance(view.width() / 2., zoom, view.tile_size());
    let half_height = projected_distance(view.height() / 2., zoom, view.tile_size());

    let min = NormalizedPoint::new(center.x - half_width, center.y - half_height);
    let max = NormalizedPoint::new(center.x + half_width, center.y + half_height);

    let top_left = to_tile(min, zoom);
    let bottom_right = to_tile(max, zoom).tile;

    if !top_left.tile.valid() {
        return Err(Error::TileIndexOutOfRange(top_left.tile));
    }

    if !bottom_right.valid()
        || bottom_right.x < top_left.tile.x
        || bottom_right.y < top_left.tile.y
    {
        return Err(Error::TileIndexOutOfRange(bottom_right));
    }

    Ok(VisibleRange {
        top_left,
        bottom_right,
        origin: min,
        zoom,
        tile_size: view.tile_size(),
    })
}

impl VisibleRange {
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Viewport's top-left corner on the unit square, the reference for all pixel offsets.
    pub fn origin(&self) -> NormalizedPoint {
        self.origin
    }

    /// Number of tile columns.
    pub fn columns(&self) -> u32 {
        self.bottom_right.x - self.top_left.tile.x + 1
    }

    /// Number of tile rows.
    pub fn rows(&self) -> u32 {
        self.bottom_right.y - self.top_left.tile.y + 1
    }

    /// Number of tiles in the range.
    pub fn len(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Range always has at least one tile.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, tile: TileId) -> bool {
        tile.zoom == self.zoom.level()
            && (self.top_left.tile.x..=self.bottom_right.x).contains(&tile.x)
            && (self.top_left.tile.y..=self.bottom_right.y).contains(&tile.y)
    }

    /// All tiles of the range, row by row, from north-west to south-east.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + use<> {
        let (x_range, zoom) = (self.top_left.tile.x..=self.bottom_right.x, self.zoom.level());
        (self.top_left.tile.y..=self.bottom_right.y)
            .flat_map(move |y| x_range.clone().map(move |x| TileId { x, y, zoom }))
    }

    /// Offset in pixels of the point from the viewport's top-left corner.
    pub fn offset_of(&self, point: NormalizedPoint) -> Pixels {
        let total_pixels = total_pixels(self.zoom, self.tile_size);
        Pixels::new(
            (point.x - self.origin.x) * total_pixels,
            (point.y - self.origin.y) * total_pixels,
        )
    }

    /// Where to put the tile's top-left corner, relative to the viewport's top-left corner.
    ///
    /// For an anchor inside a tile, this is `(tile - top_left - frac) * tile_size` on each
    /// axis. It is calculated from the origin instead, which also holds when the anchor was
    /// clamped or moved off a tile boundary.
    pub fn placement(&self, tile: TileId) -> Pixels {
        let tiles = total_tiles(self.zoom) as f64;
        self.offset_of(NormalizedPoint::new(
            tile.x as f64 / tiles,
            tile.y as f64 / tiles,
        ))
    }

    /// Geographical position of the pixel, given as an offset from the viewport's top-left
    /// corner.
    pub fn position_at(&self, offset: Pixels) -> GeoPoint {
        GeoPoint::from_normalized(NormalizedPoint::new(
            self.origin.x + projected_distance(offset.x(), self.zoom, self.tile_size),
            self.origin.y + projected_distance(offset.y(), self.zoom, self.tile_size),
        ))
    }
}
