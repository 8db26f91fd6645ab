use std::fmt;

use crate::{
    mercator::total_tiles,
    position::NormalizedPoint,
    zoom::Zoom,
};

/// Coordinates of the OSM-like tile.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TileId {
    /// X number of the tile.
    pub x: u32,

    /// Y number of the tile.
    pub y: u32,

    /// Zoom level, where 0 means no zoom.
    /// See: <https://wiki.openstreetmap.org/wiki/Zoom_levels>
    pub zoom: u8,
}

impl TileId {
    /// Whether the tile exists in the tile grid of its zoom level.
    pub fn valid(&self) -> bool {
        Zoom::try_from(self.zoom).is_ok_and(|zoom| {
            let tiles = total_tiles(zoom);
            self.x < tiles && self.y < tiles
        })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Tile together with the position of a point inside of it, expressed as a fraction of the
/// tile's size. For the top-left tile of a viewport this tells how far the tile's origin sticks
/// out of the viewport's top-left pixel.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TileAnchor {
    pub tile: TileId,

    /// Fraction of the tile's width, in `0..1`.
    pub frac_left: f64,

    /// Fraction of the tile's height, in `0..1`.
    pub frac_top: f64,
}

/// Find the tile containing the point.
///
/// A point lying exactly on the tile boundary belongs to the tile to its north/west, so that the
/// bottom-right edge of a viewport aligned with the grid does not pull in an empty sliver of the
/// next tile. Points outside the map are clamped to the nearest tile on the edge, while the
/// fraction still describes the point's position within its own, non-existent tile.
pub fn to_tile(point: NormalizedPoint, zoom: Zoom) -> TileAnchor {
    let (x, frac_left) = axis_tile(point.x, zoom);
    let (y, frac_top) = axis_tile(point.y, zoom);

    TileAnchor {
        tile: TileId {
            x,
            y,
            zoom: zoom.level(),
        },
        frac_left,
        frac_top,
    }
}

/// Tile number and remaining fraction along one axis.
fn axis_tile(position: f64, zoom: Zoom) -> (u32, f64) {
    let last = (total_tiles(zoom) - 1) as f64;
    let scaled = position * total_tiles(zoom) as f64;
    let floor = scaled.floor();

    if scaled == floor {
        ((floor - 1.).clamp(0., last) as u32, 0.)
    } else {
        (floor.clamp(0., last) as u32, scaled - floor)
    }
}
