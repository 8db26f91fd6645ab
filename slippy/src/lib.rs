#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod error;
mod map;
mod memory;
mod mercator;
mod position;
mod projector;
mod range;
pub mod sources;
mod texture;
mod tiles;
mod view;
mod zoom;

pub use error::Error;
pub use map::{Map, Plugin};
pub use memory::MapMemory;
pub use mercator::{
    MAX_LATITUDE, TILE_SIZE, forward_lat, forward_lng, inverse_lat, inverse_lng,
    projected_distance, total_pixels, total_tiles,
};
pub use position::{GeoPoint, NormalizedPoint, Pixels, Position};
pub use projector::Projector;
pub use range::{VisibleRange, visible_range};
pub use texture::{Texture, Tiles};
pub use tiles::{TileAnchor, TileId, to_tile};
pub use view::ViewState;
pub use zoom::{InvalidZoom, MAX_ZOOM, Zoom};
