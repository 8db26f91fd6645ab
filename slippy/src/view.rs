use crate::{
    Error,
    mercator::{TILE_SIZE, projected_distance},
    position::{GeoPoint, NormalizedPoint, Pixels},
    zoom::{InvalidZoom, Zoom},
};

/// Everything needed to decide which tiles are visible: where the map is centered, how much it
/// is zoomed in and how large the viewport is.
///
/// Changes go through explicit operations, which validate their input first, so a `ViewState`
/// is always consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    center: GeoPoint,
    zoom: Zoom,
    width: f64,
    height: f64,
    tile_size: u32,
}

impl ViewState {
    /// Create a view with the default, 256px tiles.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidZoom`] if `zoom` exceeds [`crate::MAX_ZOOM`] and
    /// [`Error::InvalidViewport`] if the viewport has no area.
    pub fn new(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Result<Self, Error> {
        validate_viewport(width, height)?;
        Ok(Self {
            center,
            zoom: Zoom::try_from(zoom)?,
            width,
            height,
            tile_size: TILE_SIZE,
        })
    }

    /// Use tiles of a different size, e.g. 512px ones.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTileSize`] if `tile_size` is zero.
    pub fn with_tile_size(self, tile_size: u32) -> Result<Self, Error> {
        if tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }

        Ok(Self { tile_size, ..self })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Width of the viewport in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the viewport in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Center exactly at the given position.
    pub fn center_at(&mut self, center: GeoPoint) {
        self.center = center;
    }

    /// Set exact zoom level.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] if `zoom` exceeds [`crate::MAX_ZOOM`].
    pub fn set_zoom(&mut self, zoom: u8) -> Result<(), InvalidZoom> {
        self.zoom = Zoom::try_from(zoom)?;
        Ok(())
    }

    /// Try to zoom in, returning `Err(InvalidZoom)` if already at maximum.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] at [`crate::MAX_ZOOM`].
    pub fn zoom_in(&mut self) -> Result<(), InvalidZoom> {
        self.zoom.zoom_in()
    }

    /// Try to zoom out, returning `Err(InvalidZoom)` if already at minimum.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] at zoom 0.
    pub fn zoom_out(&mut self) -> Result<(), InvalidZoom> {
        self.zoom.zoom_out()
    }

    /// Change the size of the viewport. The center stays where it is.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidViewport`] if the viewport would have no area.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), Error> {
        validate_viewport(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Move the center by a number of screen pixels, positive values going east and south.
    /// The center stops at the edges of the map, there is no wrapping around the antimeridian.
    pub fn pan_by(&mut self, offset: Pixels) {
        let center = self.center.normalized();
        self.center = GeoPoint::from_normalized(NormalizedPoint::new(
            center.x + projected_distance(offset.x(), self.zoom, self.tile_size),
            center.y + projected_distance(offset.y(), self.zoom, self.tile_size),
        ));
    }
}

fn validate_viewport(width: f64, height: f64) -> Result<(), Error> {
    // Written this way to reject NaN as well.
    if width > 0. && height > 0. && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidViewport { width, height })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: GeoPoint::clamped(39.99, 116.40),
            zoom: Zoom::default(),
            width: TILE_SIZE as f64,
            height: TILE_SIZE as f64,
            tile_size: TILE_SIZE,
        }
    }
}
