use crate::{
    Error, GeoPoint, InvalidZoom, Pixels, ViewState, VisibleRange, range::visible_range,
};

/// Scrolled distance, in points, which makes one zoom level. Matches a single mouse wheel notch
/// on native platforms.
const SCROLL_PER_ZOOM_LEVEL: f32 = 40.;

/// State of the map widget which must persist between frames.
///
/// Keeps the [`ViewState`] along with the [`VisibleRange`] calculated from it. The range is
/// recalculated only after the view changes.
#[derive(Debug, Default, Clone)]
pub struct MapMemory {
    view: ViewState,
    visible_range: Option<VisibleRange>,

    /// Scrolling which did not add up to a whole zoom level yet.
    scrolled: f32,
}

impl MapMemory {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            visible_range: None,
            scrolled: 0.,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the current zoom level.
    pub fn zoom(&self) -> u8 {
        self.view.zoom().level()
    }

    /// Try to zoom in, returning `Err(InvalidZoom)` if already at maximum.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] at [`crate::MAX_ZOOM`].
    pub fn zoom_in(&mut self) -> Result<(), InvalidZoom> {
        self.view.zoom_in()?;
        self.invalidate();
        Ok(())
    }

    /// Try to zoom out, returning `Err(InvalidZoom)` if already at minimum.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] at zoom 0.
    pub fn zoom_out(&mut self) -> Result<(), InvalidZoom> {
        self.view.zoom_out()?;
        self.invalidate();
        Ok(())
    }

    /// Gather scroll wheel or touchpad movement until it adds up to a whole zoom level, then zoom
    /// by one. Scrolling up zooms in. Reversing the direction starts over.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] if the zoom level is already at the limit.
    pub fn scroll(&mut self, delta: f32) -> Result<(), InvalidZoom> {
        if delta == 0. {
            return Ok(());
        }

        if self.scrolled.signum() != delta.signum() {
            self.scrolled = 0.;
        }

        self.scrolled += delta;
        if self.scrolled.abs() < SCROLL_PER_ZOOM_LEVEL {
            return Ok(());
        }

        if std::mem::take(&mut self.scrolled) > 0. {
            self.zoom_in()
        } else {
            self.zoom_out()
        }
    }

    /// Set exact zoom level.
    ///
    /// # Errors
    ///
    /// [`InvalidZoom`] if `zoom` exceeds [`crate::MAX_ZOOM`].
    pub fn set_zoom(&mut self, zoom: u8) -> Result<(), InvalidZoom> {
        self.view.set_zoom(zoom)?;
        self.invalidate();
        Ok(())
    }

    /// Center exactly at the given position.
    pub fn center_at(&mut self, position: GeoPoint) {
        self.view.center_at(position);
        self.invalidate();
    }

    /// Move the map's center by a number of screen pixels.
    pub fn pan_by(&mut self, offset: Pixels) {
        self.view.pan_by(offset);
        self.invalidate();
    }

    /// Follow the size of the widget.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidViewport`] if the viewport would have no area.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), Error> {
        if width != self.view.width() || height != self.view.height() {
            self.view.resize(width, height)?;
            self.invalidate();
        }
        Ok(())
    }

    /// Tiles to be drawn for the current view.
    ///
    /// # Errors
    ///
    /// See [`visible_range`].
    pub fn visible_range(&mut self) -> Result<VisibleRange, Error> {
        if let Some(range) = self.visible_range {
            return Ok(range);
        }

        let range = visible_range(&self.view)?;
        log::debug!(
            "Visible tiles are {} to {} ({} in total).",
            range.top_left.tile,
            range.bottom_right,
            range.len()
        );
        self.visible_range = Some(range);
        Ok(range)
    }

    /// Range calculated during the last frame, if the view did not change since.
    pub fn last_visible_range(&self) -> Option<VisibleRange> {
        self.visible_range
    }

    /// Geographical position of the pixel, given as an offset from the map's top-left corner.
    /// Returns `None` if the map was not drawn since the view changed.
    pub fn position_at(&self, offset: Pixels) -> Option<GeoPoint> {
        self.visible_range.map(|range| range.position_at(offset))
    }

    fn invalidate(&mut self) {
        self.visible_range = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn memory() -> MapMemory {
        MapMemory::new(ViewState::new(GeoPoint::new(39.99, 116.40).unwrap(), 3, 512., 512.).unwrap())
    }

    #[test]
    fn range_is_calculated_on_demand() {
        let mut memory = memory();
        assert_eq!(None, memory.last_visible_range());
        assert_eq!(None, memory.position_at(Pixels::new(0., 0.)));

        let range = memory.visible_range().unwrap();
        assert_eq!(Some(range), memory.last_visible_range());
        assert_eq!(range, memory.visible_range().unwrap());
    }

    #[test]
    fn changing_the_view_invalidates_the_range() {
        let mut memory = memory();

        memory.visible_range().unwrap();
        memory.zoom_in().unwrap();
        assert_eq!(None, memory.last_visible_range());
        assert_eq!(4, memory.visible_range().unwrap().zoom().level());

        memory.pan_by(Pixels::new(10., 0.));
        assert_eq!(None, memory.last_visible_range());
        memory.visible_range().unwrap();

        memory.center_at(GeoPoint::new(0., 0.).unwrap());
        assert_eq!(None, memory.last_visible_range());
        memory.visible_range().unwrap();

        memory.resize(100., 100.).unwrap();
        assert_eq!(None, memory.last_visible_range());
    }

    #[test]
    fn failed_change_keeps_the_range() {
        let mut memory = memory();
        memory.set_zoom(19).unwrap();
        memory.visible_range().unwrap();

        assert_eq!(Err(InvalidZoom), memory.zoom_in());
        assert!(memory.last_visible_range().is_some());

        assert!(memory.resize(0., 0.).is_err());
        assert!(memory.last_visible_range().is_some());
    }

    #[test]
    fn resizing_to_the_same_size_keeps_the_range() {
        let mut memory = memory();
        memory.visible_range().unwrap();
        memory.resize(512., 512.).unwrap();
        assert!(memory.last_visible_range().is_some());
    }

    #[test]
    fn small_scrolls_add_up_to_one_zoom_level() {
        let mut memory = memory();

        for _ in 0..7 {
            memory.scroll(5.).unwrap();
        }
        assert_eq!(3, memory.zoom());

        memory.scroll(5.).unwrap();
        assert_eq!(4, memory.zoom());

        // Leftover is gone after zooming.
        memory.scroll(35.).unwrap();
        assert_eq!(4, memory.zoom());

        memory.scroll(-40.).unwrap();
        assert_eq!(3, memory.zoom());
    }

    #[test]
    fn reversing_the_scroll_starts_over() {
        let mut memory = memory();

        memory.scroll(30.).unwrap();
        memory.scroll(-30.).unwrap();
        memory.scroll(20.).unwrap();
        assert_eq!(3, memory.zoom());

        memory.scroll(20.).unwrap();
        assert_eq!(4, memory.zoom());
    }

    #[test]
    fn scrolling_beyond_the_zoom_limit() {
        let mut memory = memory();
        memory.set_zoom(0).unwrap();

        assert_eq!(Err(InvalidZoom), memory.scroll(-40.));
        assert_eq!(0, memory.zoom());
    }

    #[test]
    fn position_under_the_pointer() {
        let mut memory = memory();
        memory.visible_range().unwrap();

        let center = memory.position_at(Pixels::new(256., 256.)).unwrap();
        assert_relative_eq!(center.lat(), 39.99, epsilon = 1e-9);
        assert_relative_eq!(center.lng(), 116.40, epsilon = 1e-9);

        let north_west = memory.position_at(Pixels::new(0., 0.)).unwrap();
        assert!(north_west.lat() > 39.99);
        assert!(north_west.lng() < 116.40);
    }
}
