use egui::{Pos2, Rect, Vec2};

use crate::{GeoPoint, Pixels, VisibleRange, mercator::total_pixels};

/// Projects geographical position into pixels on the viewport, suitable for [`egui::Painter`].
#[derive(Debug, Clone)]
pub struct Projector {
    clip_rect: Rect,
    range: VisibleRange,
}

impl Projector {
    pub fn new(clip_rect: Rect, range: VisibleRange) -> Self {
        Self { clip_rect, range }
    }

    /// Project `position` into pixels on the viewport.
    pub fn project(&self, position: GeoPoint) -> Pos2 {
        let offset = self.range.offset_of(position.normalized());
        self.clip_rect.min + Vec2::new(offset.x() as f32, offset.y() as f32)
    }

    /// Get coordinates from viewport's pixels position.
    pub fn unproject(&self, position: Pos2) -> GeoPoint {
        // Do the arithmetic in f64, as the projected positions are huge at high zoom levels.
        let x = position.x as f64 - self.clip_rect.min.x as f64;
        let y = position.y as f64 - self.clip_rect.min.y as f64;
        self.range.position_at(Pixels::new(x, y))
    }

    /// What is the local scale of the map at the provided position and given the current zoom
    /// level?
    pub fn scale_pixel_per_meter(&self, position: GeoPoint) -> f32 {
        // Return f32 for ergonomics, as the result is typically used for egui code.
        pixels_per_meter(position.lat(), &self.range) as f32
    }
}

fn pixels_per_meter(latitude: f64, range: &VisibleRange) -> f64 {
    const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

    let pixel_per_meter_equator = total_pixels(range.zoom(), range.tile_size()) / EARTH_CIRCUMFERENCE;
    pixel_per_meter_equator / latitude.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ViewState, visible_range};
    use approx::assert_relative_eq;

    fn projector(lat: f64, lng: f64, zoom: u8) -> Projector {
        let view = ViewState::new(GeoPoint::new(lat, lng).unwrap(), zoom, 100., 100.).unwrap();
        Projector::new(
            Rect::from_min_size(Pos2::new(10., 20.), Vec2::splat(100.)),
            visible_range(&view).unwrap(),
        )
    }

    #[test]
    fn center_is_in_the_middle_of_the_rect() {
        let projector = projector(52., 21., 10);
        let projected = projector.project(GeoPoint::new(52., 21.).unwrap());
        assert_relative_eq!(projected.x, 60., epsilon = 1e-3);
        assert_relative_eq!(projected.y, 70., epsilon = 1e-3);
    }

    #[test]
    fn unproject_is_inverse_of_project() {
        let original = GeoPoint::new(52.01, 21.02).unwrap();
        let projector = projector(52., 21., 10);

        let unprojected = projector.unproject(projector.project(original));
        assert_relative_eq!(original.lat(), unprojected.lat(), epsilon = 1e-3);
        assert_relative_eq!(original.lng(), unprojected.lng(), epsilon = 1e-3);
    }

    #[test]
    fn test_unproject_precision() {
        let original = GeoPoint::new(52., 21.).unwrap();
        let projector = projector(52., 21., 19);

        let mut projected = projector.project(original);
        let mut prev_lng = 0.0;
        for offset in 0..10 {
            projected.x += offset as f32;
            let unprojected = projector.unproject(projected);
            assert_ne!(
                prev_lng,
                unprojected.lng(),
                "Input was different but projection remained the same"
            );
            prev_lng = unprojected.lng();
        }
    }

    #[test]
    fn test_equator_zoom_0() {
        // At zoom 0 (whole world), equator should be about 156.5km per pixel.
        let projector = projector(0., 0., 0);
        let scale = projector.scale_pixel_per_meter(GeoPoint::new(0., 0.).unwrap());
        assert_relative_eq!(scale, 1. / 156_543.03, max_relative = 1e-4);
    }

    #[test]
    fn test_equator_zoom_19() {
        // At max zoom (19), equator should be about 0.3m per pixel.
        let projector = projector(0., 0., 19);
        let scale = projector.scale_pixel_per_meter(GeoPoint::new(0., 0.).unwrap());
        assert_relative_eq!(scale, 1. / 0.298, max_relative = 1e-2);
    }

    #[test]
    fn scale_grows_towards_the_poles() {
        let projector = projector(0., 0., 5);
        let equator = projector.scale_pixel_per_meter(GeoPoint::new(0., 0.).unwrap());
        let north = projector.scale_pixel_per_meter(GeoPoint::new(60., 0.).unwrap());
        assert_relative_eq!(north, equator * 2., max_relative = 1e-4);
    }
}
