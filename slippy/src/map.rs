use egui::{PointerButton, Rect, Response, Sense, Ui, Vec2, Widget};

use crate::{MapMemory, Pixels, Projector, Tiles, VisibleRange};

/// Plugins allow drawing custom shapes on the map. After implementing this trait for your type,
/// you can add it to the map with [`Map::with_plugin`].
pub trait Plugin {
    /// Function called at each frame.
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector);
}

/// The actual map widget. Instances are to be created on each frame, as all necessary state is
/// stored in [`Tiles`] and [`MapMemory`].
///
/// # Examples
///
/// ```
/// # use slippy::{Map, MapMemory, Tiles};
///
/// fn update(ui: &mut egui::Ui, tiles: &mut dyn Tiles, map_memory: &mut MapMemory) {
///     ui.add(Map::new(
///         Some(tiles), // `None`, if you don't want to show any tiles.
///         map_memory,
///     ));
/// }
/// ```
pub struct Map<'a, 'b, 'c> {
    tiles: Option<&'b mut dyn Tiles>,
    memory: &'a mut MapMemory,
    plugins: Vec<Box<dyn Plugin + 'c>>,
    zoom_gesture_enabled: bool,
    drag_gesture_enabled: bool,
}

impl<'a, 'b, 'c> Map<'a, 'b, 'c> {
    pub fn new(tiles: Option<&'b mut dyn Tiles>, memory: &'a mut MapMemory) -> Self {
        Self {
            tiles,
            memory,
            plugins: Vec::default(),
            zoom_gesture_enabled: true,
            drag_gesture_enabled: true,
        }
    }

    /// Add plugin to the drawing pipeline. Plugins allow drawing custom shapes on the map.
    pub fn with_plugin(mut self, plugin: impl Plugin + 'c) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Set whether map should perform zoom gesture (mouse wheel).
    ///
    /// Defaults to `true`.
    pub fn zoom_gesture(mut self, enabled: bool) -> Self {
        self.zoom_gesture_enabled = enabled;
        self
    }

    /// Set whether map should perform drag gesture (primary mouse button).
    ///
    /// Defaults to `true`.
    pub fn drag_gesture(mut self, enabled: bool) -> Self {
        self.drag_gesture_enabled = enabled;
        self
    }
}

impl Map<'_, '_, '_> {
    /// Handle zoom and drag inputs.
    fn zoom_and_drag(&mut self, ui: &Ui, response: &Response) {
        if self.zoom_gesture_enabled && response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);

            // There are no fractional zooms, so small scrolls add up to a whole level.
            if self.memory.scroll(scroll).is_err() {
                log::trace!("Zoom limit reached.");
            }
        }

        if self.drag_gesture_enabled && response.dragged_by(PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                // Content follows the pointer, so the center goes the other way.
                self.memory
                    .pan_by(Pixels::new(-delta.x as f64, -delta.y as f64));
            }
        }
    }
}

impl Widget for Map<'_, '_, '_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

        if let Err(err) = self.memory.resize(rect.width() as f64, rect.height() as f64) {
            log::debug!("Not drawing the map: {err}.");
            return response;
        }

        self.zoom_and_drag(ui, &response);

        let range = match self.memory.visible_range() {
            Ok(range) => range,
            Err(err) => {
                log::error!("Could not resolve visible tiles: {err}.");
                return response;
            }
        };

        let painter = ui.painter().with_clip_rect(rect);

        if let Some(tiles) = self.tiles {
            draw_tiles(&painter, rect, &range, tiles);
        }

        let projector = Projector::new(rect, range);
        for plugin in self.plugins {
            plugin.run(ui, &response, &projector);
        }

        response
    }
}

fn draw_tiles(painter: &egui::Painter, rect: Rect, range: &VisibleRange, tiles: &mut dyn Tiles) {
    let tile_size = Vec2::splat(range.tile_size() as f32);

    for tile_id in range.tiles() {
        log::trace!("Drawing tile {tile_id}.");

        if let Some(texture) = tiles.at(tile_id) {
            let placement = range.placement(tile_id);
            let min = rect.min + Vec2::new(placement.x() as f32, placement.y() as f32);
            texture.draw(painter, Rect::from_min_size(min, tile_size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, Texture, TileId, ViewState, sources::Attribution};
    use egui::{CentralPanel, ColorImage, Context, Event, Modifiers, MouseWheelUnit, Pos2, RawInput};
    use std::collections::HashSet;

    /// Remembers which tiles were asked for.
    struct RecordingTiles {
        requested: Vec<TileId>,
        texture: Option<Texture>,
    }

    impl Tiles for RecordingTiles {
        fn at(&mut self, tile_id: TileId) -> Option<Texture> {
            self.requested.push(tile_id);
            self.texture.clone()
        }

        fn attribution(&self) -> Attribution {
            Attribution {
                text: "test".to_owned(),
                url: String::new(),
            }
        }
    }

    fn screen(width: f32, height: f32) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height))),
            ..Default::default()
        }
    }

    #[test]
    fn visible_tiles_are_requested() {
        let ctx = Context::default();
        let mut tiles = RecordingTiles {
            requested: Vec::new(),
            texture: Some(Texture::from_color_image(ColorImage::example(), &ctx)),
        };
        let mut memory = MapMemory::new(
            ViewState::new(GeoPoint::new(39.99, 116.40).unwrap(), 3, 256., 256.).unwrap(),
        );

        let _ = ctx.run(screen(512., 512.), |ctx| {
            CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.add(Map::new(Some(&mut tiles), &mut memory));
                });
        });

        // Widget takes the whole screen.
        assert_eq!(512., memory.view().width());
        assert_eq!(512., memory.view().height());

        let range = memory.last_visible_range().unwrap();
        let requested: HashSet<_> = tiles.requested.into_iter().collect();
        assert_eq!(range.tiles().collect::<HashSet<_>>(), requested);
        assert_eq!(9, requested.len());
    }

    fn frame(ctx: &Context, memory: &mut MapMemory, events: Vec<Event>) {
        let input = RawInput {
            events,
            ..screen(512., 512.)
        };

        let _ = ctx.run(input, |ctx| {
            CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.add(Map::new(None, memory));
                });
        });
    }

    fn beijing_memory() -> MapMemory {
        MapMemory::new(
            ViewState::new(GeoPoint::new(39.99, 116.40).unwrap(), 3, 512., 512.).unwrap(),
        )
    }

    fn wheel(delta: f32) -> Event {
        Event::MouseWheel {
            unit: MouseWheelUnit::Point,
            delta: Vec2::new(0., delta),
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn smooth_scrolling_zooms_one_level_at_a_time() {
        let ctx = Context::default();
        let mut memory = beijing_memory();
        let center = Pos2::new(256., 256.);

        // Let egui know where the widget is, so it can be hovered.
        frame(&ctx, &mut memory, vec![Event::PointerMoved(center)]);

        for _ in 0..5 {
            frame(&ctx, &mut memory, vec![Event::PointerMoved(center), wheel(4.)]);
        }
        assert_eq!(3, memory.zoom());

        for _ in 0..10 {
            frame(&ctx, &mut memory, vec![Event::PointerMoved(center), wheel(4.)]);
        }
        assert_eq!(4, memory.zoom());
    }

    #[test]
    fn scrolling_can_be_disabled() {
        let ctx = Context::default();
        let mut memory = beijing_memory();
        let center = Pos2::new(256., 256.);

        for _ in 0..3 {
            let input = RawInput {
                events: vec![Event::PointerMoved(center), wheel(100.)],
                ..screen(512., 512.)
            };
            let _ = ctx.run(input, |ctx| {
                CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        ui.add(Map::new(None, &mut memory).zoom_gesture(false));
                    });
            });
        }

        assert_eq!(3, memory.zoom());
    }

    #[test]
    fn dragging_moves_the_map() {
        let ctx = Context::default();
        let mut memory = beijing_memory();
        let before = memory.view().center();
        let start = Pos2::new(256., 256.);

        frame(&ctx, &mut memory, vec![Event::PointerMoved(start)]);
        frame(
            &ctx,
            &mut memory,
            vec![Event::PointerButton {
                pos: start,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            }],
        );

        for step in 1..=4 {
            let pos = start + Vec2::new(step as f32 * 16., 0.);
            frame(&ctx, &mut memory, vec![Event::PointerMoved(pos)]);
        }

        frame(
            &ctx,
            &mut memory,
            vec![Event::PointerButton {
                pos: start + Vec2::new(64., 0.),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            }],
        );

        // Content follows the pointer eastward, so the center went west.
        assert!(memory.view().center().lng() < before.lng());
        approx::assert_relative_eq!(memory.view().center().lat(), before.lat(), epsilon = 1e-9);
    }

    struct CaptureProjector<'a>(&'a mut Option<Projector>);

    impl Plugin for CaptureProjector<'_> {
        fn run(self: Box<Self>, _ui: &mut Ui, _response: &Response, projector: &Projector) {
            *self.0 = Some(projector.clone());
        }
    }

    #[test]
    fn plugins_get_the_projector() {
        let ctx = Context::default();
        let center = GeoPoint::new(51.1, 17.03).unwrap();
        let mut memory = MapMemory::new(ViewState::new(center, 12, 256., 256.).unwrap());
        let mut projector = None;

        let _ = ctx.run(screen(400., 300.), |ctx| {
            CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.add(Map::new(None, &mut memory).with_plugin(CaptureProjector(&mut projector)));
                });
        });

        let projected = projector.unwrap().project(center);
        approx::assert_relative_eq!(projected.x, 200., epsilon = 1e-2);
        approx::assert_relative_eq!(projected.y, 150., epsilon = 1e-2);
    }
}
