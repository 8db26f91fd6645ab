mod places;
mod plugins;
mod tiles;
mod windows;

use egui::Context;
use slippy::{Map, MapMemory, Tiles, ViewState, sources::OpenStreetMap};

use crate::{
    plugins::{ClickWatcher, CustomShapes},
    tiles::GridTiles,
};

pub struct MyApp {
    tiles: GridTiles,
    map_memory: MapMemory,
    click_watcher: ClickWatcher,
}

impl MyApp {
    pub fn new(egui_ctx: Context) -> Self {
        let view = ViewState::new(places::beijing(), 3, 512., 512.).unwrap_or_default();

        Self {
            tiles: GridTiles::new(egui_ctx),
            map_memory: MapMemory::new(view),
            click_watcher: ClickWatcher::default(),
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let attribution = self.tiles.attribution();

                // In egui, widgets are constructed and consumed in each frame.
                let map = Map::new(Some(&mut self.tiles), &mut self.map_memory)
                    .with_plugin(CustomShapes {})
                    .with_plugin(&mut self.click_watcher);

                // Draw the map widget.
                ui.add(map);

                // Draw utility windows.
                {
                    use windows::{acknowledge, go_to, visible_tiles, zoom};

                    zoom(ui, &mut self.map_memory);
                    go_to(ui, &mut self.map_memory);
                    visible_tiles(ui, &self.map_memory, &OpenStreetMap);
                    acknowledge(ui, attribution);
                    self.click_watcher.show_position(ui);
                }
            });
    }
}
