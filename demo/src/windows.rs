use egui::{Align2, RichText, Ui, Window};
use slippy::{
    MapMemory,
    sources::{Attribution, TileSource},
};

use crate::places;

pub fn acknowledge(ui: &Ui, attribution: Attribution) {
    Window::new("Acknowledge")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                ui.label("map provided by");
                ui.hyperlink_to(attribution.text, attribution.url);
            });
        });
}

/// Lists the tiles which are currently on the screen, with URLs they would be downloaded from.
pub fn visible_tiles(ui: &Ui, map_memory: &MapMemory, source: &impl TileSource) {
    Window::new("Tiles")
        .collapsible(true)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .default_open(false)
        .show(ui.ctx(), |ui| {
            let Some(range) = map_memory.last_visible_range() else {
                ui.label("nothing drawn yet");
                return;
            };

            ui.label(format!(
                "{} tiles, offset by {:.02} x {:.02} of a tile",
                range.len(),
                range.top_left.frac_left,
                range.top_left.frac_top
            ));

            egui::ScrollArea::vertical().max_height(200.).show(ui, |ui| {
                for tile_id in range.tiles() {
                    ui.monospace(source.tile_url(tile_id));
                }
            });
        });
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }

                ui.label(format!("zoom {}", map_memory.zoom()));
            });
        });
}

/// Shows where the map is centered, with shortcuts to a few places.
pub fn go_to(ui: &Ui, map_memory: &mut MapMemory) {
    let center = map_memory.view().center();

    Window::new("Center")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            ui.label(format!("center at {:.04} {:.04}", center.lat(), center.lng()));
            ui.horizontal(|ui| {
                for (name, place) in [
                    ("Beijing", places::beijing()),
                    ("Wrocław", places::wroclaw_glowny()),
                    ("Null Island", places::null_island()),
                ] {
                    if ui.button(name).clicked() {
                        map_memory.center_at(place);
                    }
                }
            });
        });
}
