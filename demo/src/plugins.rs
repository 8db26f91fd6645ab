use egui::{Color32, Response, Ui};
use slippy::{GeoPoint, Plugin, Projector};

use crate::places;

/// Sample map plugin which draws custom stuff on the map.
pub struct CustomShapes {}

impl Plugin for CustomShapes {
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector) {
        // Position of the point we want to put our shapes.
        let position = projector.project(places::wroclaw_glowny());

        let radius = 30.;

        let hovered = response
            .hover_pos()
            .map(|hover_pos| hover_pos.distance(position) < radius)
            .unwrap_or(false);

        ui.painter().circle_filled(
            position,
            radius,
            Color32::BLACK.gamma_multiply(if hovered { 0.5 } else { 0.2 }),
        );
    }
}

#[derive(Default, Clone)]
pub struct ClickWatcher {
    pub clicked_at: Option<GeoPoint>,
}

impl ClickWatcher {
    pub fn show_position(&self, ui: &Ui) {
        if let Some(clicked_at) = self.clicked_at {
            egui::Window::new("Clicked Position")
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(egui::Align2::CENTER_BOTTOM, [0., -10.])
                .show(ui.ctx(), |ui| {
                    ui.label(format!("{:.04} {:.04}", clicked_at.lat(), clicked_at.lng()))
                        .on_hover_text("last clicked position");
                });
        }
    }
}

impl Plugin for &mut ClickWatcher {
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector) {
        if response.clicked_by(egui::PointerButton::Primary) {
            self.clicked_at = response
                .interact_pointer_pos()
                .map(|p| projector.unproject(p));
        }

        if let Some(position) = self.clicked_at {
            ui.painter()
                .circle_filled(projector.project(position), 5.0, Color32::BLUE);
        }
    }
}
