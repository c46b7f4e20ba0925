use eframe::egui::{self, Ui};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Chart title, a short summary and the view toggles.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading(state.chart.title.as_str());

        ui.separator();
        ui.label(state.summary_line());
        ui.separator();

        if ui.selectable_label(state.show_legend, "Legend").clicked() {
            state.toggle_legend();
        }
        if ui.selectable_label(state.show_points, "Points").clicked() {
            state.toggle_points();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Esc / Q: next chart");
        });
    });
}
