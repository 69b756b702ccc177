use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar above the plot.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(&state.source_name);

        ui.separator();

        ui.label(format!(
            "{} {} loaded, {} points",
            state.dataset.len(),
            state.dataset.kind.noun(),
            state.dataset.point_count()
        ));

        if let Some(unit) = &state.dataset.time_unit {
            ui.separator();
            ui.label(format!("time unit: {unit}"));
        }
    });
}
