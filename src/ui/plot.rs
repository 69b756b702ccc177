use eframe::egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render every decoded series as one line in a single plot.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("No {} in this file", state.dataset.kind.noun()));
        });
        return;
    }

    let mut plot = Plot::new("series_plot")
        .x_axis_label(state.x_axis_label())
        .y_axis_label("Intensity")
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if state.show_legend() {
        plot = plot.legend(Legend::default().position(Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        for (idx, series) in state.dataset.series.iter().enumerate() {
            let points: PlotPoints = series
                .x
                .iter()
                .zip(series.y.iter())
                .map(|(&xi, &yi)| [xi, yi])
                .collect();

            let line = Line::new(points)
                .name(state.series_name(idx))
                .color(state.color_for(idx))
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
