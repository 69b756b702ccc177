use eframe::egui::Color32;

use msjson_plot::color::{generate_palette, series_color};
use msjson_plot::data::model::{DocumentKind, SeriesDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer draws, decoded up front and never mutated.
pub struct AppState {
    pub dataset: SeriesDataset,

    /// File name shown in the top bar.
    pub source_name: String,

    /// One colour per series.
    pub palette: Vec<Color32>,
}

impl AppState {
    pub fn new(dataset: SeriesDataset, source_name: String) -> Self {
        let palette = generate_palette(dataset.len());
        Self {
            dataset,
            source_name,
            palette,
        }
    }

    pub fn color_for(&self, index: usize) -> Color32 {
        series_color(&self.palette, index)
    }

    /// Name used for series `index` in the legend / hover text.
    pub fn series_name(&self, index: usize) -> String {
        let label = &self.dataset.series[index].label;
        if !label.is_empty() {
            return label.clone();
        }
        match self.dataset.kind {
            DocumentKind::Spectra => format!("spectrum {index}"),
            DocumentKind::Traces => format!("trace {index}"),
        }
    }

    pub fn x_axis_label(&self) -> String {
        match (self.dataset.kind, &self.dataset.time_unit) {
            (DocumentKind::Spectra, _) => "m/z".to_string(),
            (DocumentKind::Traces, Some(unit)) => format!("Retention time ({unit})"),
            (DocumentKind::Traces, None) => "Retention time".to_string(),
        }
    }

    pub fn show_legend(&self) -> bool {
        self.dataset.kind == DocumentKind::Spectra
    }
}
