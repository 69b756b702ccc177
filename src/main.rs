mod app;
mod state;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use app::PlotApp;
use clap::{CommandFactory, Parser};
use eframe::egui;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "msjson-plot")]
#[command(version)]
#[command(
    about = "Plot spectra or XIC traces from a raw-file parser's JSON output.",
    long_about = None,
    after_help = "Examples:\n  msjson-plot spectra.json\n  msjson-plot xics.json"
)]
struct Cli {
    /// Spectrum-query or XIC JSON file (array or base64 axes)
    #[arg(value_name = "INPUT_JSON")]
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let Some(input) = cli.input else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| Cli::command().get_name().to_string());
        println!("usage: {program} input-json");
        return ExitCode::SUCCESS;
    };

    let dataset = match msjson_plot::load_file(&input) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let source_name = file_name(&input);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = format!("msjson-plot - {source_name}");
    let state = AppState::new(dataset, source_name);
    let result = eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PlotApp::new(state)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to open plot window: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
