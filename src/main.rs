mod app;
mod catalog;
mod errors;
mod gallery;
mod logging;
mod settings;
mod slideshow;
mod surface;
mod ui;

#[cfg(test)]
mod tests;

use app::{GalleryApp, LaunchOptions};
use clap::Parser;
use eframe::egui;
use settings::Settings;
use std::path::PathBuf;

/// Photo album slideshow viewer
#[derive(Parser, Debug)]
#[command(name = "rgallery", version, about)]
struct Cli {
    /// Album catalog (.json manifest) or a folder of albums
    path: Option<PathBuf>,

    /// Album to open first
    #[arg(long)]
    album: Option<String>,

    /// Start the slideshow immediately
    #[arg(long)]
    slideshow: bool,

    /// Seconds per photo in the slideshow
    #[arg(long)]
    interval: Option<f32>,

    /// Verbose logging (overrides RUST_LOG)
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.debug);

    let settings = Settings::load();
    let (width, height) = settings.window_size;

    let options = LaunchOptions {
        catalog: cli.path,
        album: cli.album,
        slideshow: cli.slideshow,
        interval: cli.interval,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "rGallery",
        native_options,
        Box::new(|cc| Ok(Box::new(GalleryApp::new(cc, settings, options)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {}", e))
}
