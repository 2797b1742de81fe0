mod app;
mod catalog;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON array of problem records.
    #[arg(long, default_value = "problems.json")]
    catalog: PathBuf,

    /// Open the detail page for this catalog position.
    #[arg(long, allow_hyphen_values = true)]
    id: Option<String>,

    #[arg(long, default_value_t = app::PARTICLE_COUNT)]
    particles: usize,

    /// Overlay frame rate and particle pair statistics.
    #[arg(long)]
    show_fps: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Problems | Sdmist"),
        ..Default::default()
    };

    let app_options = app::AppOptions {
        catalog_path: args.catalog,
        initial_id: args.id,
        particle_count: args.particles,
        show_fps: args.show_fps,
    };

    eframe::run_native(
        "sdmist-problems",
        options,
        Box::new(move |cc| Ok(Box::new(app::CatalogApp::new(cc, app_options)))),
    )
}
