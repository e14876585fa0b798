//! Builds the heatmap dashboard variant from the Play Store CSV.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use playstore_dashboards::dashboards::heatmap;
use playstore_dashboards::data::{DataCleaner, DataLoader};
use playstore_dashboards::html::HtmlExporter;
use playstore_dashboards::telemetry;

/// Build the Google Play Store heatmap dashboard
#[derive(Parser, Debug)]
#[command(name = "google-play-heatmap-dashboard")]
#[command(about = "Build the Google Play Store heatmap dashboard")]
#[command(version)]
struct Args {
    /// Play Store metadata CSV
    #[arg(short, long, default_value = "googleplaystore.csv")]
    input: String,

    /// Output HTML file
    #[arg(short, long, default_value = "visuals/google_play_heatmap_dashboard.html")]
    output: PathBuf,
}

fn main() -> Result<()> {
    telemetry::init_default_tracing();
    let args = Args::parse();

    let raw = DataLoader::load_csv(&args.input)
        .with_context(|| format!("loading {}", args.input))?;
    let cleaned = DataCleaner::clean(&raw, &heatmap::REQUIRED_COLUMNS)
        .context("cleaning Play Store data")?;
    let spec = heatmap::build(&cleaned).context("composing dashboard")?;
    HtmlExporter::save(&args.output, &spec)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}
