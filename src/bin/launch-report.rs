//! CLI tool to run the dashboard transforms against a launch CSV file.

use clap::Parser;
use launchdash_rs::{
    ChartSpec, Dataset, PayloadRange, SiteSelection, payload_scatter, success_pie,
};
use std::path::PathBuf;
use std::process;

/// Compute the success pie and payload scatter for a launch dataset.
///
/// Produces the same chart data the web dashboard renders, as text or
/// JSON, for a given site selection and payload range.
#[derive(Parser)]
#[command(name = "launch-report")]
struct Cli {
    /// Launch records CSV file
    dataset: PathBuf,

    /// Site selection: ALL or an exact site name
    #[arg(short, long, default_value = "ALL")]
    site: String,

    /// Payload range lower bound in kg (default: observed dataset minimum)
    #[arg(long)]
    min: Option<f64>,

    /// Payload range upper bound in kg (default: observed dataset maximum)
    #[arg(long)]
    max: Option<f64>,

    /// Emit both chart specs as JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Show dataset counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let dataset = match Dataset::from_csv_path(&cli.dataset) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error loading dataset '{}': {e}", cli.dataset.display());
            process::exit(1);
        }
    };

    let (observed_min, observed_max) = dataset.payload_bounds();
    let site = SiteSelection::from_value(&cli.site);
    let range = PayloadRange::new(
        cli.min.unwrap_or(observed_min),
        cli.max.unwrap_or(observed_max),
    );

    if cli.verbose {
        eprintln!("Dataset: {}", cli.dataset.display());
        eprintln!("Records: {}", dataset.len());
        eprintln!("Sites:   {}", dataset.sites().join(", "));
        eprintln!("Payload: {observed_min} - {observed_max} kg observed");
    }

    let pie = success_pie(&dataset, &site);
    let scatter = payload_scatter(&dataset, &site, range);

    if cli.json {
        let report = serde_json::json!({
            "pie": pie,
            "scatter": scatter,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    print_chart(&pie);
    println!();
    print_chart(&scatter);
}

fn print_chart(spec: &ChartSpec) {
    println!("{}", spec.title());
    match spec {
        ChartSpec::Pie { slices, .. } => {
            if slices.is_empty() {
                println!("  (no data)");
            }
            for slice in slices {
                println!("  {:<12} {}", slice.label, slice.value);
            }
        }
        ChartSpec::Scatter {
            x_range, points, ..
        } => {
            println!("  payload range: {} - {} kg", x_range.0, x_range.1);
            if points.is_empty() {
                println!("  (no data)");
            }
            for point in points {
                println!(
                    "  {:>8} kg  class={}  {}",
                    point.payload_mass_kg, point.success, point.booster_version_category
                );
            }
        }
    }
}
