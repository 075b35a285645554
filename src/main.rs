use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use strainmap::render::{draw_baseline_box, draw_sensors};
use strainmap::{AnalysisConfig, SensorPipeline};

#[derive(Parser)]
#[command(name = "strainmap")]
#[command(about = "Place strain sensors on a rendered stress map")]
struct Cli {
    /// Baseline image: part silhouette on the background canvas
    #[arg(value_name = "BASELINE")]
    baseline_path: PathBuf,

    /// Values image: tensile/compressive overlay on the same canvas
    #[arg(value_name = "VALUES")]
    values_path: PathBuf,

    /// Physical part length along the image x axis
    #[arg(long)]
    length: f64,

    /// Physical part height along the image y axis
    #[arg(long)]
    height: f64,

    /// JSON file overriding analysis parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report only the N longest sensors
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Draw the reported sensors onto the values image and save it here
    #[arg(long, value_name = "PNG")]
    render: Option<PathBuf>,

    /// Save intermediate masks to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Assemble candidates on a single thread
    #[arg(long)]
    sequential: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if args.sequential {
        config.parallel = false;
    }

    let mut pipeline = SensorPipeline::new()
        .with_config(config)
        .with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let report = pipeline
        .run_files(&args.baseline_path, &args.values_path, args.length, args.height)
        .context("Sensor analysis failed")?;

    let shown = report.longest(args.count.unwrap_or(report.sensors.len()));

    println!("\n=== Sensor Placement Results ===");
    println!(
        "Accepted sensors: {} ({} candidates rejected)",
        report.sensors.len(),
        report.rejected
    );

    if shown.is_empty() {
        println!("No sensors found.");
    } else {
        println!("\nSensors (longest first):");
        for (i, sensor) in shown.iter().enumerate() {
            println!(
                "  {:>2}. {:<11} length {:>7.1}  ({}, {}) -> ({}, {})",
                i + 1,
                sensor.kind,
                sensor.length,
                sensor.p1.x,
                sensor.p1.y,
                sensor.p2.x,
                sensor.p2.y
            );

            if args.verbose {
                let [center, leg1, leg2] = sensor.physical_segments(&report.context);
                println!(
                    "      physical ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    center.start.x,
                    center.start.y,
                    center.end.x,
                    center.end.y
                );
                println!(
                    "      anchors ({:.1}, {:.1}) / ({:.1}, {:.1})",
                    leg1.end.x,
                    leg1.end.y,
                    leg2.end.x,
                    leg2.end.y
                );
            }
        }
    }

    if let Some(out) = args.render {
        let values = image::open(&args.values_path)
            .with_context(|| format!("Failed to open {}", args.values_path.display()))?
            .to_rgb8();
        let framed = draw_baseline_box(&values, &report.context.baseline_box, [0, 0, 255]);
        let drawn = draw_sensors(&framed, shown.iter().copied(), &report.context.config.stroke);
        drawn
            .save(&out)
            .map_err(|e| anyhow::anyhow!("Failed to save rendering: {}", e))?;
        println!("\nRendering saved to {}", out.display());
    }

    Ok(())
}
