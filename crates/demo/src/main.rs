// File: crates/demo/src/main.rs
// Summary: Renders the function, convergence and global charts for a saved compute response to PNGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{format_number, format_scientific, ChartConfig, ComputeResponse, Dashboard, Quintic, RasterSurface};
use clap::Parser;
use tracing::info;

/// Draw Newton-Raphson charts from a backend compute response
#[derive(Parser, Debug)]
#[command(name = "newton-chart")]
#[command(version)]
struct Args {
    /// Compute response JSON
    #[arg(short, long, default_value = "demos/response.json")]
    response: PathBuf,

    /// Directory for the PNG files
    #[arg(short, long, default_value = "target/charts")]
    out_dir: PathBuf,

    /// Chart config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset, overrides the config file
    #[arg(long)]
    theme: Option<String>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Skip ticks, titles and legends
    #[arg(long)]
    no_labels: bool,

    /// Print the function metadata as JSON and exit
    #[arg(long)]
    info: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if args.info {
        println!("{}", serde_json::to_string_pretty(&Quintic::info())?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    config.width = args.width.unwrap_or(config.width);
    config.height = args.height.unwrap_or(config.height);
    config.draw_labels &= !args.no_labels;
    config.validate()?;

    let text = std::fs::read_to_string(&args.response)
        .with_context(|| format!("reading response {}", args.response.display()))?;
    let response = ComputeResponse::from_json(&text)?;

    let surface = || RasterSurface::new(config.width, config.height);
    let mut dashboard = Dashboard::new(config.clone(), surface()?, surface()?, surface()?)?;
    dashboard
        .show(&response)
        .with_context(|| format!("drawing charts for {}", args.response.display()))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let out = |name: &str| args.out_dir.join(name);
    dashboard.function_chart().write_png(out("function.png"))?;
    dashboard.convergence_chart().write_png(out("convergence.png"))?;
    dashboard.global_chart().write_png(out("global.png"))?;
    info!("Wrote charts to {}", args.out_dir.display());

    if let Some(result) = &response.result {
        let last_error = response
            .plot_convergence
            .as_ref()
            .and_then(|c| c.errors.last().copied());
        info!(
            root = %format_number(result.root, 10),
            iterations = result.total_iterations,
            converged = result.converged,
            last_error = %format_scientific(last_error),
            "solve summary"
        );
    }
    Ok(())
}
