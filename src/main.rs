use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use level_graphs::data::loader::load_metric;
use level_graphs::data::metric::Metric;
use level_graphs::render::{PngRenderer, Renderer, WindowRenderer, render_metric};
use level_graphs::summary::MetricSummary;

#[derive(Parser)]
#[command(name = "level-graphs", version)]
#[command(about = "Plot per-level averages and per-player lines from playtest CSV telemetry", long_about = None)]
struct Cli {
    /// Prepended to every metric file name, e.g. `runs/day1_`
    #[arg(value_name = "PREFIX", required = true)]
    prefixes: Vec<String>,

    /// Only plot this metric (file name or stem); repeat for several
    #[arg(short, long = "metric", value_name = "METRIC")]
    metrics: Vec<Metric>,

    /// Save PNG files to this directory instead of opening windows
    #[arg(short, long, env = "LEVEL_GRAPHS_SAVE_DIR", value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Print a JSON line with the per-level averages of each metric
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut renderer: Box<dyn Renderer> = match &cli.save_dir {
        Some(dir) => Box::new(PngRenderer::new(dir)?),
        None => Box::new(WindowRenderer::default()),
    };

    let metrics = Metric::select(&cli.metrics);
    info!(
        "plotting {} metric(s) from {} prefix(es)",
        metrics.len(),
        cli.prefixes.len()
    );

    for metric in metrics {
        let matrix = load_metric(metric, cli.prefixes.as_slice())?;
        if cli.summary {
            println!("{}", MetricSummary::new(metric, &matrix).to_json_line()?);
        }
        render_metric(renderer.as_mut(), metric, &matrix)?;
    }

    Ok(())
}
