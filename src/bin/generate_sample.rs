use anyhow::Result;
use clap::Parser;

use level_graphs::data::sample::{SampleSpec, write_sample_session};

/// Write a synthetic session (one CSV per metric) for trying out the plots.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Prefix for the written files, e.g. `demo/session1_`
    #[arg(default_value = "sample_")]
    prefix: String,

    #[arg(short, long, default_value_t = 12)]
    players: usize,

    #[arg(short, long, default_value_t = 20)]
    levels: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spec = SampleSpec {
        players: args.players,
        levels: args.levels,
        seed: args.seed,
        ..SampleSpec::default()
    };
    let written = write_sample_session(&args.prefix, &spec)?;

    for path in &written {
        println!("{}", path.display());
    }
    println!(
        "Wrote {} files ({} players × {} levels each)",
        written.len(),
        spec.players,
        spec.levels
    );
    Ok(())
}
