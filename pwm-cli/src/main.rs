//! pwm-cli - command line tool for the Philippine waste management
//! dashboard datasets: computes the metric cards and chart specs the
//! web frontend renders, printing them as JSON.

use clap::Parser;
use std::path::PathBuf;

mod cmd;

#[derive(Parser)]
#[command(
    name = "pwm-cli",
    version,
    about = "Philippine waste management data toolkit"
)]
struct Cli {
    /// Data directory (waste/<year>.csv, boundaries/<year>.geojson,
    /// educ_by_*.geojson)
    #[arg(short, long, default_value = "datasets")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = pwm_data::DatasetStore::load(&cli.data_dir)?;
    cmd::run(&store, cli.command)
}
