//! mvperf command-line entry point

use clap::Parser;
use mvperf_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
