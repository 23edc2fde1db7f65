mod cli;
mod functions;
mod global;
mod validators;

use clap::Parser;
use eyre::Result;
use log::info;
use log::LevelFilter;

fn main() -> Result<()> {
    // Info by default, RUST_LOG still wins
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    info!("InfluxDB Highly Staked query predicate");

    crate::cli::Cli::parse().run()
}
