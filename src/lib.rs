#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod engine;
pub mod error;
pub mod stage;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::PinArgs::parse();

    // Trace level carries the per-line input echo from the scanner.
    let level = if args.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    command::pin::execute(args)
}
