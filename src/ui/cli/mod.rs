// Sun Oct 18 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, Command, InputArgs, MedianArgs, PivotArgs, SweepArgs};
pub use handler::{run_demo, CommandHandler, DEMO_INPUTS};

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    let handler = CommandHandler::new();
    handler.execute(args)
}
