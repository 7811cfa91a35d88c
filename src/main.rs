//! CLI entry point for the irregular grid packer

use clap::Parser;
use irregrid::io::cli::{BatchRunner, Cli};
use irregrid::io::logging::init_tracing;

fn main() -> irregrid::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let mut runner = BatchRunner::new(cli);
    runner.run()
}
