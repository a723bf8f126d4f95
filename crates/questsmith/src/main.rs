//! Questsmith command-line front end.

use clap::Parser;
use questsmith::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    questsmith::init_tracing(cli.verbose);
    run(cli)
}
