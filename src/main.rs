//! COLPAD CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, pad the batch, and exit
//! non-zero on the first failure. For programmatic use, prefer `colpad::api`.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
