//! fleetbook - fleet list maintenance from the command line
//!
//! Parses pasted fleet text and inspects the tables the web site serves.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
